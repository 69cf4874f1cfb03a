use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Parse,
    Sort,
    Scan,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Parse => "parse",
            Stage::Sort => "sort",
            Stage::Scan => "scan",
        };
        f.write_str(name)
    }
}

/// Wall-clock duration of each pipeline stage.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StageTimings {
    pub parse: Duration,
    pub sort: Duration,
    pub scan: Duration,
}

impl StageTimings {
    /// Runs `f`, stores its elapsed time under `stage`, and returns its value.
    pub fn measure<T>(&mut self, stage: Stage, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let value = f();
        self.set(stage, start.elapsed());
        value
    }

    pub fn set(&mut self, stage: Stage, elapsed: Duration) {
        match stage {
            Stage::Parse => self.parse = elapsed,
            Stage::Sort => self.sort = elapsed,
            Stage::Scan => self.scan = elapsed,
        }
    }

    pub fn get(&self, stage: Stage) -> Duration {
        match stage {
            Stage::Parse => self.parse,
            Stage::Sort => self.sort,
            Stage::Scan => self.scan,
        }
    }

    pub fn total(&self) -> Duration {
        self.parse + self.sort + self.scan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_returns_value_and_records_stage() {
        let mut timings = StageTimings::default();
        let value = timings.measure(Stage::Sort, || 41 + 1);
        assert_eq!(value, 42);
        assert_eq!(timings.parse, Duration::ZERO);
        assert_eq!(timings.get(Stage::Sort), timings.sort);
    }

    #[test]
    fn total_sums_every_stage() {
        let mut timings = StageTimings::default();
        timings.set(Stage::Parse, Duration::from_millis(3));
        timings.set(Stage::Sort, Duration::from_millis(4));
        timings.set(Stage::Scan, Duration::from_millis(5));
        assert_eq!(timings.total(), Duration::from_millis(12));
        assert_eq!(Stage::Scan.to_string(), "scan");
    }
}

use crate::selection::Selection;
use std::sync::Mutex;

pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    pub runs: usize,
    pub scanned: usize,
    pub rejected: usize,
    pub chosen: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics::default()),
        }
    }

    pub fn record_selection(&self, selection: &Selection) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.runs += 1;
            metrics.scanned += selection.scanned;
            metrics.rejected += selection.rejected;
            metrics.chosen += selection.len();
        }
    }

    pub fn snapshot(&self) -> Metrics {
        self.inner
            .lock()
            .map(|metrics| *metrics)
            .unwrap_or_default()
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn accumulates_selection_counts() {
        let recorder = MetricsRecorder::new();
        let selection = Selection {
            points: vec![Point::new(0.0, 0.0), Point::new(0.5, 0.0)],
            scanned: 3,
            rejected: 1,
            captures: 1,
        };
        recorder.record_selection(&selection);
        recorder.record_selection(&selection);

        let metrics = recorder.snapshot();
        assert_eq!(metrics.runs, 2);
        assert_eq!(metrics.scanned, 6);
        assert_eq!(metrics.rejected, 2);
        assert_eq!(metrics.chosen, 4);
    }
}

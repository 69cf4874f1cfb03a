use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use sensorcore::codec::{parse_input, read_input_file};
use sensorcore::prelude::SensorInput;
use sensorcore::selection::{sort_by_x, Selection, SubsetFinder};
use sensorcore::telemetry::{MetricsRecorder, Stage, StageTimings};
use log::debug;
use std::io::{self, BufRead};

pub struct WorkflowResult {
    pub threshold: f64,
    pub sensor_count: usize,
    pub selection: Selection,
    pub timings: StageTimings,
}

pub struct Runner {
    config: WorkflowConfig,
    metrics: MetricsRecorder,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self {
            config,
            metrics: MetricsRecorder::new(),
        }
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }

    /// Reads sensors from the configured input file, or standard input when
    /// no file is configured, then runs the selection.
    pub fn execute(&self) -> anyhow::Result<WorkflowResult> {
        match &self.config.input_path {
            Some(path) => {
                let mut timings = StageTimings::default();
                let input = timings
                    .measure(Stage::Parse, || read_input_file(path))
                    .with_context(|| format!("loading sensors from {}", path.display()))?;
                Ok(self.solve(input, timings))
            }
            None => {
                let stdin = io::stdin();
                self.execute_from(stdin.lock())
            }
        }
    }

    pub fn execute_from<R: BufRead>(&self, reader: R) -> anyhow::Result<WorkflowResult> {
        let mut timings = StageTimings::default();
        let input = timings
            .measure(Stage::Parse, || parse_input(reader))
            .context("loading sensors from input stream")?;
        Ok(self.solve(input, timings))
    }

    fn solve(&self, input: SensorInput, mut timings: StageTimings) -> WorkflowResult {
        let SensorInput {
            threshold,
            mut sensors,
        } = input;
        let sensor_count = sensors.len();

        timings.measure(Stage::Sort, || sort_by_x(&mut sensors));

        let finder = SubsetFinder::new(threshold);
        let selection = timings.measure(Stage::Scan, || finder.select(&sensors));
        self.metrics.record_selection(&selection);

        for stage in [Stage::Parse, Stage::Sort, Stage::Scan] {
            debug!("{} stage took {:?}", stage, timings.get(stage));
        }
        debug!("pipeline took {:?}", timings.total());

        WorkflowResult {
            threshold: finder.threshold(),
            sensor_count,
            selection,
            timings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensorcore::geometry::Point;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn runner_selects_clustered_sensors() {
        let runner = Runner::new(WorkflowConfig::default());
        let result = runner
            .execute_from("1.0\n0,0\n0.5,0\n10,10\n0.9,0".as_bytes())
            .unwrap();
        assert_eq!(result.threshold, 1.0);
        assert_eq!(result.sensor_count, 4);
        assert_eq!(
            result.selection.points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.5, 0.0),
                Point::new(0.9, 0.0)
            ]
        );
        assert_eq!(runner.metrics().snapshot().runs, 1);
    }

    #[test]
    fn single_sensor_produces_empty_selection() {
        let runner = Runner::new(WorkflowConfig::default());
        let result = runner.execute_from("5.0\n1,1".as_bytes()).unwrap();
        assert_eq!(result.sensor_count, 1);
        assert!(result.selection.is_empty());
    }

    #[test]
    fn malformed_input_fails_without_result() {
        let runner = Runner::new(WorkflowConfig::default());
        assert!(runner.execute_from("5.0\nabc,def".as_bytes()).is_err());
        assert_eq!(runner.metrics().snapshot().runs, 0);
    }

    #[test]
    fn runner_reads_configured_input_file() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"2.0\n3,3\n0,0\n1,1\n").unwrap();
        let path = temp.into_temp_path();

        let config = WorkflowConfig {
            input_path: Some(path.to_path_buf()),
            ..Default::default()
        };
        let result = Runner::new(config).execute().unwrap();
        assert_eq!(
            result.selection.points,
            vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]
        );
    }

    #[test]
    fn missing_input_file_is_an_error() {
        let config = WorkflowConfig {
            input_path: Some("/nonexistent/sensors.txt".into()),
            ..Default::default()
        };
        assert!(Runner::new(config).execute().is_err());
    }
}

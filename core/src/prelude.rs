use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Parsed contents of one input stream: the distance threshold followed by
/// every sensor coordinate in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorInput {
    pub threshold: f64,
    pub sensors: Vec<Point>,
}

impl SensorInput {
    pub fn new(threshold: f64, sensors: Vec<Point>) -> Self {
        Self { threshold, sensors }
    }
}

/// Common error type for reading, scanning and writing sensor data.
#[derive(thiserror::Error, Debug)]
pub enum SensorError {
    #[error("failed to read sensor input: {0}")]
    InputRead(#[source] std::io::Error),
    #[error("line {line}: cannot parse {text:?}: {reason}")]
    InputParse {
        line: usize,
        text: String,
        reason: String,
    },
    #[error("threshold must be a non-negative number, got {0}")]
    InvalidThreshold(f64),
    #[error("input contains a threshold but no sensor coordinates")]
    NoSensors,
    #[error("failed to write chosen sensors to {path}: {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type SensorResult<T> = Result<T, SensorError>;

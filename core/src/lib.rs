//! Core geometry and subset selection for the sensor-network tools.
//!
//! Sensors are read from a line-oriented text format, sorted by x, and
//! scanned once by a greedy finder that keeps growing a single candidate
//! set while every new sensor stays within the distance threshold.

pub mod codec;
pub mod geometry;
pub mod prelude;
pub mod selection;
pub mod telemetry;

pub use geometry::{distance, Point};
pub use prelude::{SensorError, SensorInput, SensorResult};
pub use selection::{find_largest_subset, Selection, SubsetFinder};

pub mod log;
pub mod metrics;
pub mod timing;

pub use self::log::LogManager;
pub use metrics::MetricsRecorder;
pub use timing::{Stage, StageTimings};

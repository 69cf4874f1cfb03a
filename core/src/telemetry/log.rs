use log::{debug, info, log_enabled, Level};

/// Thin wrapper over the `log` facade shared by the selection stages.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }

    /// Debug-level record. `message` is only built when debug output is on.
    pub fn trace<F: FnOnce() -> String>(&self, message: F) {
        if log_enabled!(Level::Debug) {
            debug!("{}", message());
        }
    }
}

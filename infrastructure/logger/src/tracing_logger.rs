use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business-layer log lines to `tracing`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "opinions", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "opinions", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "opinions", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "opinions", "{}", message);
    }
}

use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business-layer log lines to `tracing` under the `cart_service` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "cart_service", "{message}");
    }
    fn warn(&self, message: &str) {
        warn!(target: "cart_service", "{message}");
    }
    fn error(&self, message: &str) {
        error!(target: "cart_service", "{message}");
    }
    fn debug(&self, message: &str) {
        debug!(target: "cart_service", "{message}");
    }
}

use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Adapts the domain logging port onto the tracing facade.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "pie_shop", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "pie_shop", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "pie_shop", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "pie_shop", "{}", message);
    }
}

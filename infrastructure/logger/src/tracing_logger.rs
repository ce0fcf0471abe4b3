use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Marketplace -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Marketplace -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Marketplace -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Marketplace -- ", "{}", message);
    }
}

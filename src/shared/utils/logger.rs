use log::{debug, info, warn};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup; `RUST_LOG` overrides the defaults
pub fn init_logger() {
    INIT.call_once(|| {
        let initialized = env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("catalog_lib", log::LevelFilter::Debug) // More verbose for our crate
            .parse_default_env()
            .format_timestamp_millis()
            .format_module_path(false)
            .try_init();

        if initialized.is_ok() {
            info!("Logging system initialized");
        }
    });
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    pub fn use_case_started(use_case: &str, subject: &str) {
        debug!("UseCase: {} started for '{}'", use_case, subject);
    }

    pub fn use_case_rejected(use_case: &str, error_count: usize) {
        warn!(
            "UseCase: {} rejected the command with {} validation error(s)",
            use_case, error_count
        );
    }

    pub fn use_case_not_found(use_case: &str, aggregate: &str, id: &str) {
        debug!("UseCase: {} found no {} with ID {}", use_case, aggregate, id);
    }

    pub fn use_case_completed(use_case: &str, id: &str) {
        info!("UseCase: {} completed for {}", use_case, id);
    }

    /// Log repository operations
    pub fn repository_operation(operation: &str, aggregate: &str, affected: usize) {
        debug!("Repository: {} on {} affected {} item(s)", operation, aggregate, affected);
    }

    /// Log performance metrics
    pub fn performance_metric(operation: &str, duration_ms: u64) {
        debug!("Performance: {} took {}ms", operation, duration_ms);
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: &'static str,
}

impl TimedOperation {
    pub fn new(operation: &'static str) -> Self {
        Self {
            start: std::time::Instant::now(),
            operation,
        }
    }

    pub fn finish(self) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        LogContext::performance_metric(self.operation, duration);
        duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logger_is_idempotent() {
        init_logger();
        init_logger();
    }

    #[test]
    fn timed_operation_reports_elapsed_time() {
        let timer = TimedOperation::new("unit-test");
        std::thread::sleep(std::time::Duration::from_millis(2));
        assert!(timer.finish() >= 1);
    }
}

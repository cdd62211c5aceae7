// src/startup/logger.rs

use tracing::error;

/// Sink for resolver diagnostics.
///
/// A `fatal` message may end the process; whether it does is up to the
/// implementation.
pub trait Logger {
    fn error(&self, message: &str, fatal: bool);
}

/// Logger backed by `tracing`.
///
/// With `exit_on_fatal` set, a fatal message exits the process with code 1
/// after it has been logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger {
    exit_on_fatal: bool,
}

impl TracingLogger {
    pub fn new(exit_on_fatal: bool) -> Self {
        Self { exit_on_fatal }
    }
}

impl Logger for TracingLogger {
    fn error(&self, message: &str, fatal: bool) {
        error!(fatal, "{message}");
        if fatal && self.exit_on_fatal {
            std::process::exit(1);
        }
    }
}

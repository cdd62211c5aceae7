use std::sync::{Arc, Mutex};

use devlaunch::startup::Logger;

/// One captured `Logger::error` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedError {
    pub message: String,
    pub fatal: bool,
}

/// A logger that:
/// - records every `error` call
/// - never exits the process, even for fatal messages.
#[derive(Debug, Clone, Default)]
pub struct RecordingLogger {
    entries: Arc<Mutex<Vec<LoggedError>>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LoggedError> {
        self.entries.lock().unwrap().clone()
    }

    pub fn fatal_count(&self) -> usize {
        self.entries.lock().unwrap().iter().filter(|e| e.fatal).count()
    }
}

impl Logger for RecordingLogger {
    fn error(&self, message: &str, fatal: bool) {
        let mut guard = self.entries.lock().unwrap();
        guard.push(LoggedError {
            message: message.to_string(),
            fatal,
        });
    }
}

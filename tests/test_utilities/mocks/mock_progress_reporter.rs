use npm_stats::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ProgressReporter that records every message with a prefix per kind
///
/// Clones share the same log, so a test can keep one clone while the
/// use case owns the other.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    log: Arc<Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    /// Warnings and errors, without their `Error: ` prefix
    pub fn errors(&self) -> Vec<String> {
        self.with_prefix("Error: ")
    }

    pub fn completions(&self) -> Vec<String> {
        self.with_prefix("Completed: ")
    }

    fn with_prefix(&self, prefix: &str) -> Vec<String> {
        self.messages()
            .iter()
            .filter_map(|m| m.strip_prefix(prefix))
            .map(str::to_string)
            .collect()
    }

    fn push(&self, entry: String) {
        self.log.lock().unwrap().push(entry);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        match message {
            Some(m) => self.push(format!("Progress: {}/{} - {}", current, total, m)),
            None => self.push(format!("Progress: {}/{}", current, total)),
        }
    }

    fn report_error(&self, message: &str) {
        self.push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.push(format!("Completed: {}", message));
    }
}

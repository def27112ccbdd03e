//! Shared helpers for integration tests

use ddg_scout::EventSink;
use std::sync::Mutex;

/// Event sink capturing messages for assertions
#[derive(Default)]
pub struct RecordingSink {
    info_messages: Mutex<Vec<String>>,
    error_messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn infos(&self) -> Vec<String> {
        self.info_messages.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.error_messages.lock().unwrap().clone()
    }
}

impl EventSink for RecordingSink {
    fn info(&self, message: &str) {
        self.info_messages.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.error_messages.lock().unwrap().push(message.to_string());
    }
}

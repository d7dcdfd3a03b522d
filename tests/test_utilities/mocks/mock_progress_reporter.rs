use content_preview::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ProgressReporter for testing that captures messages
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn start_loading(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Loading: {}", message));
    }

    fn finish_loading(&self, message: Option<&str>) {
        let msg = match message {
            Some(m) => format!("Done: {}", m),
            None => "Done".to_string(),
        };
        self.messages.lock().unwrap().push(msg);
    }
}

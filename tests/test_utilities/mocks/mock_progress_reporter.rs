use gem_matrix::prelude::*;
use std::cell::RefCell;

/// Mock ProgressReporter recording everything it is told
#[derive(Default)]
pub struct MockProgressReporter {
    pub messages: RefCell<Vec<String>>,
    pub ticks: RefCell<Vec<(usize, usize)>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.ticks.borrow_mut().push((current, total));
    }

    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

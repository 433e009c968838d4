//! Behavioral tests for page behaviors
//!
//! BDD-style tests using given-when-then naming. They exercise the decision
//! logic behind each behavior through the `Prompter` seam, without a browser.


use std::cell::{Cell, RefCell};

use crate::dom::Prompter;

/// Test double recording every dialog it is asked to show
#[derive(Debug, Default)]
pub struct RecordingPrompter {
    /// Messages passed to `alert`, in order
    pub alerts: RefCell<Vec<String>>,
    /// Messages passed to `confirm`, in order
    pub confirms: RefCell<Vec<String>>,
    /// Answer returned by `confirm`
    pub answer: Cell<bool>,
}

impl RecordingPrompter {
    /// A prompter that answers `confirm` with `answer`
    pub fn answering(answer: bool) -> Self {
        let prompter = Self::default();
        prompter.answer.set(answer);
        prompter
    }

    /// Number of alerts shown so far
    pub fn alert_count(&self) -> usize {
        self.alerts.borrow().len()
    }

    /// Most recent alert message
    pub fn last_alert(&self) -> Option<String> {
        self.alerts.borrow().last().cloned()
    }
}

impl Prompter for RecordingPrompter {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.answer.get()
    }
}

//! Prompter implementation backing the modal flow.
//!
//! A terminal cannot block the event loop the way a browser dialog does, so
//! confirmations run in two steps: the handler opens a modal, and once the
//! user picks an answer it re-invokes the controller with that answer
//! already resolved. Alerts raised during a call are captured here and
//! surfaced as modals by the caller.

use justdoit_core::Prompter;

pub struct ResolvedPrompt {
    answer: bool,
    alerts: Vec<String>,
}

impl ResolvedPrompt {
    pub fn approved() -> Self {
        Self {
            answer: true,
            alerts: Vec::new(),
        }
    }

    /// Alert raised by the controller during the call, if any.
    pub fn take_alert(&mut self) -> Option<String> {
        self.alerts.pop()
    }
}

impl Prompter for ResolvedPrompt {
    fn confirm(&mut self, _message: &str) -> bool {
        self.answer
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

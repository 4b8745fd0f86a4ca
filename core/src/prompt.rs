//! Synchronous user-confirmation capability.
//!
//! Destructive or rejected actions need an answer from the user before the
//! controller can proceed. The controller never talks to a terminal or a
//! window system directly; it asks whatever `Prompter` the host injected.
//! Frontends back this with a modal, tests with a scripted implementation.

/// Blocking yes/no questions and one-way notices shown to the user.
pub trait Prompter {
    /// Ask a yes/no question and block until the user answers.
    fn confirm(&mut self, message: &str) -> bool;

    /// Show a message the user must acknowledge.
    fn alert(&mut self, message: &str);
}

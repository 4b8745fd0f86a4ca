//! Terminal-side state layered over the core controller.
//!
//! The controller owns everything the page semantics need; this layer only
//! adds what a keyboard UI requires on top: a cursor, which input surface
//! has focus, and the active modal overlay.

use justdoit_core::TodoApp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
}

/// Which input surface currently receives keystrokes. Inline edits take
/// priority over both and are tracked by the controller itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Form(FormField),
}

/// Modal overlay; at most one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    ConfirmDelete { id: String },
    Alert { message: String },
}

pub struct Tui {
    pub app: TodoApp,
    pub selected: usize,
    pub focus: Focus,
    pub modal: Option<Modal>,
    pub clock: String,
}

impl Tui {
    pub fn new(app: TodoApp) -> Self {
        Self {
            app,
            selected: 0,
            focus: Focus::List,
            modal: None,
            clock: String::new(),
        }
    }

    pub fn selected_id(&self) -> Option<String> {
        self.app.todos().get(self.selected).map(|t| t.id.clone())
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let last = self.app.todos().len().saturating_sub(1);
        self.selected = (self.selected + 1).min(last);
    }

    /// Keep the cursor on a real row after the list shrank.
    pub fn clamp_selection(&mut self) {
        let last = self.app.todos().len().saturating_sub(1);
        self.selected = self.selected.min(last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use justdoit_core::TodoApi;

    fn tui() -> Tui {
        Tui::new(TodoApp::new(TodoApi::new("http://localhost:3000/todos")))
    }

    #[test]
    fn selection_on_empty_list_yields_no_id() {
        let mut tui = tui();
        assert!(tui.selected_id().is_none());
        tui.select_next();
        tui.select_previous();
        assert_eq!(tui.selected, 0);
    }
}

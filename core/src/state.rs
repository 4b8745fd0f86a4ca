//! View-state controller for the todo list.
//!
//! # Design
//! `TodoApp` owns the cached todo list and all transient UI state: the
//! new-todo draft, the row being edited, the set of expanded rows, and the
//! two independent error strings. Every action that touches the network is
//! split into a `begin_*` method (validates, adjusts pre-request state,
//! returns the request to execute) and a `finish_*` method (applies the
//! outcome). Purely local actions mutate state directly.
//!
//! There is no in-flight guard, no request deduplication, and no
//! cancellation: callers may overlap begin/finish pairs, and the last
//! `finish_*` applied wins on the affected cache entry. Nothing is updated
//! optimistically — local state changes only after the server confirmed.

use std::collections::HashSet;

use crate::api::TodoApi;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::prompt::Prompter;
use crate::types::{NewTodo, Todo, TodoPatch};

/// Inline error shown when the create form is submitted with a blank title.
pub const EMPTY_CREATE_TITLE_ERROR: &str = "Please enter a todo title";

/// Blocking alert shown when an edit is committed with a blank title.
pub const EMPTY_EDIT_TITLE_ALERT: &str = "Todo title cannot be empty";

/// Question asked before a delete request is sent.
pub const CONFIRM_DELETE_PROMPT: &str = "Are you sure you want to delete this todo?";

/// Buffer for the creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTodoDraft {
    pub title: String,
    pub description: String,
}

/// The one row currently in inline-edit mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editing {
    pub id: String,
    pub draft: String,
}

/// Stateful view controller mediating every user action through the backend.
#[derive(Debug)]
pub struct TodoApp {
    api: TodoApi,
    loading: bool,
    todos: Vec<Todo>,
    draft: NewTodoDraft,
    editing: Option<Editing>,
    expanded: HashSet<String>,
    load_error: Option<String>,
    form_error: Option<String>,
}

impl TodoApp {
    pub fn new(api: TodoApi) -> Self {
        Self {
            api,
            loading: true,
            todos: Vec::new(),
            draft: NewTodoDraft::default(),
            editing: None,
            expanded: HashSet::new(),
            load_error: None,
            form_error: None,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn draft(&self) -> &NewTodoDraft {
        &self.draft
    }

    pub fn editing(&self) -> Option<&Editing> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing.as_ref().map_or(false, |e| e.id == id)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    // --- initial load ---

    pub fn begin_load(&mut self) -> HttpRequest {
        self.loading = true;
        self.api.build_list()
    }

    pub fn finish_load(&mut self, result: Result<HttpResponse, ApiError>) {
        self.loading = false;
        match result.and_then(|resp| self.api.parse_list(resp)) {
            Ok(todos) => {
                self.todos = todos;
                self.load_error = None;
            }
            Err(err) => self.load_error = Some(self.connect_hint("Cannot connect to API", &err)),
        }
    }

    // --- create ---

    /// Typing in the title field clears the inline form error.
    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
        self.form_error = None;
    }

    pub fn set_draft_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    /// Returns `None` without issuing a request when the trimmed title is
    /// empty. The title is sent as typed; only validation trims.
    pub fn begin_create(&mut self) -> Option<HttpRequest> {
        if self.draft.title.trim().is_empty() {
            self.form_error = Some(EMPTY_CREATE_TITLE_ERROR.to_string());
            return None;
        }
        self.form_error = None;
        let input = NewTodo {
            title: self.draft.title.clone(),
            description: self.draft.description.clone(),
            completed: false,
        };
        match self.api.build_create(&input) {
            Ok(req) => Some(req),
            Err(err) => {
                self.form_error = Some(format!("Failed to create todo: {err}"));
                None
            }
        }
    }

    /// On success the server entity is appended and the draft cleared; on
    /// failure the draft is preserved so typed input is not lost.
    pub fn finish_create(&mut self, result: Result<HttpResponse, ApiError>) {
        match result.and_then(|resp| self.api.parse_create(resp)) {
            Ok(todo) => {
                self.todos.push(todo);
                self.draft = NewTodoDraft::default();
                self.form_error = None;
                self.load_error = None;
            }
            Err(err) => {
                self.form_error = Some(format!("Failed to create todo: {err}"));
                self.load_error = Some(self.connect_hint("Error", &err));
            }
        }
    }

    // --- toggle completion ---

    /// Selecting a row that is being edited is a no-op, as is an unknown id.
    pub fn begin_toggle(&mut self, id: &str) -> Option<HttpRequest> {
        if self.is_editing(id) {
            return None;
        }
        let current = self.todos.iter().find(|t| t.id == id)?.completed;
        match self.api.build_update(id, &TodoPatch::completed(!current)) {
            Ok(req) => Some(req),
            Err(err) => {
                self.load_error = Some(err.to_string());
                None
            }
        }
    }

    pub fn finish_toggle(&mut self, result: Result<HttpResponse, ApiError>) {
        match result.and_then(|resp| self.api.parse_update(resp)) {
            Ok(todo) => self.replace_todo(todo),
            Err(err) => self.load_error = Some(err.to_string()),
        }
    }

    // --- expand/collapse ---

    /// Purely local; never issues a request.
    pub fn toggle_expand(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    // --- inline title edit ---

    /// Starting an edit while another row is active replaces the active one.
    pub fn begin_edit(&mut self, id: &str) {
        if let Some(todo) = self.todos.iter().find(|t| t.id == id) {
            self.editing = Some(Editing {
                id: todo.id.clone(),
                draft: todo.title.clone(),
            });
        }
    }

    pub fn set_edit_draft(&mut self, text: impl Into<String>) {
        if let Some(editing) = &mut self.editing {
            editing.draft = text.into();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// A blank trimmed draft is rejected with a blocking alert and edit mode
    /// stays active. Otherwise the trimmed draft is sent as the new title.
    pub fn begin_edit_commit(&mut self, prompts: &mut dyn Prompter) -> Option<HttpRequest> {
        let editing = self.editing.as_ref()?;
        let trimmed = editing.draft.trim();
        if trimmed.is_empty() {
            prompts.alert(EMPTY_EDIT_TITLE_ALERT);
            return None;
        }
        let id = editing.id.clone();
        match self.api.build_update(&id, &TodoPatch::title(trimmed)) {
            Ok(req) => Some(req),
            Err(err) => {
                self.load_error = Some(err.to_string());
                None
            }
        }
    }

    pub fn finish_edit_commit(&mut self, result: Result<HttpResponse, ApiError>) {
        match result.and_then(|resp| self.api.parse_update(resp)) {
            Ok(todo) => {
                self.replace_todo(todo);
                self.editing = None;
                self.load_error = None;
            }
            Err(err) => self.load_error = Some(err.to_string()),
        }
    }

    // --- delete ---

    /// Asks for confirmation before building the request; declining aborts
    /// with no side effect.
    pub fn begin_delete(&mut self, id: &str, prompts: &mut dyn Prompter) -> Option<HttpRequest> {
        if !self.todos.iter().any(|t| t.id == id) {
            return None;
        }
        if !prompts.confirm(CONFIRM_DELETE_PROMPT) {
            return None;
        }
        Some(self.api.build_delete(id))
    }

    /// Removes exactly the deleted id. Expanded ids of deleted rows are left
    /// in place; rendering walks `todos`, so stale entries are inert.
    pub fn finish_delete(&mut self, id: &str, result: Result<HttpResponse, ApiError>) {
        match result.and_then(|resp| self.api.parse_delete(resp)) {
            Ok(()) => self.todos.retain(|t| t.id != id),
            Err(err) => self.load_error = Some(err.to_string()),
        }
    }

    fn replace_todo(&mut self, updated: Todo) {
        if let Some(slot) = self.todos.iter_mut().find(|t| t.id == updated.id) {
            *slot = updated;
        }
    }

    fn connect_hint(&self, prefix: &str, err: &ApiError) -> String {
        format!(
            "{prefix}: {err}. Make sure the backend is running on {}",
            self.api.base_url()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> TodoApp {
        TodoApp::new(TodoApi::new("http://localhost:3000/todos"))
    }

    fn ok(status: u16, body: &str) -> Result<HttpResponse, ApiError> {
        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        })
    }

    fn todo_json(id: &str, title: &str, completed: bool) -> String {
        format!(r#"{{"id":"{id}","title":"{title}","completed":{completed}}}"#)
    }

    fn loaded_app(todos: &[(&str, &str, bool)]) -> TodoApp {
        let body = format!(
            "[{}]",
            todos
                .iter()
                .map(|(id, title, completed)| todo_json(id, title, *completed))
                .collect::<Vec<_>>()
                .join(",")
        );
        let mut app = app();
        let _ = app.begin_load();
        app.finish_load(ok(200, &body));
        app
    }

    /// Scripted prompter answering every confirmation the same way and
    /// recording what was asked or announced.
    struct Scripted {
        answer: bool,
        confirms: Vec<String>,
        alerts: Vec<String>,
    }

    impl Scripted {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                confirms: Vec::new(),
                alerts: Vec::new(),
            }
        }
    }

    impl Prompter for Scripted {
        fn confirm(&mut self, message: &str) -> bool {
            self.confirms.push(message.to_string());
            self.answer
        }

        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }
    }

    // --- load ---

    #[test]
    fn starts_in_loading_state() {
        assert!(app().is_loading());
    }

    #[test]
    fn load_success_populates_list_in_response_order() {
        let app = loaded_app(&[("1", "Buy milk", false), ("2", "Walk dog", true)]);
        assert!(!app.is_loading());
        assert!(app.load_error().is_none());
        let ids: Vec<_> = app.todos().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn load_failure_sets_connectivity_banner() {
        let mut app = app();
        let _ = app.begin_load();
        app.finish_load(Err(ApiError::Connectivity("connection refused".to_string())));
        assert!(!app.is_loading());
        assert!(app.todos().is_empty());
        let banner = app.load_error().unwrap();
        assert!(banner.starts_with("Cannot connect to API: connection refused"));
        assert!(banner.contains("http://localhost:3000/todos"));
    }

    // --- create ---

    #[test]
    fn blank_create_title_blocks_request() {
        let mut app = loaded_app(&[]);
        app.set_draft_title("   ");
        assert!(app.begin_create().is_none());
        assert_eq!(app.form_error(), Some(EMPTY_CREATE_TITLE_ERROR));
        assert!(app.todos().is_empty());
    }

    #[test]
    fn typing_in_title_clears_form_error() {
        let mut app = loaded_app(&[]);
        app.set_draft_title("");
        assert!(app.begin_create().is_none());
        app.set_draft_title("B");
        assert!(app.form_error().is_none());
    }

    #[test]
    fn create_sends_draft_title_as_typed() {
        let mut app = loaded_app(&[]);
        app.set_draft_title("  Buy milk  ");
        app.set_draft_description("two liters");
        let req = app.begin_create().unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "  Buy milk  ");
        assert_eq!(body["description"], "two liters");
        assert_eq!(body["completed"], false);
    }

    #[test]
    fn create_success_appends_entity_and_clears_draft() {
        let mut app = loaded_app(&[("1", "First", false)]);
        app.set_draft_title("Second");
        let _ = app.begin_create().unwrap();
        app.finish_create(ok(201, &todo_json("2", "Second", false)));

        assert_eq!(app.todos().len(), 2);
        assert_eq!(app.todos()[1].id, "2");
        assert_eq!(app.draft(), &NewTodoDraft::default());
        assert!(app.form_error().is_none());
        assert!(app.load_error().is_none());
    }

    #[test]
    fn create_failure_preserves_draft_and_sets_both_errors() {
        let mut app = loaded_app(&[]);
        app.set_draft_title("Buy milk");
        app.set_draft_description("two liters");
        let _ = app.begin_create().unwrap();
        app.finish_create(ok(500, ""));

        assert!(app.todos().is_empty());
        assert_eq!(app.draft().title, "Buy milk");
        assert_eq!(app.draft().description, "two liters");
        assert_eq!(app.form_error(), Some("Failed to create todo: HTTP 500"));
        assert!(app.load_error().unwrap().contains("Make sure the backend is running"));
    }

    // --- toggle completion ---

    #[test]
    fn toggle_builds_patch_with_negated_value() {
        let mut app = loaded_app(&[("1", "Buy milk", false)]);
        let req = app.begin_toggle("1").unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"completed": true}));
    }

    #[test]
    fn toggle_is_noop_while_row_is_edited() {
        let mut app = loaded_app(&[("1", "Buy milk", false)]);
        app.begin_edit("1");
        assert!(app.begin_toggle("1").is_none());
        // Other rows stay selectable.
        let mut app = loaded_app(&[("1", "a", false), ("2", "b", false)]);
        app.begin_edit("1");
        assert!(app.begin_toggle("2").is_some());
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut app = loaded_app(&[]);
        assert!(app.begin_toggle("missing").is_none());
        assert!(app.load_error().is_none());
    }

    #[test]
    fn toggle_twice_round_trips_to_original_value() {
        let mut app = loaded_app(&[("1", "Buy milk", false)]);

        let _ = app.begin_toggle("1").unwrap();
        app.finish_toggle(ok(200, &todo_json("1", "Buy milk", true)));
        assert!(app.todos()[0].completed);

        let req = app.begin_toggle("1").unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"completed": false}));
        app.finish_toggle(ok(200, &todo_json("1", "Buy milk", false)));
        assert!(!app.todos()[0].completed);
    }

    #[test]
    fn toggle_failure_leaves_list_unchanged() {
        let mut app = loaded_app(&[("1", "Buy milk", false)]);
        let _ = app.begin_toggle("1").unwrap();
        app.finish_toggle(ok(500, ""));
        assert!(!app.todos()[0].completed);
        assert_eq!(app.load_error(), Some("HTTP 500"));
    }

    #[test]
    fn overlapping_toggles_apply_last_response() {
        // Two requests issued back to back; whichever response is applied
        // last wins the cache entry.
        let mut app = loaded_app(&[("1", "Buy milk", false)]);
        let _ = app.begin_toggle("1").unwrap();
        let _ = app.begin_toggle("1").unwrap();
        app.finish_toggle(ok(200, &todo_json("1", "Buy milk", true)));
        app.finish_toggle(ok(200, &todo_json("1", "Buy milk", false)));
        assert!(!app.todos()[0].completed);
    }

    // --- expand/collapse ---

    #[test]
    fn expand_toggle_is_idempotent_under_double_application() {
        let mut app = loaded_app(&[("1", "Buy milk", false)]);
        assert!(!app.is_expanded("1"));
        app.toggle_expand("1");
        assert!(app.is_expanded("1"));
        app.toggle_expand("1");
        assert!(!app.is_expanded("1"));
    }

    #[test]
    fn expand_survives_unrelated_state_changes() {
        let mut app = loaded_app(&[("1", "Buy milk", false)]);
        app.toggle_expand("1");
        let _ = app.begin_toggle("1").unwrap();
        app.finish_toggle(ok(200, &todo_json("1", "Buy milk", true)));
        assert!(app.is_expanded("1"));
    }

    // --- edit ---

    #[test]
    fn edit_start_seeds_draft_with_current_title() {
        let mut app = loaded_app(&[("1", "Buy milk", false)]);
        app.begin_edit("1");
        let editing = app.editing().unwrap();
        assert_eq!(editing.id, "1");
        assert_eq!(editing.draft, "Buy milk");
    }

    #[test]
    fn edit_last_start_wins() {
        let mut app = loaded_app(&[("1", "a", false), ("2", "b", false)]);
        app.begin_edit("1");
        app.begin_edit("2");
        assert_eq!(app.editing().unwrap().id, "2");
        assert_eq!(app.editing().unwrap().draft, "b");
    }

    #[test]
    fn blank_edit_commit_alerts_and_stays_editing() {
        let mut app = loaded_app(&[("1", "Buy milk", false)]);
        app.begin_edit("1");
        app.set_edit_draft("   ");
        let mut prompts = Scripted::answering(true);
        assert!(app.begin_edit_commit(&mut prompts).is_none());
        assert_eq!(prompts.alerts, [EMPTY_EDIT_TITLE_ALERT]);
        assert!(app.is_editing("1"));
    }

    #[test]
    fn edit_commit_sends_trimmed_title() {
        let mut app = loaded_app(&[("1", "Buy milk", false)]);
        app.begin_edit("1");
        app.set_edit_draft("  Buy bread  ");
        let mut prompts = Scripted::answering(true);
        let req = app.begin_edit_commit(&mut prompts).unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"title": "Buy bread"}));
    }

    #[test]
    fn edit_commit_success_replaces_row_and_exits_edit_mode() {
        let mut app = loaded_app(&[("1", "Buy milk", false)]);
        app.begin_edit("1");
        app.set_edit_draft("Buy bread");
        let mut prompts = Scripted::answering(true);
        let _ = app.begin_edit_commit(&mut prompts).unwrap();
        app.finish_edit_commit(ok(200, &todo_json("1", "Buy bread", false)));

        assert_eq!(app.todos()[0].title, "Buy bread");
        assert!(app.editing().is_none());
        assert!(app.load_error().is_none());
    }

    #[test]
    fn edit_commit_failure_keeps_edit_mode_and_draft() {
        let mut app = loaded_app(&[("1", "Buy milk", false)]);
        app.begin_edit("1");
        app.set_edit_draft("Buy bread");
        let mut prompts = Scripted::answering(true);
        let _ = app.begin_edit_commit(&mut prompts).unwrap();
        app.finish_edit_commit(ok(500, ""));

        assert_eq!(app.todos()[0].title, "Buy milk");
        assert_eq!(app.editing().unwrap().draft, "Buy bread");
        assert_eq!(app.load_error(), Some("HTTP 500"));
    }

    #[test]
    fn edit_cancel_discards_draft_without_request() {
        let mut app = loaded_app(&[("1", "Buy milk", false)]);
        app.begin_edit("1");
        app.set_edit_draft("Buy bread");
        app.cancel_edit();
        assert!(app.editing().is_none());
        assert_eq!(app.todos()[0].title, "Buy milk");
    }

    // --- delete ---

    #[test]
    fn delete_asks_before_building_request() {
        let mut app = loaded_app(&[("1", "Buy milk", false)]);
        let mut prompts = Scripted::answering(true);
        assert!(app.begin_delete("1", &mut prompts).is_some());
        assert_eq!(prompts.confirms, [CONFIRM_DELETE_PROMPT]);
    }

    #[test]
    fn delete_declined_has_no_side_effect() {
        let mut app = loaded_app(&[("1", "Buy milk", false)]);
        let mut prompts = Scripted::answering(false);
        assert!(app.begin_delete("1", &mut prompts).is_none());
        assert_eq!(app.todos().len(), 1);
        assert!(app.load_error().is_none());
    }

    #[test]
    fn delete_removes_exactly_that_id() {
        let mut app = loaded_app(&[("1", "a", false), ("2", "b", false), ("3", "c", false)]);
        let mut prompts = Scripted::answering(true);
        let _ = app.begin_delete("2", &mut prompts).unwrap();
        app.finish_delete("2", ok(204, ""));
        let ids: Vec<_> = app.todos().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn delete_leaves_stale_expanded_id_inert() {
        let mut app = loaded_app(&[("1", "Buy milk", false)]);
        app.toggle_expand("1");
        let mut prompts = Scripted::answering(true);
        let _ = app.begin_delete("1", &mut prompts).unwrap();
        app.finish_delete("1", ok(204, ""));

        assert!(app.todos().is_empty());
        // The stale id stays in the expanded set; nothing renders it.
        assert!(app.is_expanded("1"));
    }

    #[test]
    fn delete_failure_keeps_list_and_sets_banner() {
        let mut app = loaded_app(&[("1", "Buy milk", false)]);
        let mut prompts = Scripted::answering(true);
        let _ = app.begin_delete("1", &mut prompts).unwrap();
        app.finish_delete("1", ok(500, ""));
        assert_eq!(app.todos().len(), 1);
        assert_eq!(app.load_error(), Some("HTTP 500"));
    }
}

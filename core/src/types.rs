//! Domain DTOs for the todo API.
//!
//! # Design
//! The backend owns every `Todo`; the client holds cached copies and never
//! invents fields. Ids are opaque strings assigned by the server, and
//! `createdAt` is a server-assigned timestamp kept as a string because the
//! client only ever formats it for display. Older backends omit
//! `description` and `createdAt`, so both are tolerated as absent.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub completed: bool,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

/// Request payload for updating an existing todo. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            completed: None,
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self {
            title: None,
            completed: Some(completed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_tolerates_missing_optional_fields() {
        let todo: Todo =
            serde_json::from_str(r#"{"id":"1","title":"Buy milk","completed":false}"#).unwrap();
        assert_eq!(todo.id, "1");
        assert_eq!(todo.description, "");
        assert!(todo.created_at.is_none());
    }

    #[test]
    fn todo_reads_camel_case_created_at() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":"1","title":"Buy milk","completed":true,"createdAt":"2026-01-05T10:30:00Z"}"#,
        )
        .unwrap();
        assert_eq!(todo.created_at.as_deref(), Some("2026-01-05T10:30:00Z"));
    }

    #[test]
    fn patch_serializes_only_present_fields() {
        let json = serde_json::to_value(TodoPatch::completed(true)).unwrap();
        assert_eq!(json, serde_json::json!({"completed": true}));

        let json = serde_json::to_value(TodoPatch::title("Updated")).unwrap();
        assert_eq!(json, serde_json::json!({"title": "Updated"}));
    }

    #[test]
    fn new_todo_serializes_all_fields() {
        let input = NewTodo {
            title: "Buy milk".to_string(),
            description: String::new(),
            completed: false,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "Buy milk", "description": "", "completed": false})
        );
    }
}

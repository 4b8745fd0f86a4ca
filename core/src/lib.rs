//! View-state core for a todo list client.
//!
//! # Overview
//! A stateful view controller (`TodoApp`) owns the cached todo list and all
//! transient UI state, and mediates every user action through a REST
//! backend. Mutations are never applied optimistically — local state changes
//! only after the server's response is in hand.
//!
//! # Design
//! - Host-does-IO: `TodoApi` builds `HttpRequest` values and parses
//!   `HttpResponse` values without touching the network; `TodoApp` splits
//!   network actions into `begin_*` / `finish_*` pairs around that boundary.
//! - Blocking confirmations and alerts go through the injected `Prompter`,
//!   so frontends can back them with a modal and tests with a script.
//! - Presentation text and time formatting are pure functions in `view` and
//!   `clock`, asserted on directly in tests.

pub mod api;
pub mod clock;
pub mod error;
pub mod http;
pub mod prompt;
pub mod state;
pub mod types;
pub mod view;

pub use api::TodoApi;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use prompt::Prompter;
pub use state::{Editing, NewTodoDraft, TodoApp};
pub use types::{NewTodo, Todo, TodoPatch};

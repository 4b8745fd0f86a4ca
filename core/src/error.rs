//! Error types for the todo API client.
//!
//! # Design
//! Every non-2xx response lands in `Server` with the status code and the
//! `message` field of a JSON error body when the backend sent one. Transport
//! failures are constructed by the host executor as `Connectivity` and fed
//! back into the controller, so the controller can distinguish "the server
//! said no" from "the server never answered" when building user-facing text.

use std::fmt;

/// Errors surfaced by `TodoApi` parse methods and host executors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never completed — DNS failure, refused connection,
    /// closed socket. Reported by the host that executed the request.
    Connectivity(String),

    /// The server answered with a non-2xx status. `message` carries the
    /// `message` field of a JSON error body when one was present.
    Server { status: u16, message: Option<String> },

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Connectivity(msg) => write!(f, "{msg}"),
            ApiError::Server {
                message: Some(msg), ..
            } => write!(f, "{msg}"),
            ApiError::Server {
                status,
                message: None,
            } => write!(f, "HTTP {status}"),
            ApiError::Deserialization(msg) => {
                write!(f, "invalid response body: {msg}")
            }
            ApiError::Serialization(msg) => {
                write!(f, "could not encode request: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

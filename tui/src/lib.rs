//! Terminal frontend for the todo view controller.
//!
//! Wires the deterministic core to a real terminal: crossterm input,
//! ratatui rendering, a reqwest executor for the requests the controller
//! builds, and a once-per-second clock tick scoped to the event loop.

pub mod config;
pub mod error;
pub mod events;
pub mod keys;
pub mod prompt;
pub mod state;
pub mod transport;
pub mod ui;

//! Channel sync server library.
//!
//! Accepts client sessions over WebSocket, applies channel mutations and
//! streams each user's pending channel updates on request.

pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use ui::run as run_server;
pub use ui::{create_app, serve};

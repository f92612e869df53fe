//! WebSocket sync server implementation.

mod handler;
mod runner;
mod signal;
pub mod state;

pub use handler::session::{DispatchError, SessionHandler};
pub use runner::{create_app, run, serve};

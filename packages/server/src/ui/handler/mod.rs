//! Handler modules for HTTP and WebSocket endpoints.

pub mod http;
pub mod session;
pub mod websocket;

// Re-export HTTP handlers
pub use http::{get_channels, health_check};

// Re-export WebSocket handlers
pub use websocket::websocket_handler;

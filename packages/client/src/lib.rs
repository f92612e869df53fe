//! Roji client: channel sync engine, local channel storage and the
//! WebSocket transport used by the `roji-client` binary.

pub mod client;
pub mod command;
pub mod config;
pub mod database;
pub mod error;
pub mod transport;

pub use client::{Client, SessionState};
pub use command::{Command, CommandError};
pub use config::{ClientConfig, ConfigError};
pub use database::{ChannelConfig, Database, DatabaseError, InMemoryDatabase, JsonFileDatabase};
pub use error::ClientError;
pub use transport::WsConnection;

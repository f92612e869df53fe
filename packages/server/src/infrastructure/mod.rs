//! Infrastructure layer: storage and transport adapters.

pub mod dto;
pub mod repository;
pub mod transport;

//! Adapters - concrete implementations of the ports.

pub mod clock;
pub mod context;
pub mod document;
pub mod profile;
pub mod sqlite;
pub mod templates;

//! Core module - server configuration, state and bootstrap
//!
//! # Structure
//!
//! - [`Config`] - environment-driven configuration
//! - [`ServerState`] - shared state holding the catalog adapters
//! - [`Server`] - HTTP server bootstrap

pub mod config;
pub mod server;
pub mod state;

pub use config::{CloudinaryConfig, Config};
pub use server::Server;
pub use state::ServerState;

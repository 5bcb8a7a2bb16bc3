//! Shared configuration library for Hearth.
//!
//! This crate centralizes config loading and validation so the server
//! binary and tests share a single source of truth for defaults and
//! validation rules. Values come from the environment (optionally seeded
//! from a `.env` file by the caller); the loader never writes anything.

pub mod loader;
pub mod models;

pub use loader::{ConfigLoadError, ConfigLoader};
pub use models::{Config, CorsConfig, DatabaseConfig, ServerConfig};

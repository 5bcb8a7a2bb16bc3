//! Hearth server library: transport wiring for the public listing API.
//!
//! Routes, handlers, application state and the single place where domain
//! errors become HTTP responses.

#![allow(missing_docs)]

pub mod errors;
pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;

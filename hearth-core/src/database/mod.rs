//! Storage access for the listing platform.
//!
//! Consumers depend on the async traits in [`ports`]; the PostgreSQL
//! implementations in [`postgres`] are wired in at startup.

pub mod ports;
pub mod postgres;

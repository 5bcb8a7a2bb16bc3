//! # Hearth Core
//!
//! Domain logic and persistence for the Hearth listing platform.
//!
//! ## Overview
//!
//! `hearth-core` carries the catalog query & projection subsystem and the
//! public submission paths:
//!
//! - **Query normalization**: loosely-typed filter/sort/page parameters
//!   become a validated, deterministic retrieval plan ([`query`])
//! - **Catalog engine**: plan execution against the home collection with
//!   a stable sort order and an explicit details join ([`database`])
//! - **Projections**: summary cards and full detail views ([`catalog`])
//! - **Submissions**: validated contact-message and visit-request writes
//!   ([`contact`], [`visits`])
//!
//! ## Architecture
//!
//! Storage access goes through async ports in [`database::ports`]; the
//! PostgreSQL implementations live in [`database::postgres`]. Services
//! hold `Arc<dyn Port>` handles so transports and tests can swap the
//! backing store.

#![allow(missing_docs)]

/// Catalog service and projection mappers
pub mod catalog;

/// Contact-message validation and submission
pub mod contact;

/// Database ports and PostgreSQL implementations
pub mod database;

/// Error types shared across the crate
pub mod error;

/// Query normalization: filter, sort key and page plan
pub mod query;

/// Visit-request validation and submission
pub mod visits;

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

pub use catalog::CatalogService;
pub use contact::ContactMessageService;
pub use error::{ListingError, Result};
pub use query::{CatalogQuery, SortKey};
pub use visits::VisitsService;

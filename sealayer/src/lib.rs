//! SeaLayer - marine spatial planning catalogue engine
//!
//! This library loads the three Symphony catalogue documents (layers,
//! measurement parameters, datasets), indexes them into an immutable
//! in-memory snapshot, and answers search, filter, sort, join and
//! summary queries over it. The three collections share no keys; every
//! relationship between them is recovered by string matching at query
//! time.
//!
//! # High-Level API
//!
//! Most consumers go through the [`service`] facade:
//!
//! ```ignore
//! use sealayer::query::{sort_layers, SortDirection, SortField};
//! use sealayer::service::{CatalogService, ServiceConfig};
//!
//! let service = CatalogService::new(ServiceConfig::default())?;
//! let snapshot = service.snapshot().await?;
//!
//! let ranked = sort_layers(
//!     snapshot.layers().iter().collect(),
//!     SortField::AvailabilityIndex,
//!     SortDirection::Descending,
//! );
//! ```

pub mod config;
pub mod fetch;
pub mod index;
pub mod join;
pub mod logging;
pub mod model;
pub mod query;
pub mod service;
pub mod snapshot;
pub mod stats;

/// Version of the SeaLayer library and CLI.
///
/// Synchronized across the workspace; defined in `Cargo.toml` and
/// injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

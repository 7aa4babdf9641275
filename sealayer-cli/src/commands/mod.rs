//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (get, set, list, path, init)
//! - [`datasets`] - Dataset listing and parameter joins
//! - [`layers`] - Layer listing with filtering and sorting
//! - [`parameters`] - Parameter listing and single-code detail
//! - [`show`] - Single layer detail
//! - [`stats`] - Catalogue summary
//! - [`themes`] - Theme listing

pub mod common;
pub mod config;
pub mod datasets;
pub mod layers;
pub mod parameters;
pub mod show;
pub mod stats;
pub mod themes;

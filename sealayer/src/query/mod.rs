//! Read-only queries over snapshot collections.
//!
//! Three independent, composable operations: substring [`search`],
//! conjunctive [`filter`] and stable [`sort`]. All of them are pure
//! functions from borrowed collections to vectors of borrowed results;
//! nothing here holds state or mutates the snapshot.
//!
//! [`search`]: search_layers
//! [`filter`]: filter_layers
//! [`sort`]: sort_layers

mod filter;
mod search;
mod sort;

pub use filter::{filter_layers, LayerFilter};
pub use search::{search_datasets, search_layers, search_parameters};
pub use sort::{compare_layers, sort_layers, SortDirection, SortField};

//! Data model for the three catalogue collections.
//!
//! The collections are published as three independent JSON documents with
//! no referential integrity between them; everything that ties them
//! together is string matching done elsewhere (see [`crate::index`] and
//! [`crate::join`]). Parsing is deliberately lenient: a malformed field
//! degrades to a default instead of rejecting the record, because the
//! upstream exports are hand-maintained.

mod dataset;
mod de;
mod layer;
mod parameter;

pub use dataset::{Dataset, EndYear};
pub use layer::{Difficulty, ImprovementPotential, Layer, ParameterRef};
pub use parameter::{entries_from_map, ParameterEntry};

//! Service-level errors.

use thiserror::Error;

use crate::fetch::FetchError;
use crate::snapshot::LoadError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    /// The document fetcher could not be constructed.
    #[error("failed to set up the catalogue fetcher: {0}")]
    Fetcher(#[from] FetchError),
    /// A catalogue load failed; see [`LoadError`] for the stage.
    #[error(transparent)]
    Load(#[from] LoadError),
}

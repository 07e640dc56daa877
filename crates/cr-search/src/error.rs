//! Search-subsystem error type.

use thiserror::Error;

use cr_core::LocationId;

/// Errors produced by `cr-search`.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("location {0} not found")]
    LocationNotFound(LocationId),

    #[error("no route from {from} to {to}")]
    NoRoute { from: LocationId, to: LocationId },
}

pub type SearchResult<T> = Result<T, SearchError>;

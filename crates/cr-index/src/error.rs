//! Balanced-index error type.

use thiserror::Error;

use cr_core::LocationId;

/// Errors produced by `cr-index`.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("location {0} not found in index")]
    LocationNotFound(LocationId),
}

pub type IndexResult<T> = Result<T, IndexError>;

//! Road-graph error type.

use thiserror::Error;

use cr_core::LocationId;

/// Errors produced by `cr-graph`.  All recoverable: every mutation that
/// fails leaves the graph untouched.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("location {0} already exists")]
    DuplicateLocation(LocationId),

    #[error("location {0} not found")]
    LocationNotFound(LocationId),

    #[error("a road cannot connect location {0} to itself")]
    SelfLoop(LocationId),

    #[error("a road between {0} and {1} already exists")]
    DuplicateRoad(LocationId, LocationId),

    #[error("road distance must be a positive integer")]
    ZeroDistance,

    #[error("no road between {0} and {1}")]
    NoSuchRoad(LocationId, LocationId),
}

pub type GraphResult<T> = Result<T, GraphError>;

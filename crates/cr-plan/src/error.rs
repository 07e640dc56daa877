//! Planner error type — wraps the subsystem errors behind one surface.

use thiserror::Error;

use cr_graph::GraphError;
use cr_index::IndexError;
use cr_search::SearchError;

/// Errors surfaced by `cr-plan`.  Every variant is recoverable; the caller
/// inspects and reports, nothing aborts.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

pub type PlanResult<T> = Result<T, PlanError>;

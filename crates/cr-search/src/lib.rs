//! `cr-search` — traversal and shortest-path algorithms.
//!
//! Stateless free functions over a borrowed [`CityGraph`] snapshot: all
//! traversal state (frontier, visited set, tentative distances) is local to
//! the call, so independent queries are trivially reentrant and the graph is
//! never mutated.  Every algorithm terminates because its visited or
//! finalized set strictly grows and is bounded by the location count.
//!
//! # Crate layout
//!
//! | Module       | Contents                              |
//! |--------------|---------------------------------------|
//! | [`traverse`] | `breadth_first`, `depth_first`        |
//! | [`dijkstra`] | `shortest_path`, `Route`              |
//! | [`error`]    | `SearchError`, `SearchResult<T>`      |
//!
//! [`CityGraph`]: cr_graph::CityGraph

pub mod dijkstra;
pub mod error;
pub mod traverse;


pub use dijkstra::{shortest_path, Route};
pub use error::{SearchError, SearchResult};
pub use traverse::{breadth_first, depth_first};

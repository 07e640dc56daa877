//! `cr-graph` — the city road graph.
//!
//! An undirected, positively-weighted graph over [`LocationId`]s with
//! adjacency-list storage.  Owns the id → name mapping; the sorted index in
//! `cr-index` is maintained alongside it by `cr-plan`.
//!
//! # Crate layout
//!
//! | Module    | Contents                       |
//! |-----------|--------------------------------|
//! | [`graph`] | `CityGraph`, `Road`            |
//! | [`error`] | `GraphError`, `GraphResult<T>` |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |
//!
//! [`LocationId`]: cr_core::LocationId

pub mod error;
pub mod graph;


pub use error::{GraphError, GraphResult};
pub use graph::{CityGraph, Road};

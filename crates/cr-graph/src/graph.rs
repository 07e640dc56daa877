//! City graph: location set plus per-location adjacency lists.
//!
//! # Data layout
//!
//! Two `FxHashMap`s keyed by [`LocationId`]: one for display names, one for
//! adjacency `Vec<Road>`s.  A bidirectional road is stored as a mirrored
//! pair of directed [`Road`] entries, so at rest `(a→b, w)` exists iff
//! `(b→a, w)` exists.  Adjacency `Vec`s preserve insertion order — the
//! traversal algorithms in `cr-search` rely on that order being stable for
//! reproducible output.
//!
//! # Edge policy
//!
//! The graph is *simple*: self-loops and parallel roads are rejected at
//! [`add_road`](CityGraph::add_road), and weights are positive integers.
//! This keeps the mirror invariant checkable and `remove_road` unambiguous.

use rustc_hash::FxHashMap;

use cr_core::LocationId;

use crate::{GraphError, GraphResult};

/// Directed half of a bidirectional road: the destination and the abstract
/// distance (positive integer weight).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Road {
    pub to: LocationId,
    pub distance: u32,
}

/// Undirected weighted graph of city locations.
///
/// All mutations are all-or-nothing: a failed operation returns a
/// [`GraphError`] and leaves both maps exactly as they were.
#[derive(Debug, Default)]
pub struct CityGraph {
    names: FxHashMap<LocationId, String>,
    roads: FxHashMap<LocationId, Vec<Road>>,
}

impl CityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Location mutations ────────────────────────────────────────────────

    /// Add a location with an empty adjacency list.
    pub fn add_location(&mut self, id: LocationId, name: impl Into<String>) -> GraphResult<()> {
        if self.names.contains_key(&id) {
            return Err(GraphError::DuplicateLocation(id));
        }
        self.names.insert(id, name.into());
        self.roads.insert(id, Vec::new());
        Ok(())
    }

    /// Remove a location and cascade: every road touching it is stripped
    /// from every other adjacency list in the same call, so no dangling
    /// destination survives.
    pub fn remove_location(&mut self, id: LocationId) -> GraphResult<()> {
        if self.names.remove(&id).is_none() {
            return Err(GraphError::LocationNotFound(id));
        }
        self.roads.remove(&id);
        for list in self.roads.values_mut() {
            list.retain(|road| road.to != id);
        }
        Ok(())
    }

    // ── Road mutations ────────────────────────────────────────────────────

    /// Add a bidirectional road of the given positive distance.
    ///
    /// Rejects a missing endpoint, a self-loop, a zero distance, and a
    /// parallel road (either direction already connecting `a` and `b`).
    pub fn add_road(&mut self, a: LocationId, b: LocationId, distance: u32) -> GraphResult<()> {
        self.require(a)?;
        self.require(b)?;
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        if distance == 0 {
            return Err(GraphError::ZeroDistance);
        }
        if self.roads[&a].iter().any(|road| road.to == b) {
            return Err(GraphError::DuplicateRoad(a, b));
        }
        self.push_half(a, b, distance);
        self.push_half(b, a, distance);
        Ok(())
    }

    /// Remove the road between `a` and `b` from both adjacency lists.
    pub fn remove_road(&mut self, a: LocationId, b: LocationId) -> GraphResult<()> {
        self.require(a)?;
        self.require(b)?;
        // The mirror invariant holds at rest, so checking one direction is
        // enough to decide whether the road exists.
        if !self.roads[&a].iter().any(|road| road.to == b) {
            return Err(GraphError::NoSuchRoad(a, b));
        }
        self.strip_half(a, b);
        self.strip_half(b, a);
        Ok(())
    }

    // ── Read-only accessors ───────────────────────────────────────────────

    /// Roads leaving `id`, in insertion order.
    pub fn roads_from(&self, id: LocationId) -> GraphResult<&[Road]> {
        self.roads
            .get(&id)
            .map(Vec::as_slice)
            .ok_or(GraphError::LocationNotFound(id))
    }

    /// Roads leaving `id`, or the empty slice for an id not in the graph.
    ///
    /// Infallible variant of [`roads_from`](Self::roads_from) for traversal
    /// inner loops whose ids were already validated against the graph.
    pub fn roads(&self, id: LocationId) -> &[Road] {
        self.roads.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Display name of a location, if present.
    pub fn name(&self, id: LocationId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn contains(&self, id: LocationId) -> bool {
        self.names.contains_key(&id)
    }

    pub fn location_count(&self) -> usize {
        self.names.len()
    }

    /// Number of bidirectional roads (mirrored pairs counted once).
    pub fn road_count(&self) -> usize {
        self.roads.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterator over all location ids, in no particular order.
    pub fn location_ids(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.names.keys().copied()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn require(&self, id: LocationId) -> GraphResult<()> {
        if self.names.contains_key(&id) {
            Ok(())
        } else {
            Err(GraphError::LocationNotFound(id))
        }
    }

    fn push_half(&mut self, from: LocationId, to: LocationId, distance: u32) {
        // `from` was validated by the caller; the entry always exists.
        self.roads.entry(from).or_default().push(Road { to, distance });
    }

    fn strip_half(&mut self, from: LocationId, to: LocationId) {
        if let Some(list) = self.roads.get_mut(&from) {
            list.retain(|road| road.to != to);
        }
    }
}

//! Single-source shortest path (Dijkstra) over positive road distances.
//!
//! # Frontier
//!
//! A `BinaryHeap` of `Reverse<(distance, id)>` — multiple queued entries per
//! location are permitted and stale ones skipped on pop, rather than paying
//! for a decrease-key structure.  O(E log E) and simpler; the id as the
//! secondary key makes tie-breaking deterministic.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use cr_core::LocationId;
use cr_graph::CityGraph;

use crate::{SearchError, SearchResult};

/// The result of a shortest-path query: the ordered stops from start to end
/// (inclusive) and the summed road distance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub stops: Vec<LocationId>,
    pub total_distance: u32,
}

impl Route {
    /// `true` if start and end were the same location.
    pub fn is_trivial(&self) -> bool {
        self.stops.len() == 1
    }
}

/// Compute the minimum-distance route from `start` to `end`.
///
/// Fails with [`SearchError::LocationNotFound`] if either endpoint is
/// absent and [`SearchError::NoRoute`] if the frontier empties before `end`
/// is reached.  `start == end` is a zero-length route — the frontier loop
/// never runs.
pub fn shortest_path(
    graph: &CityGraph,
    start: LocationId,
    end: LocationId,
) -> SearchResult<Route> {
    if !graph.contains(start) {
        return Err(SearchError::LocationNotFound(start));
    }
    if !graph.contains(end) {
        return Err(SearchError::LocationNotFound(end));
    }
    if start == end {
        return Ok(Route { stops: vec![start], total_distance: 0 });
    }

    // best[v] = smallest distance discovered so far; absent means infinite.
    let mut best: FxHashMap<LocationId, u32> = FxHashMap::default();
    let mut prev: FxHashMap<LocationId, LocationId> = FxHashMap::default();

    best.insert(start, 0);

    let mut frontier: BinaryHeap<Reverse<(u32, LocationId)>> = BinaryHeap::new();
    frontier.push(Reverse((0, start)));

    while let Some(Reverse((distance, current))) = frontier.pop() {
        if current == end {
            return Ok(reconstruct(&prev, start, end, distance));
        }
        // Skip stale frontier entries.
        if distance > best.get(&current).copied().unwrap_or(u32::MAX) {
            continue;
        }

        for road in graph.roads(current) {
            let relaxed = distance.saturating_add(road.distance);
            if relaxed < best.get(&road.to).copied().unwrap_or(u32::MAX) {
                best.insert(road.to, relaxed);
                prev.insert(road.to, current);
                frontier.push(Reverse((relaxed, road.to)));
            }
        }
    }

    Err(SearchError::NoRoute { from: start, to: end })
}

/// Walk predecessor links from `end` back to `start` and reverse.
fn reconstruct(
    prev: &FxHashMap<LocationId, LocationId>,
    start: LocationId,
    end: LocationId,
    total_distance: u32,
) -> Route {
    let mut stops = vec![end];
    let mut current = end;
    while current != start {
        // Every popped location except `start` has a predecessor.
        current = prev[&current];
        stops.push(current);
    }
    stops.reverse();
    Route { stops, total_distance }
}

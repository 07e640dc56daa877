//! Breadth-first and depth-first traversal.
//!
//! Both return the visitation order as a `Vec<LocationId>` and fail up
//! front with [`SearchError::LocationNotFound`] if the start is absent —
//! no partial traversal is performed.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use cr_core::LocationId;
use cr_graph::CityGraph;

use crate::{SearchError, SearchResult};

/// Visit every location reachable from `start` in non-decreasing
/// distance-in-edges order.
///
/// FIFO frontier; a location is marked visited when *enqueued*, so each one
/// enters the queue at most once — termination in O(locations + roads).
/// Neighbors are expanded in adjacency insertion order, which pins the
/// output order for a given construction sequence.
pub fn breadth_first(graph: &CityGraph, start: LocationId) -> SearchResult<Vec<LocationId>> {
    if !graph.contains(start) {
        return Err(SearchError::LocationNotFound(start));
    }

    let mut visited = FxHashSet::default();
    let mut frontier = VecDeque::new();
    let mut order = Vec::new();

    visited.insert(start);
    frontier.push_back(start);

    while let Some(current) = frontier.pop_front() {
        order.push(current);
        for road in graph.roads(current) {
            if visited.insert(road.to) {
                frontier.push_back(road.to);
            }
        }
    }
    Ok(order)
}

/// Visit every location reachable from `start`, diving along each branch
/// before backtracking.
///
/// LIFO frontier with the visited check at *pop* time: a location may be
/// pushed more than once by different predecessors and is processed only
/// the first time it surfaces.  The emitted order is therefore a function
/// of adjacency insertion order — deterministic for a given graph, pinned
/// by a golden test rather than normalized.
pub fn depth_first(graph: &CityGraph, start: LocationId) -> SearchResult<Vec<LocationId>> {
    if !graph.contains(start) {
        return Err(SearchError::LocationNotFound(start));
    }

    let mut visited = FxHashSet::default();
    let mut frontier = vec![start];
    let mut order = Vec::new();

    while let Some(current) = frontier.pop() {
        if !visited.insert(current) {
            continue; // stale entry — already processed via another push
        }
        order.push(current);
        for road in graph.roads(current) {
            if !visited.contains(&road.to) {
                frontier.push(road.to);
            }
        }
    }
    Ok(order)
}

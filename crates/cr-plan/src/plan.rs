//! The `CityPlan` facade.

use cr_core::LocationId;
use cr_graph::{CityGraph, Road};
use cr_index::LocationIndex;
use cr_search::Route;

use crate::PlanResult;

/// A city: the sorted location index and the road graph, mutated together.
///
/// Mutation order matters: the graph is asked first because it can reject
/// (duplicate id, missing endpoint), and the infallible index update only
/// happens once the graph has accepted — a rejected mutation leaves both
/// structures untouched.
#[derive(Debug, Default)]
pub struct CityPlan {
    index: LocationIndex,
    graph: CityGraph,
}

impl CityPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo data set the interactive planner starts from: four
    /// locations and three roads.
    ///
    ///   1 Hospital — 3 Park (4)
    ///   2 Museum   — 3 Park (2)
    ///   4 Stadium  — 1 Hospital (7)
    pub fn sample_city() -> Self {
        let mut plan = Self::new();
        let seed = [(1, "Hospital"), (2, "Museum"), (3, "Park"), (4, "Stadium")];
        for (id, name) in seed {
            plan.add_location(LocationId(id), name)
                .expect("sample ids are distinct");
        }
        for (a, b, distance) in [(1, 3, 4), (2, 3, 2), (4, 1, 7)] {
            plan.add_road(LocationId(a), LocationId(b), distance)
                .expect("sample roads connect existing locations");
        }
        plan
    }

    // ── Mutations (applied to both structures) ────────────────────────────

    /// Add a location to the graph and the sorted index.
    pub fn add_location(&mut self, id: LocationId, name: &str) -> PlanResult<()> {
        self.graph.add_location(id, name)?;
        self.index.insert(id, name);
        Ok(())
    }

    /// Remove a location everywhere: graph adjacency (with edge cascade)
    /// and sorted index.
    pub fn remove_location(&mut self, id: LocationId) -> PlanResult<()> {
        self.graph.remove_location(id)?;
        self.index.remove(id)?;
        Ok(())
    }

    /// Add a bidirectional road.  Road mutations touch only the graph.
    pub fn add_road(&mut self, a: LocationId, b: LocationId, distance: u32) -> PlanResult<()> {
        self.graph.add_road(a, b, distance)?;
        Ok(())
    }

    pub fn remove_road(&mut self, a: LocationId, b: LocationId) -> PlanResult<()> {
        self.graph.remove_road(a, b)?;
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Point lookup by id, served from the index.
    pub fn lookup(&self, id: LocationId) -> Option<&str> {
        self.index.get(id)
    }

    pub fn contains(&self, id: LocationId) -> bool {
        self.index.contains(id)
    }

    pub fn location_count(&self) -> usize {
        self.graph.location_count()
    }

    /// All locations in strictly increasing id order, from the index.
    pub fn locations_sorted(&self) -> impl Iterator<Item = (LocationId, &str)> {
        self.index.iter_sorted()
    }

    /// Roads leaving `id`, in insertion order, from the graph.
    pub fn roads_from(&self, id: LocationId) -> PlanResult<&[Road]> {
        Ok(self.graph.roads_from(id)?)
    }

    /// Borrow the underlying graph (read-only) for custom queries.
    pub fn graph(&self) -> &CityGraph {
        &self.graph
    }

    // ── Algorithm entry points ────────────────────────────────────────────

    pub fn breadth_first(&self, start: LocationId) -> PlanResult<Vec<LocationId>> {
        Ok(cr_search::breadth_first(&self.graph, start)?)
    }

    pub fn depth_first(&self, start: LocationId) -> PlanResult<Vec<LocationId>> {
        Ok(cr_search::depth_first(&self.graph, start)?)
    }

    pub fn shortest_path(&self, start: LocationId, end: LocationId) -> PlanResult<Route> {
        Ok(cr_search::shortest_path(&self.graph, start, end)?)
    }
}

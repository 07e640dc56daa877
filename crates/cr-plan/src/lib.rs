//! `cr-plan` — the city planner facade.
//!
//! [`CityPlan`] owns one [`LocationIndex`] and one [`CityGraph`] and applies
//! every location mutation to both, so the always-sorted index and the
//! adjacency structure can never diverge.  That dual maintenance is the
//! integration invariant of the whole system — callers go through this
//! crate, not the structures directly.
//!
//! # Quick-start
//!
//! ```
//! use cr_core::LocationId;
//! use cr_plan::CityPlan;
//!
//! let plan = CityPlan::sample_city();
//! let route = plan.shortest_path(LocationId(4), LocationId(2))?;
//! assert_eq!(route.stops.len(), 4); // Stadium → Hospital → Park → Museum
//! # Ok::<(), cr_plan::PlanError>(())
//! ```
//!
//! # Threading
//!
//! Single logical writer, no internal locking: a `CityPlan` is plain owned
//! data (`Send`), and callers sharing one across threads must serialize
//! access themselves.

pub mod error;
pub mod plan;


pub use error::{PlanError, PlanResult};
pub use plan::CityPlan;

// Re-export the result types callers receive through the facade.
pub use cr_graph::Road;
pub use cr_search::Route;

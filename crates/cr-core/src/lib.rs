//! `cr-core` — foundational types for the city route planner workspace.
//!
//! This crate is a dependency of every other `cr-*` crate.  It intentionally
//! has no `cr-*` dependencies and no mandatory external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                              |
//! |----------|---------------------------------------|
//! | [`ids`]  | `LocationId` — the city-wide key type |
//!
//! Error enums are deliberately *not* centralized: each subsystem crate
//! (`cr-index`, `cr-graph`, `cr-search`, `cr-plan`) defines its own error
//! type next to the code that produces it, which keeps error sites clean.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::LocationId;

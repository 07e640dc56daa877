//! `cr-index` — always-sorted location index.
//!
//! A self-balancing (AVL) binary search tree mapping a [`LocationId`] to its
//! display name.  Kept in lock-step with the road graph by `cr-plan` so that
//! sorted enumeration never depends on insertion order.
//!
//! # Crate layout
//!
//! | Module    | Contents                                 |
//! |-----------|------------------------------------------|
//! | [`avl`]   | `LocationIndex`, `SortedIter`            |
//! | [`error`] | `IndexError`, `IndexResult<T>`           |
//!
//! [`LocationId`]: cr_core::LocationId

pub mod avl;
pub mod error;

#[cfg(test)]
mod tests;

pub use avl::{LocationIndex, SortedIter};
pub use error::{IndexError, IndexResult};

//! # Component Pools
//!
//! Sparse-set storage for components keyed by entity handle.
//!
//! ## Design Philosophy
//!
//! - One `SparseSet` per component type, owning its dense and sparse arrays
//! - Pools of several types are plain structs with one field per type
//! - Type selection is resolved at compile time through `Holds<C>`
//! - Contract violations are debug assertions, not error values

mod composer;
mod sparse_set;

pub use composer::{ComponentPool, Holds};
pub use sparse_set::{SparseSet, DEFAULT_CAPACITY};

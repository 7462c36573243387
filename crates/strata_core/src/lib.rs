//! # STRATA Core Storage
//!
//! Sparse-set component storage for an entity-component model:
//! - O(1) insertion, lookup and swap-removal per component type
//! - Densely packed component arrays for cache-friendly iteration
//! - Compile-time pool selection, no runtime type tags
//!
//! ## Architecture Rules
//!
//! 1. **Store and index only** - Entity handles are allocated elsewhere
//! 2. **Contracts fail fast** - Precondition violations are debug assertions,
//!    never `Result`s threaded through the hot path
//! 3. **Single-threaded** - No locks, no atomics
//!
//! ## Example
//!
//! ```rust
//! use strata_core::{component_pool, ComponentPool};
//!
//! struct Health(u32);
//! struct Armor(u32);
//!
//! component_pool! {
//!     /// Pools used by the combat systems.
//!     pub struct CombatPools for u32 {
//!         health: Health,
//!         armor: Armor,
//!     }
//! }
//!
//! let mut pools = CombatPools::with_capacity(128);
//! pools.construct(7, Health(100));
//! assert!(pools.has::<Health>(7));
//! assert!(!pools.has::<Armor>(7));
//!
//! // Pools must be emptied before they are dropped.
//! pools.reset();
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod entity;
pub mod error;
pub mod pool;

pub use config::PoolConfig;
pub use entity::Entity;
pub use error::{ConfigError, ConfigResult};
pub use pool::{ComponentPool, Holds, SparseSet, DEFAULT_CAPACITY};

#[doc(hidden)]
pub mod __private {
    pub use tracing;
}

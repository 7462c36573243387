//! # Sparse Set
//!
//! Dense component storage for a single component type.
//!
//! The set keeps three arrays:
//! - `dense`: component values, packed with no holes
//! - `direct`: slot -> entity, parallel to `dense`
//! - `reverse`: entity -> slot, indexed by entity value
//!
//! An entity `e` is present iff
//! `e < reverse.len() && reverse[e] < direct.len() && direct[reverse[e]] == e`.
//! There is no separate membership flag; stale `reverse` entries are simply
//! rejected by the round trip through `direct`.
//!
//! ```text
//! construct(3) construct(7) construct(1)     destroy(7)
//!
//! direct:  [3, 7, 1]                          [3, 1]
//! dense:   [c3, c7, c1]                       [c3, c1]
//! reverse: [_, 2, _, 0, _, _, _, 1]           [_, 1, _, 0, _, _, _, 1*]
//!                                              * stale, direct[1] != 7
//! ```

use std::any::type_name;

use crate::entity::Entity;

/// Default capacity hint for new sets and pools.
pub const DEFAULT_CAPACITY: usize = 4098;

/// Storage for one component type, keyed by entity handle.
///
/// All operations are O(1). Removal swaps the last slot into the hole, so
/// the order of `entities()` is stable between mutations but not across them.
///
/// # Contracts
///
/// `get`, `get_mut`, `remove` and `destroy` require `has(entity)`;
/// `construct` requires `!has(entity)`. Violations trip a debug assertion.
/// A set must be empty when it is dropped: call `reset` (or destroy every
/// entity) first.
///
/// References returned by `get` and `construct` borrow the set, so the
/// borrow checker rejects holding them across the next mutation (which may
/// reallocate the dense array).
///
/// # Type Parameters
///
/// * `E` - The entity handle type
/// * `C` - The component type to store
///
/// # Example
///
/// ```rust
/// use strata_core::SparseSet;
///
/// let mut set: SparseSet<u32, i64> = SparseSet::with_capacity(16);
/// set.construct(3, 30);
/// set.construct(7, 70);
/// set.destroy(3);
///
/// assert_eq!(set.entities(), &[7]);
/// assert_eq!(*set.get(7), 70);
///
/// set.reset();
/// ```
#[derive(Debug)]
pub struct SparseSet<E: Entity, C> {
    /// Component values.
    dense: Vec<C>,
    /// Owner of each dense slot.
    direct: Vec<E>,
    /// Dense slot of each entity, stored in the entity type.
    reverse: Vec<E>,
}

impl<E: Entity, C> SparseSet<E, C> {
    /// Creates an empty set reserving [`DEFAULT_CAPACITY`] slots.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty set with dense storage reserved for `capacity`
    /// components.
    ///
    /// The capacity is a hint: inserting more components reallocates.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        tracing::trace!(
            capacity,
            component = type_name::<C>(),
            "sparse set created"
        );

        Self {
            dense: Vec::with_capacity(capacity),
            direct: Vec::with_capacity(capacity),
            reverse: Vec::new(),
        }
    }

    /// Returns the number of stored components.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.dense.len()
    }

    /// Returns `true` if no component is stored.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    /// Returns the reserved capacity of the dense array.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.dense.capacity()
    }

    /// Returns the length of the reverse mapping.
    ///
    /// This is one past the largest entity value inserted since the last
    /// `reset`, and is the memory cost of the caller's handle range.
    #[inline]
    #[must_use]
    pub fn sparse_len(&self) -> usize {
        self.reverse.len()
    }

    /// Returns the owning entity of each dense slot.
    ///
    /// `entities()[i]` owns `components()[i]`.
    #[inline]
    #[must_use]
    pub fn entities(&self) -> &[E] {
        &self.direct
    }

    /// Returns the dense component array.
    #[inline]
    #[must_use]
    pub fn components(&self) -> &[C] {
        &self.dense
    }

    /// Returns the dense component array for in-place updates.
    #[inline]
    pub fn components_mut(&mut self) -> &mut [C] {
        &mut self.dense
    }

    /// Iterates over `(entity, component)` pairs in dense order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (E, &C)> + '_ {
        self.direct.iter().copied().zip(self.dense.iter())
    }

    /// Iterates mutably over `(entity, component)` pairs in dense order.
    #[inline]
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (E, &mut C)> + '_ {
        self.direct.iter().copied().zip(self.dense.iter_mut())
    }

    /// Returns `true` if `entity` has a component in this set.
    ///
    /// Never panics for a valid handle, whatever its value.
    #[inline]
    #[must_use]
    pub fn has(&self, entity: E) -> bool {
        self.reverse
            .get(entity.index())
            .and_then(|slot| self.direct.get(slot.index()))
            .is_some_and(|owner| *owner == entity)
    }

    /// Returns the component of `entity`.
    ///
    /// # Panics
    ///
    /// Debug builds panic if `entity` is not present.
    #[inline]
    #[must_use]
    pub fn get(&self, entity: E) -> &C {
        debug_assert!(
            self.has(entity),
            "entity {entity:?} has no {} component",
            type_name::<C>()
        );
        &self.dense[self.slot(entity)]
    }

    /// Returns the component of `entity` mutably.
    ///
    /// # Panics
    ///
    /// Debug builds panic if `entity` is not present.
    #[inline]
    pub fn get_mut(&mut self, entity: E) -> &mut C {
        debug_assert!(
            self.has(entity),
            "entity {entity:?} has no {} component",
            type_name::<C>()
        );
        let slot = self.slot(entity);
        &mut self.dense[slot]
    }

    /// Returns the component of `entity`, or `None` if it is not present.
    #[inline]
    #[must_use]
    pub fn try_get(&self, entity: E) -> Option<&C> {
        self.has(entity).then(|| &self.dense[self.slot(entity)])
    }

    /// Returns the component of `entity` mutably, or `None` if it is not
    /// present.
    #[inline]
    pub fn try_get_mut(&mut self, entity: E) -> Option<&mut C> {
        if self.has(entity) {
            let slot = self.slot(entity);
            Some(&mut self.dense[slot])
        } else {
            None
        }
    }

    /// Stores `component` for `entity` and returns a reference to it.
    ///
    /// # Panics
    ///
    /// Debug builds panic if `entity` is already present.
    pub fn construct(&mut self, entity: E, component: C) -> &mut C {
        self.assert_absent(entity);
        self.append(entity, component)
    }

    /// Builds the component of `entity` with `build` and stores it.
    ///
    /// `build` only runs once the entity is known to be absent.
    ///
    /// # Panics
    ///
    /// Debug builds panic if `entity` is already present.
    pub fn construct_with<F>(&mut self, entity: E, build: F) -> &mut C
    where
        F: FnOnce() -> C,
    {
        self.assert_absent(entity);
        self.append(entity, build())
    }

    /// Removes the component of `entity` and returns it.
    ///
    /// The last dense slot is moved into the freed slot, so the order of
    /// `entities()` changes. O(1).
    ///
    /// # Panics
    ///
    /// Debug builds panic if `entity` is not present.
    pub fn remove(&mut self, entity: E) -> C {
        debug_assert!(
            self.has(entity),
            "entity {entity:?} has no {} component to remove",
            type_name::<C>()
        );

        let slot = self.slot(entity);
        let last = self.direct[self.direct.len() - 1];

        // When `entity` owns the last slot this rewrites its own entry.
        self.reverse[last.index()] = E::from_index(slot);
        self.direct.swap_remove(slot);
        self.dense.swap_remove(slot)
    }

    /// Removes and drops the component of `entity`.
    ///
    /// # Panics
    ///
    /// Debug builds panic if `entity` is not present.
    #[inline]
    pub fn destroy(&mut self, entity: E) {
        self.remove(entity);
    }

    /// Removes every component and forgets every entity mapping.
    ///
    /// The reverse mapping is truncated to length zero; reserved capacity is
    /// kept.
    pub fn reset(&mut self) {
        tracing::trace!(
            len = self.dense.len(),
            component = type_name::<C>(),
            "sparse set reset"
        );

        self.dense.clear();
        self.direct.clear();
        self.reverse.clear();
    }

    #[inline]
    fn slot(&self, entity: E) -> usize {
        self.reverse[entity.index()].index()
    }

    #[inline]
    fn assert_absent(&self, entity: E) {
        debug_assert!(
            !self.has(entity),
            "entity {entity:?} already has a {} component",
            type_name::<C>()
        );
    }

    fn append(&mut self, entity: E, component: C) -> &mut C {
        let index = entity.index();
        if index >= self.reverse.len() {
            tracing::trace!(
                from = self.reverse.len(),
                to = index + 1,
                component = type_name::<C>(),
                "reverse mapping grown"
            );
            self.reverse.resize(index + 1, E::from_index(0));
        }

        let slot = self.direct.len();
        self.reverse[index] = E::from_index(slot);
        self.direct.push(entity);
        self.dense.push(component);

        &mut self.dense[slot]
    }
}

impl<E: Entity, C> Default for SparseSet<E, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity, C> Drop for SparseSet<E, C> {
    fn drop(&mut self) {
        // Skip the check while unwinding so the original panic is reported.
        debug_assert!(
            std::thread::panicking() || self.is_empty(),
            "sparse set of {} dropped with {} live components",
            type_name::<C>(),
            self.len()
        );
    }
}

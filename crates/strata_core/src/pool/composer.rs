//! # Pool Composer
//!
//! Groups one `SparseSet` per component type behind a single value.
//!
//! A pool is a plain struct with one named field per component type,
//! declared with [`component_pool!`](crate::component_pool). Every
//! operation is routed to the right field through the `Holds<C>` trait, so
//! selecting a set costs nothing at runtime and asking for a type the pool
//! does not hold is a compile error:
//!
//! ```rust,compile_fail
//! use strata_core::{component_pool, ComponentPool};
//!
//! struct Health(u32);
//! struct Mana(u32);
//!
//! component_pool! {
//!     struct Pools for u32 {
//!         health: Health,
//!     }
//! }
//!
//! let pools = Pools::with_capacity(4);
//! let _ = pools.has::<Mana>(1);
//! ```
//!
//! The owned sets are independent: an entity may be present in some of them
//! and absent from others. Keeping component combinations consistent is the
//! caller's job.

use crate::config::PoolConfig;
use crate::entity::Entity;

use super::sparse_set::SparseSet;

/// Access to the set storing components of type `C`.
///
/// Implemented by [`component_pool!`](crate::component_pool) once per
/// declared type. Declaring the same type twice produces conflicting
/// implementations and fails to compile.
pub trait Holds<C>: ComponentPool {
    /// Returns the set storing `C`.
    fn sparse_set(&self) -> &SparseSet<Self::Entity, C>;

    /// Returns the set storing `C` mutably.
    fn sparse_set_mut(&mut self) -> &mut SparseSet<Self::Entity, C>;
}

/// A fixed group of sparse sets sharing one entity handle type.
///
/// Typed operations forward to the set selected by `C` with the same
/// contracts as [`SparseSet`]. Pools are neither `Clone` nor `Copy`, and like
/// every set they must be emptied with [`reset`](ComponentPool::reset)
/// before being dropped.
///
/// # Example
///
/// ```rust
/// use strata_core::{component_pool, ComponentPool};
///
/// struct Position(f32, f32);
/// struct Velocity(f32, f32);
///
/// component_pool! {
///     /// Movement state.
///     pub struct Motion for u32 {
///         positions: Position,
///         velocities: Velocity,
///     }
/// }
///
/// let mut motion = Motion::with_capacity(64);
/// motion.construct(1, Position(0.0, 0.0));
/// motion.construct(1, Velocity(1.0, 0.5));
///
/// let velocity = motion.get::<Velocity>(1);
/// let (dx, dy) = (velocity.0, velocity.1);
/// let position = motion.get_mut::<Position>(1);
/// position.0 += dx;
/// position.1 += dy;
///
/// assert_eq!(motion.get::<Position>(1).0, 1.0);
/// motion.reset();
/// ```
pub trait ComponentPool: Sized {
    /// The entity handle type shared by every owned set.
    type Entity: Entity;

    /// Creates the pool, building every owned set with the same capacity
    /// hint.
    fn with_capacity(capacity: usize) -> Self;

    /// Resets every owned set, in declaration order.
    fn reset(&mut self);

    /// Returns `true` if every owned set is empty.
    fn is_empty(&self) -> bool;

    /// Creates the pool from a loaded configuration.
    #[must_use]
    fn from_config(config: &PoolConfig) -> Self {
        Self::with_capacity(config.capacity_hint)
    }

    /// Returns the set storing `C`.
    #[inline]
    #[must_use]
    fn storage<C>(&self) -> &SparseSet<Self::Entity, C>
    where
        Self: Holds<C>,
    {
        <Self as Holds<C>>::sparse_set(self)
    }

    /// Returns the set storing `C` mutably.
    #[inline]
    fn storage_mut<C>(&mut self) -> &mut SparseSet<Self::Entity, C>
    where
        Self: Holds<C>,
    {
        <Self as Holds<C>>::sparse_set_mut(self)
    }

    /// Returns `true` if `entity` has a `C` component.
    #[inline]
    #[must_use]
    fn has<C>(&self, entity: Self::Entity) -> bool
    where
        Self: Holds<C>,
    {
        self.storage::<C>().has(entity)
    }

    /// Returns the `C` component of `entity`.
    ///
    /// # Panics
    ///
    /// Debug builds panic if `entity` has no `C` component.
    #[inline]
    #[must_use]
    fn get<C>(&self, entity: Self::Entity) -> &C
    where
        Self: Holds<C>,
    {
        self.storage::<C>().get(entity)
    }

    /// Returns the `C` component of `entity` mutably.
    ///
    /// # Panics
    ///
    /// Debug builds panic if `entity` has no `C` component.
    #[inline]
    fn get_mut<C>(&mut self, entity: Self::Entity) -> &mut C
    where
        Self: Holds<C>,
    {
        self.storage_mut::<C>().get_mut(entity)
    }

    /// Returns the `C` component of `entity`, or `None`.
    #[inline]
    #[must_use]
    fn try_get<C>(&self, entity: Self::Entity) -> Option<&C>
    where
        Self: Holds<C>,
    {
        self.storage::<C>().try_get(entity)
    }

    /// Returns the `C` component of `entity` mutably, or `None`.
    #[inline]
    fn try_get_mut<C>(&mut self, entity: Self::Entity) -> Option<&mut C>
    where
        Self: Holds<C>,
    {
        self.storage_mut::<C>().try_get_mut(entity)
    }

    /// Stores `component` for `entity`.
    ///
    /// # Panics
    ///
    /// Debug builds panic if `entity` already has a `C` component.
    #[inline]
    fn construct<C>(&mut self, entity: Self::Entity, component: C) -> &mut C
    where
        Self: Holds<C>,
    {
        self.storage_mut::<C>().construct(entity, component)
    }

    /// Builds the `C` component of `entity` with `build` and stores it.
    ///
    /// # Panics
    ///
    /// Debug builds panic if `entity` already has a `C` component.
    #[inline]
    fn construct_with<C, F>(&mut self, entity: Self::Entity, build: F) -> &mut C
    where
        Self: Holds<C>,
        F: FnOnce() -> C,
    {
        self.storage_mut::<C>().construct_with(entity, build)
    }

    /// Removes the `C` component of `entity` and returns it.
    ///
    /// # Panics
    ///
    /// Debug builds panic if `entity` has no `C` component.
    #[inline]
    fn remove<C>(&mut self, entity: Self::Entity) -> C
    where
        Self: Holds<C>,
    {
        self.storage_mut::<C>().remove(entity)
    }

    /// Removes and drops the `C` component of `entity`.
    ///
    /// # Panics
    ///
    /// Debug builds panic if `entity` has no `C` component.
    #[inline]
    fn destroy<C>(&mut self, entity: Self::Entity)
    where
        Self: Holds<C>,
    {
        self.storage_mut::<C>().destroy(entity);
    }

    /// Resets the set storing `C` only.
    #[inline]
    fn reset_of<C>(&mut self)
    where
        Self: Holds<C>,
    {
        self.storage_mut::<C>().reset();
    }

    /// Returns the number of `C` components.
    #[inline]
    #[must_use]
    fn len<C>(&self) -> usize
    where
        Self: Holds<C>,
    {
        self.storage::<C>().len()
    }

    /// Returns the reserved capacity of the `C` set.
    #[inline]
    #[must_use]
    fn capacity<C>(&self) -> usize
    where
        Self: Holds<C>,
    {
        self.storage::<C>().capacity()
    }

    /// Returns `true` if no entity has a `C` component.
    #[inline]
    #[must_use]
    fn is_empty_of<C>(&self) -> bool
    where
        Self: Holds<C>,
    {
        self.storage::<C>().is_empty()
    }

    /// Returns the entities owning a `C` component, in dense order.
    #[inline]
    #[must_use]
    fn entities<'a, C: 'a>(&'a self) -> &'a [Self::Entity]
    where
        Self: Holds<C>,
    {
        self.storage::<C>().entities()
    }

    /// Returns the dense `C` array, parallel to `entities::<C>()`.
    #[inline]
    #[must_use]
    fn components<C>(&self) -> &[C]
    where
        Self: Holds<C>,
    {
        self.storage::<C>().components()
    }
}

/// Declares a component pool: a struct holding one [`SparseSet`] per
/// component type, plus its [`ComponentPool`], [`Holds`] and `Default`
/// implementations.
///
/// ```rust
/// use strata_core::{component_pool, ComponentPool};
///
/// #[derive(Debug, PartialEq)]
/// struct Name(&'static str);
///
/// component_pool! {
///     /// Pools keyed by `u16` handles.
///     pub(crate) struct Registry for u16 {
///         /// Display names.
///         names: Name,
///     }
/// }
///
/// let mut registry = Registry::default();
/// registry.construct(3, Name("crate"));
/// assert_eq!(registry.entities::<Name>(), &[3]);
/// registry.reset();
/// ```
#[macro_export]
macro_rules! component_pool {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident for $entity:ty {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $component:ty
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field: $crate::SparseSet<$entity, $component>,
            )+
        }

        impl $crate::ComponentPool for $name {
            type Entity = $entity;

            fn with_capacity(capacity: usize) -> Self {
                $crate::__private::tracing::debug!(
                    pool = stringify!($name),
                    capacity,
                    "component pool created"
                );

                Self {
                    $($field: $crate::SparseSet::with_capacity(capacity),)+
                }
            }

            fn reset(&mut self) {
                $crate::__private::tracing::debug!(
                    pool = stringify!($name),
                    "component pool reset"
                );

                $(self.$field.reset();)+
            }

            fn is_empty(&self) -> bool {
                true $(&& self.$field.is_empty())+
            }
        }

        $(
            impl $crate::Holds<$component> for $name {
                #[inline]
                fn sparse_set(&self) -> &$crate::SparseSet<$entity, $component> {
                    &self.$field
                }

                #[inline]
                fn sparse_set_mut(&mut self) -> &mut $crate::SparseSet<$entity, $component> {
                    &mut self.$field
                }
            }
        )+

        impl ::core::default::Default for $name {
            fn default() -> Self {
                <Self as $crate::ComponentPool>::with_capacity($crate::DEFAULT_CAPACITY)
            }
        }
    };
}

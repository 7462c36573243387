//! # Entity Handles
//!
//! Entities are opaque, externally allocated integers. This crate never
//! inspects them beyond using their value as an index into the reverse
//! mapping of a sparse set.
//!
//! Handle values should stay reasonably dense: a handle of value `N` grows
//! every sparse set it is inserted into to at least `N + 1` reverse slots.

use std::fmt::Debug;
use std::hash::Hash;

/// An integer type usable as an entity handle.
///
/// Implemented for all primitive integers. Signed handles must be
/// non-negative; a negative handle is a contract violation caught by a
/// debug assertion.
///
/// # Example
///
/// ```rust
/// use strata_core::Entity;
///
/// assert_eq!(42u32.index(), 42);
/// assert_eq!(u16::from_index(9), 9);
/// ```
pub trait Entity: Copy + Eq + Hash + Debug + 'static {
    /// Returns the handle as an array index.
    fn index(self) -> usize;

    /// Builds a handle (or slot position) from an array index.
    ///
    /// The index must fit in `Self`.
    fn from_index(index: usize) -> Self;
}

/// Returns `true` if `value` converts to `usize` without truncation.
#[inline]
fn fits_usize<T: TryInto<usize>>(value: T) -> bool {
    value.try_into().is_ok()
}

macro_rules! impl_unsigned_entity {
    ($($ty:ty),+) => {
        $(
            impl Entity for $ty {
                #[inline]
                #[allow(clippy::cast_possible_truncation)]
                fn index(self) -> usize {
                    debug_assert!(
                        fits_usize(self),
                        "entity handle {} does not fit in usize",
                        self
                    );
                    self as usize
                }

                #[inline]
                #[allow(clippy::cast_possible_truncation)]
                fn from_index(index: usize) -> Self {
                    debug_assert!(
                        <$ty>::try_from(index).is_ok(),
                        "index {index} does not fit in {}",
                        stringify!($ty)
                    );
                    index as $ty
                }
            }
        )+
    };
}

macro_rules! impl_signed_entity {
    ($($ty:ty),+) => {
        $(
            impl Entity for $ty {
                #[inline]
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                fn index(self) -> usize {
                    debug_assert!(self >= 0, "negative entity handle {}", self);
                    debug_assert!(
                        fits_usize(self),
                        "entity handle {} does not fit in usize",
                        self
                    );
                    self as usize
                }

                #[inline]
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                fn from_index(index: usize) -> Self {
                    debug_assert!(
                        <$ty>::try_from(index).is_ok(),
                        "index {index} does not fit in {}",
                        stringify!($ty)
                    );
                    index as $ty
                }
            }
        )+
    };
}

impl_unsigned_entity!(u8, u16, u32, u64, usize);
impl_signed_entity!(i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_index_roundtrip() {
        assert_eq!(u8::from_index(255).index(), 255);
        assert_eq!(u32::from_index(1_000_000).index(), 1_000_000);
        assert_eq!(usize::from_index(3).index(), 3);
    }

    #[test]
    fn test_signed_index_roundtrip() {
        assert_eq!(i32::from_index(77).index(), 77);
        assert_eq!(0i64.index(), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "negative entity handle")]
    fn test_negative_handle_rejected() {
        let _ = (-1i32).index();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "does not fit")]
    fn test_oversized_index_rejected() {
        let _ = u8::from_index(256);
    }

    #[test]
    #[cfg(all(debug_assertions, target_pointer_width = "32"))]
    #[should_panic(expected = "does not fit in usize")]
    fn test_wide_handle_rejected() {
        let _ = 0x1_0000_0005_u64.index();
    }

    #[test]
    #[cfg(all(debug_assertions, target_pointer_width = "32"))]
    #[should_panic(expected = "does not fit in usize")]
    fn test_wide_signed_handle_rejected() {
        let _ = 0x1_0000_0005_i64.index();
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_wide_handle_accepted_on_64_bit() {
        assert_eq!(0x1_0000_0005_u64.index(), 0x1_0000_0005);
        assert_eq!(i64::MAX.index(), 0x7FFF_FFFF_FFFF_FFFF);
    }
}

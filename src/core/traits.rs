//! Core numeric traits for amg-graph.

use num_traits::{Bounded, Num, NumCast, PrimInt, Signed, Zero};
use std::fmt::{Debug, Display};

/// Signed integer type used for CSR offsets, column indices and vertex labels.
///
/// Labels use `-1` for "unassigned" (uncolored vertex, vertex with no cluster).
pub trait Index: PrimInt + Signed + Send + Sync + Debug + Display + 'static {
    /// The `-1` label.
    const UNASSIGNED: Self;
    /// Convert a validated, non-negative value to `usize`.
    fn to_index(self) -> usize;
    /// Convert a vertex/cluster position back to the index type.
    ///
    /// Callers guarantee `i` fits; graph construction checks the vertex count.
    fn from_index(i: usize) -> Self;
    /// `true` unless the label is negative.
    #[inline]
    fn is_assigned(self) -> bool {
        self >= Self::zero()
    }
}

macro_rules! impl_index {
    ($($t:ty),*) => {
        $(
            impl Index for $t {
                const UNASSIGNED: Self = -1;
                #[inline]
                fn to_index(self) -> usize {
                    self as usize
                }
                #[inline]
                fn from_index(i: usize) -> Self {
                    i as $t
                }
            }
        )*
    };
}

impl_index!(i32, i64, isize);

/// Edge length / distance type for shortest-path relaxation.
///
/// `infinity()` is the largest representable value and sums saturate at it,
/// so "unreached" never wraps around.
pub trait Weight: Copy + PartialOrd + Zero + Bounded + Send + Sync + Debug + 'static {
    #[inline]
    fn infinity() -> Self {
        Self::max_value()
    }
    /// `self + other`, clamped to `infinity()`.
    fn saturating_sum(self, other: Self) -> Self;
    /// `false` for NaN.
    #[inline]
    fn is_comparable(self) -> bool {
        self.partial_cmp(&self).is_some()
    }
}

macro_rules! impl_weight_float {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                #[inline]
                fn saturating_sum(self, other: Self) -> Self {
                    let s = self + other;
                    if s > <$t>::MAX { <$t>::MAX } else { s }
                }
            }
        )*
    };
}

macro_rules! impl_weight_int {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                #[inline]
                fn saturating_sum(self, other: Self) -> Self {
                    self.saturating_add(other)
                }
            }
        )*
    };
}

impl_weight_float!(f32, f64);
impl_weight_int!(i32, i64, u32, u64, usize);

/// Caller-supplied tie-break value (usually a random `f64`).
pub trait Priority: Copy + PartialOrd + Num + NumCast + Send + Sync + Debug + 'static {
    /// `false` for NaN; tie-breaking needs a total order.
    #[inline]
    fn is_ordered(self) -> bool {
        self.partial_cmp(&self).is_some()
    }
    /// `self + other`, or `None` when an integer sum overflows.
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! impl_priority_float {
    ($($t:ty),*) => {
        $(
            impl Priority for $t {
                #[inline]
                fn checked_sum(self, other: Self) -> Option<Self> {
                    Some(self + other)
                }
            }
        )*
    };
}

macro_rules! impl_priority_int {
    ($($t:ty),*) => {
        $(
            impl Priority for $t {
                #[inline]
                fn checked_sum(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }
            }
        )*
    };
}

impl_priority_float!(f32, f64);
impl_priority_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Per-vertex state tag for the independent-set engine.
pub trait Label: Copy + PartialEq + Send + Sync + Debug + 'static {}

impl<T> Label for T where T: Copy + PartialEq + Send + Sync + Debug + 'static {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip_and_unassigned() {
        assert_eq!(i32::from_index(7).to_index(), 7);
        assert!(!i64::UNASSIGNED.is_assigned());
        assert!(0isize.is_assigned());
    }

    #[test]
    fn weights_saturate_at_infinity() {
        assert_eq!(f64::infinity().saturating_sum(1.0), f64::MAX);
        assert_eq!(f64::MAX.saturating_sum(f64::MAX), f64::MAX);
        assert_eq!(i32::infinity().saturating_sum(3), i32::MAX);
        assert_eq!(2u32.saturating_sum(3), 5);
        assert!(!Weight::is_comparable(f32::NAN));
        assert!(!Priority::is_ordered(f64::NAN));
    }

    #[test]
    fn integer_priorities_report_overflow() {
        assert_eq!(Priority::checked_sum(i32::MAX - 1, 1), Some(i32::MAX));
        assert_eq!(Priority::checked_sum(i32::MAX, 1), None);
        assert_eq!(Priority::checked_sum(250u8, 6), None);
        assert_eq!(Priority::checked_sum(0.5f64, 2.0), Some(2.5));
    }
}

//! Accumulator widths for window sums.
//!
//! Summing `length` elements can exceed the element type's range, so every
//! element type declares a wider accumulator. Integer elements widen to the
//! next 64/128-bit type; `length * max |element|` fits for any window that
//! fits in memory. Floats accumulate in `f64`.
//!
//! Integer accumulation is exact, so a running sum can subtract a leaving
//! element and land on the same total a rescan would. Float accumulation is
//! not, and [`Accumulate::EXACT`] tells the search code which case it is in.

use ordered_float::OrderedFloat;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Element types that can be summed across a window.
pub trait Accumulate: Copy {
    /// Accumulator type used for running sums and thresholds.
    type Sum: Copy
        + PartialOrd
        + Debug
        + Add<Output = Self::Sum>
        + Sub<Output = Self::Sum>
        + AddAssign
        + SubAssign;

    /// Hashable stand-in for the element, used for per-window uniqueness.
    type Key: Eq + Hash;

    /// `true` when `sum + x - x == sum` holds for every reachable sum.
    const EXACT: bool;

    fn zero() -> Self::Sum;

    /// Converts an element into the accumulator type without loss.
    fn widen(self) -> Self::Sum;

    /// Converts an accumulated sum to `f64` for averaging.
    fn sum_to_f64(sum: Self::Sum) -> f64;

    /// `true` when the element is strictly below zero. NaN is not negative.
    fn is_negative(self) -> bool;

    fn unique_key(self) -> Self::Key;
}

macro_rules! impl_signed {
    ($($elem:ty => $sum:ty),* $(,)?) => {$(
        impl Accumulate for $elem {
            type Sum = $sum;
            type Key = $elem;
            const EXACT: bool = true;

            #[inline]
            fn zero() -> $sum {
                0
            }

            #[inline]
            fn widen(self) -> $sum {
                self as $sum
            }

            #[inline]
            fn sum_to_f64(sum: $sum) -> f64 {
                sum as f64
            }

            #[inline]
            fn is_negative(self) -> bool {
                self < 0
            }

            #[inline]
            fn unique_key(self) -> $elem {
                self
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($elem:ty => $sum:ty),* $(,)?) => {$(
        impl Accumulate for $elem {
            type Sum = $sum;
            type Key = $elem;
            const EXACT: bool = true;

            #[inline]
            fn zero() -> $sum {
                0
            }

            #[inline]
            fn widen(self) -> $sum {
                self as $sum
            }

            #[inline]
            fn sum_to_f64(sum: $sum) -> f64 {
                sum as f64
            }

            #[inline]
            fn is_negative(self) -> bool {
                false
            }

            #[inline]
            fn unique_key(self) -> $elem {
                self
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($elem:ty => |$value:ident| $widen:expr),* $(,)?) => {$(
        impl Accumulate for $elem {
            type Sum = f64;
            type Key = OrderedFloat<f64>;
            const EXACT: bool = false;

            #[inline]
            fn zero() -> f64 {
                0.0
            }

            #[inline]
            fn widen(self) -> f64 {
                let $value = self;
                $widen
            }

            #[inline]
            fn sum_to_f64(sum: f64) -> f64 {
                sum
            }

            #[inline]
            fn is_negative(self) -> bool {
                self.widen() < 0.0
            }

            // f32 -> f64 is lossless, so equal keys mean equal elements.
            #[inline]
            fn unique_key(self) -> OrderedFloat<f64> {
                OrderedFloat(self.widen())
            }
        }
    )*};
}

impl_signed!(i8 => i64, i16 => i64, i32 => i64, i64 => i128, isize => i128);
impl_unsigned!(u8 => u64, u16 => u64, u32 => u64, u64 => u128, usize => u128);
impl_float!(
    f32 => |value| value as f64,
    f64 => |value| value,
    OrderedFloat<f32> => |value| value.into_inner() as f64,
    OrderedFloat<f64> => |value| value.into_inner(),
);

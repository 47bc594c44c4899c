use std::fmt::{Debug, Display};
use std::str::FromStr;

/// Two floating point coordinates closer than this compare equal.
pub const EPSILON: f64 = 1e-9;

// Taken from https://github.com/abcperf/trait-alias-macro
macro_rules! trait_alias {
    ($vis:vis trait $name:ident = $($base:tt)+) => {
        $vis trait $name: $($base)+ { }
        impl<T: $($base)+> $name for T { }
    };
}

trait_alias!(pub trait ScalarReqs = Copy + Debug + Display + Default + PartialOrd + FromStr + num::Num + 'static);

/// A primitive number usable as a coordinate.
///
/// Geometry is always evaluated in `f64`; the results are narrowed back into the
/// scalar type with `as`-cast semantics, so integer coordinates truncate toward zero.
pub trait Scalar: ScalarReqs {
    fn to_f64(self) -> f64;
    fn from_f64(value: f64) -> Self;
    /// Exact for integers, within [`EPSILON`] for floats.
    fn scalar_eq(self, other: Self) -> bool;
}

macro_rules! impl_scalar_for {
    (exact: $($Type:ty),+) => {
        $(
            impl Scalar for $Type {
                fn to_f64(self) -> f64 {
                    self as f64
                }
                fn from_f64(value: f64) -> Self {
                    value as $Type
                }
                fn scalar_eq(self, other: Self) -> bool {
                    self == other
                }
            }
        )+
    };
    (tolerant: $($Type:ty),+) => {
        $(
            impl Scalar for $Type {
                fn to_f64(self) -> f64 {
                    self as f64
                }
                fn from_f64(value: f64) -> Self {
                    value as $Type
                }
                fn scalar_eq(self, other: Self) -> bool {
                    (self as f64 - other as f64).abs() < EPSILON
                }
            }
        )+
    };
}

impl_scalar_for!(exact: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_scalar_for!(tolerant: f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use ntest::{assert_false, assert_true};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_integers_compare_exactly() {
        assert_true!(5i32.scalar_eq(5));
        assert_false!(5i32.scalar_eq(6));
        assert_false!(0u8.scalar_eq(1));
    }
    #[test]
    fn test_floats_compare_within_epsilon() {
        assert_true!(1.0f64.scalar_eq(1.0 + 1e-10));
        assert_false!(1.0f64.scalar_eq(1.0 + 1e-8));
        assert_true!((-3.5f64).scalar_eq(-3.5));
    }
    #[test]
    fn test_narrowing_truncates_toward_zero() {
        assert_eq!(i32::from_f64(2.9), 2);
        assert_eq!(i32::from_f64(-2.9), -2);
        assert_eq!(f32::from_f64(0.5), 0.5);
    }
    #[test]
    fn test_widening() {
        assert_eq!(7u16.to_f64(), 7.0);
        assert_eq!((-4i64).to_f64(), -4.0);
    }
}

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use derive_more::Constructor;
use euclid::default::Point2D;

use crate::parse::{next_scalar, parse_complete, FromTokens, ParseError};
use crate::Scalar;

/// A 2D coordinate pair.
///
/// Float points within [`EPSILON`](crate::EPSILON) of each other on both axes are equal.
#[derive(Debug, Clone, Copy, Default, Constructor)]
pub struct Point<T: Scalar> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Point<T> {
    pub fn to_f64_point(&self) -> Point2D<f64> {
        euclid::point2(self.x.to_f64(), self.y.to_f64())
    }
    /// Always evaluated in `f64`, so narrow integer types cannot overflow.
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.to_f64_point().distance_to(other.to_f64_point())
    }
    pub fn from_f64_point(point: Point2D<f64>) -> Self {
        Self::new(T::from_f64(point.x), T::from_f64(point.y))
    }
    pub fn tuple(&self) -> (T, T) {
        (self.x, self.y)
    }
}

impl<T: Scalar> PartialEq for Point<T> {
    fn eq(&self, other: &Self) -> bool {
        self.x.scalar_eq(other.x) && self.y.scalar_eq(other.y)
    }
}

impl<T: Scalar> From<(T, T)> for Point<T> {
    fn from(value: (T, T)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl<T: Scalar> Display for Point<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

impl<T: Scalar> FromTokens for Point<T> {
    fn from_tokens<'a, I>(tokens: &mut I) -> Result<Self, ParseError>
    where
        I: Iterator<Item = &'a str>,
    {
        let x = next_scalar(tokens, "x coordinate")?;
        let y = next_scalar(tokens, "y coordinate")?;
        Ok(Self::new(x, y))
    }
}

impl<T: Scalar> FromStr for Point<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_complete(s)
    }
}

mod scalar;
pub use scalar::{Scalar, ScalarReqs, EPSILON};

mod point;
pub use point::Point;

pub mod parse;
pub use parse::{parse_complete, parse_many, FromTokens, ParseError};

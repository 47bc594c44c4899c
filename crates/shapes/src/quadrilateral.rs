use std::fmt::{Display, Formatter};
use std::str::FromStr;

use coordinates::parse::next_token;
use coordinates::{parse_complete, FromTokens, ParseError, Point, Scalar};
use figure_array::HasArea;

use crate::figure::Figure;
use crate::shapes::{Rectangle, Rhombus, Square, Trapezoid};

/// Any of the supported figures, for collections that mix them.
#[derive(Debug, Clone, PartialEq, derive_more::From)]
pub enum Quadrilateral<T: Scalar> {
    Rectangle(Rectangle<T>),
    Rhombus(Rhombus<T>),
    Square(Square<T>),
    Trapezoid(Trapezoid<T>),
}

macro_rules! on_variant {
    ($value:expr, $figure:ident => $body:expr) => {
        match $value {
            Quadrilateral::Rectangle($figure) => $body,
            Quadrilateral::Rhombus($figure) => $body,
            Quadrilateral::Square($figure) => $body,
            Quadrilateral::Trapezoid($figure) => $body,
        }
    };
}

impl<T: Scalar> Quadrilateral<T> {
    /// The tag written in front of the vertices in the text form.
    pub fn kind(&self) -> &'static str {
        match self {
            Quadrilateral::Rectangle(_) => "rectangle",
            Quadrilateral::Rhombus(_) => "rhombus",
            Quadrilateral::Square(_) => "square",
            Quadrilateral::Trapezoid(_) => "trapezoid",
        }
    }
}

impl<T: Scalar> Figure<T> for Quadrilateral<T> {
    fn points(&self) -> &[Point<T>] {
        on_variant!(self, figure => figure.points())
    }
    fn area(&self) -> f64 {
        on_variant!(self, figure => figure.area())
    }
}

impl<T: Scalar> From<&Quadrilateral<T>> for f64 {
    fn from(figure: &Quadrilateral<T>) -> f64 {
        figure.area()
    }
}

impl<T: Scalar> From<Quadrilateral<T>> for f64 {
    fn from(figure: Quadrilateral<T>) -> f64 {
        figure.area()
    }
}

impl<T: Scalar> HasArea for Quadrilateral<T> {
    fn as_area(&self) -> f64 {
        self.area()
    }
}

impl<T: Scalar> Display for Quadrilateral<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ", self.kind())?;
        on_variant!(self, figure => write!(f, "{figure}"))
    }
}

impl<T: Scalar> FromTokens for Quadrilateral<T> {
    fn from_tokens<'a, I>(tokens: &mut I) -> Result<Self, ParseError>
    where
        I: Iterator<Item = &'a str>,
    {
        let kind = next_token(tokens, "shape kind")?;
        Ok(match kind {
            "rectangle" => Rectangle::<T>::from_tokens(tokens)?.into(),
            "rhombus" => Rhombus::<T>::from_tokens(tokens)?.into(),
            "square" => Square::<T>::from_tokens(tokens)?.into(),
            "trapezoid" => Trapezoid::<T>::from_tokens(tokens)?.into(),
            other => return Err(ParseError::UnknownKind(other.to_string())),
        })
    }
}

impl<T: Scalar> FromStr for Quadrilateral<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_complete(s)
    }
}

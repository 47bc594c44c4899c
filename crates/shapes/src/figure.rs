use coordinates::{FromTokens, ParseError, Point, Scalar};

/// Every current figure is a quadrilateral.
pub const VERTEX_COUNT: usize = 4;

/// A closed planar figure.
///
/// Area formulas assume the vertices come in a consistent winding order. Nothing checks
/// that they actually form the claimed figure.
pub trait Figure<T: Scalar> {
    fn points(&self) -> &[Point<T>];
    fn area(&self) -> f64;

    fn vertex_count(&self) -> usize {
        self.points().len()
    }
    /// Mean of the vertices, evaluated in `f64` and narrowed back into `T`.
    fn center(&self) -> Point<T> {
        centroid(self.points())
    }
}

pub(crate) fn centroid<T: Scalar>(points: &[Point<T>]) -> Point<T> {
    if points.is_empty() {
        return Point::default();
    }
    let (sum_x, sum_y) = points.iter().fold((0.0, 0.0), |(sum_x, sum_y), p| {
        (sum_x + p.x.to_f64(), sum_y + p.y.to_f64())
    });
    let count = points.len() as f64;
    Point::new(T::from_f64(sum_x / count), T::from_f64(sum_y / count))
}

pub(crate) fn read_vertices<'a, T, I>(tokens: &mut I) -> Result<[Point<T>; VERTEX_COUNT], ParseError>
where
    T: Scalar,
    I: Iterator<Item = &'a str>,
{
    let mut vertices = [Point::default(); VERTEX_COUNT];
    for vertex in vertices.iter_mut() {
        *vertex = Point::from_tokens(tokens)?;
    }
    Ok(vertices)
}

/// Defines a quadrilateral figure owning its four vertices inline, plus its conversions and
/// text format. `$area` computes the area from the vertex array.
macro_rules! quadrilateral_figure {
    ($(#[$meta:meta])* $Name:ident, area: $area:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default, getset::Getters)]
        pub struct $Name<T: coordinates::Scalar> {
            #[get = "pub"]
            vertices: [coordinates::Point<T>; crate::figure::VERTEX_COUNT],
        }

        impl<T: coordinates::Scalar> $Name<T> {
            pub fn new(
                p1: coordinates::Point<T>,
                p2: coordinates::Point<T>,
                p3: coordinates::Point<T>,
                p4: coordinates::Point<T>,
            ) -> Self {
                Self::from_vertices([p1, p2, p3, p4])
            }
            pub fn from_vertices(vertices: [coordinates::Point<T>; crate::figure::VERTEX_COUNT]) -> Self {
                $Name { vertices }
            }
        }

        impl<T: coordinates::Scalar> crate::figure::Figure<T> for $Name<T> {
            fn points(&self) -> &[coordinates::Point<T>] {
                &self.vertices
            }
            fn area(&self) -> f64 {
                $area(&self.vertices)
            }
        }

        impl<T: coordinates::Scalar> From<&$Name<T>> for f64 {
            fn from(figure: &$Name<T>) -> f64 {
                crate::figure::Figure::area(figure)
            }
        }

        impl<T: coordinates::Scalar> From<$Name<T>> for f64 {
            fn from(figure: $Name<T>) -> f64 {
                f64::from(&figure)
            }
        }

        impl<T: coordinates::Scalar> figure_array::HasArea for $Name<T> {
            fn as_area(&self) -> f64 {
                crate::figure::Figure::area(self)
            }
        }

        impl<T: coordinates::Scalar> std::fmt::Display for $Name<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", itertools::Itertools::join(&mut self.vertices.iter(), " "))
            }
        }

        impl<T: coordinates::Scalar> coordinates::FromTokens for $Name<T> {
            fn from_tokens<'a, I>(tokens: &mut I) -> Result<Self, coordinates::ParseError>
            where
                I: Iterator<Item = &'a str>,
            {
                Ok(Self::from_vertices(crate::figure::read_vertices(tokens)?))
            }
        }

        impl<T: coordinates::Scalar> std::str::FromStr for $Name<T> {
            type Err = coordinates::ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                coordinates::parse_complete(s)
            }
        }
    };
}
pub(crate) use quadrilateral_figure;

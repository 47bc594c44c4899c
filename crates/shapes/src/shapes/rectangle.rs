use coordinates::{Point, Scalar};

use crate::figure::{quadrilateral_figure, VERTEX_COUNT};

/// Product of two adjacent sides.
fn rectangle_area<T: Scalar>(vertices: &[Point<T>; VERTEX_COUNT]) -> f64 {
    vertices[0].distance_to(&vertices[1]) * vertices[1].distance_to(&vertices[2])
}

quadrilateral_figure!(
    /// Vertices go around the rectangle in order.
    Rectangle,
    area: rectangle_area
);

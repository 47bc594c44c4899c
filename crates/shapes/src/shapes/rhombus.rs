use coordinates::{Point, Scalar};

use crate::figure::{quadrilateral_figure, VERTEX_COUNT};

/// Half the product of the diagonals `v0v2` and `v1v3`.
fn rhombus_area<T: Scalar>(vertices: &[Point<T>; VERTEX_COUNT]) -> f64 {
    let first_diagonal = vertices[0].distance_to(&vertices[2]);
    let second_diagonal = vertices[1].distance_to(&vertices[3]);
    first_diagonal * second_diagonal / 2.0
}

quadrilateral_figure!(
    /// Vertices go around the rhombus in order, so opposite vertices span the diagonals.
    Rhombus,
    area: rhombus_area
);

use coordinates::{Point, Scalar};

use crate::figure::{quadrilateral_figure, VERTEX_COUNT};

/// The parallel sides are `v0v1` and `v2v3`.
fn trapezoid_area<T: Scalar>(vertices: &[Point<T>; VERTEX_COUNT]) -> f64 {
    let [a, b, c, d] = (*vertices).map(|vertex| vertex.to_f64_point());
    let lower = b - a;
    let upper = d - c;
    let (lower_length, upper_length) = (lower.length(), upper.length());
    let height = if lower_length > 0.0 {
        lower.cross(d - a).abs() / lower_length
    } else if upper_length > 0.0 {
        upper.cross(a - c).abs() / upper_length
    } else {
        return 0.0;
    };
    (lower_length + upper_length) / 2.0 * height
}

quadrilateral_figure!(
    /// Vertices go around the trapezoid in order, starting with one of the parallel sides.
    Trapezoid,
    area: trapezoid_area
);

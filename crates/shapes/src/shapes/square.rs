use coordinates::{Point, Scalar};

use crate::figure::{quadrilateral_figure, VERTEX_COUNT};

fn square_area<T: Scalar>(vertices: &[Point<T>; VERTEX_COUNT]) -> f64 {
    let side = vertices[0].distance_to(&vertices[1]);
    side * side
}

quadrilateral_figure!(
    /// Vertices go around the square in order; only the first side is measured.
    Square,
    area: square_area
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::Figure;
    use ntest::assert_about_eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_area_and_center() {
        let s = Square::new(
            Point::new(0, 0),
            Point::new(3, 0),
            Point::new(3, 3),
            Point::new(0, 3),
        );
        assert_eq!(s.vertex_count(), 4);
        assert_eq!(s.area(), 9.0);
        assert_eq!(s.center(), Point::new(1, 1));
    }
    #[test]
    fn test_diamond_orientation() {
        let s = Square::new(
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, -1.0),
            Point::new(-1.0, 0.0),
        );
        assert_about_eq!(f64::from(s.clone()), 2.0);
        assert_eq!(s.center(), Point::new(0.0, 0.0));
    }
    #[test]
    fn test_default_has_no_area() {
        assert_eq!(Square::<f32>::default().area(), 0.0);
    }
}

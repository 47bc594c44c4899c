mod rectangle;
pub use rectangle::Rectangle;

mod rhombus;
pub use rhombus::Rhombus;

mod square;
pub use square::Square;

mod trapezoid;
pub use trapezoid::Trapezoid;

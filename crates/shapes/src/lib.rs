//! Closed planar quadrilaterals sharing the [`Figure`] interface.
//!
//! Every figure owns its four vertices inline and converts into its `f64` area, which is
//! what lets a `figure_array::FigureArray` of them total their areas.

mod figure;
pub use figure::{Figure, VERTEX_COUNT};

mod shapes;
pub use crate::shapes::*;

mod quadrilateral;
pub use quadrilateral::Quadrilateral;

use coordinates::FromTokens;
use std::fmt::{Debug, Display};
use std::str::FromStr;

macro_rules! validate_figure {
    ($($Shape:ident),+ $(,)?) => {
        $(
            static_assertions::assert_impl_all!(
                $Shape<i32>: Figure<i32>, Clone, PartialEq, Debug, Display, FromStr, FromTokens
            );
            static_assertions::assert_impl_all!(
                $Shape<f64>: Figure<f64>, Clone, PartialEq, Debug, Display, FromStr, FromTokens
            );
            static_assertions::assert_impl_all!(f64: From<$Shape<i32>>, From<$Shape<f64>>);
        )+
    };
}

validate_figure!(Rectangle, Rhombus, Square, Trapezoid, Quadrilateral);
static_assertions::assert_obj_safe!(Figure<i32>);

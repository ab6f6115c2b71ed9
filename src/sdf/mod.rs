mod boolean;
mod circle;
mod polygon;
mod rotate;

pub use boolean::{DifferenceSdf2, UnionSdf2};
pub use circle::CircleSdf2;
pub use polygon::PolygonSdf2;
pub use rotate::RotateSdf2;

use crate::math::{Box2, Point2};

/// A 2D signed distance field.
///
/// `evaluate` is negative inside the shape, zero on its boundary and
/// positive outside. Implementations are immutable after construction, so
/// shared instances may be evaluated from any number of threads.
pub trait Sdf2: Send + Sync {
    /// Returns the signed distance from `p` to the shape boundary.
    fn evaluate(&self, p: Point2) -> f64;

    /// Returns a rectangle enclosing the shape.
    fn bounding_box(&self) -> Box2;
}

impl<T: Sdf2 + ?Sized> Sdf2 for Box<T> {
    fn evaluate(&self, p: Point2) -> f64 {
        (**self).evaluate(p)
    }

    fn bounding_box(&self) -> Box2 {
        (**self).bounding_box()
    }
}

impl<T: Sdf2 + ?Sized> Sdf2 for &T {
    fn evaluate(&self, p: Point2) -> f64 {
        (**self).evaluate(p)
    }

    fn bounding_box(&self) -> Box2 {
        (**self).bounding_box()
    }
}

use crate::math::{Box2, Point2};

use super::Sdf2;

/// A disk centred on the origin.
#[derive(Debug, Clone, Copy)]
pub struct CircleSdf2 {
    radius: f64,
}

impl CircleSdf2 {
    /// Creates a disk of the given radius.
    ///
    /// A zero radius is accepted and describes the single point at the origin.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Sdf2 for CircleSdf2 {
    fn evaluate(&self, p: Point2) -> f64 {
        p.coords.norm() - self.radius
    }

    fn bounding_box(&self) -> Box2 {
        let r = self.radius;
        Box2::new(Point2::new(-r, -r), Point2::new(r, r))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn sign_convention() {
        let c = CircleSdf2::new(2.0);
        assert_abs_diff_eq!(c.evaluate(Point2::origin()), -2.0);
        assert_abs_diff_eq!(c.evaluate(Point2::new(0.0, 2.0)), 0.0);
        assert_abs_diff_eq!(c.evaluate(Point2::new(3.0, 4.0)), 3.0);
    }

    #[test]
    fn bounding_box_is_square() {
        let bb = CircleSdf2::new(1.5).bounding_box();
        assert_eq!(bb.min, Point2::new(-1.5, -1.5));
        assert_eq!(bb.max, Point2::new(1.5, 1.5));
    }
}

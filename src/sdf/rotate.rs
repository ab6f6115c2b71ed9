use crate::error::{GeometryError, Result};
use crate::math::{rotate, Box2, Point2};

use super::Sdf2;

/// Union of `count` copies of a field, copy `k` rotated by `k * step`
/// about the origin.
pub struct RotateSdf2 {
    sdf: Box<dyn Sdf2>,
    count: usize,
    step: f64,
    bb: Box2,
}

impl RotateSdf2 {
    /// Creates the rotated array.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero.
    pub fn new(sdf: Box<dyn Sdf2>, count: usize, step: f64) -> Result<Self> {
        if count == 0 {
            return Err(GeometryError::Degenerate("rotate array needs at least one copy".into()).into());
        }
        let corners = sdf.bounding_box().corners();
        let mut bb = Box2::new(corners[0], corners[0]);
        for k in 0..count {
            #[allow(clippy::cast_precision_loss)]
            let angle = step * k as f64;
            for c in corners {
                bb = bb.extend(rotate(c, angle));
            }
        }
        Ok(Self { sdf, count, step, bb })
    }
}

impl Sdf2 for RotateSdf2 {
    #[allow(clippy::cast_precision_loss)]
    fn evaluate(&self, p: Point2) -> f64 {
        (0..self.count)
            .map(|k| self.sdf.evaluate(rotate(p, -self.step * k as f64)))
            .fold(f64::INFINITY, f64::min)
    }

    fn bounding_box(&self) -> Box2 {
        self.bb
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::TAU;
    use crate::sdf::PolygonSdf2;

    fn spoke() -> Box<dyn Sdf2> {
        Box::new(
            PolygonSdf2::new(vec![
                Point2::new(0.0, -0.5),
                Point2::new(4.0, -0.5),
                Point2::new(4.0, 0.5),
                Point2::new(0.0, 0.5),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn copies_appear_at_each_step() {
        let cross = RotateSdf2::new(spoke(), 4, TAU / 4.0).unwrap();
        for q in [Point2::new(3.0, 0.0), Point2::new(0.0, 3.0), Point2::new(-3.0, 0.0), Point2::new(0.0, -3.0)] {
            assert_abs_diff_eq!(cross.evaluate(q), -0.5, epsilon = 1e-12);
        }
        // Between the spokes.
        assert!(cross.evaluate(Point2::new(2.0, 2.0)) > 0.0);
    }

    #[test]
    fn bounding_box_covers_all_copies() {
        let cross = RotateSdf2::new(spoke(), 4, TAU / 4.0).unwrap();
        let bb = cross.bounding_box();
        assert_abs_diff_eq!(bb.min.x, -4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bb.min.y, -4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bb.max.x, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bb.max.y, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_copies_rejected() {
        assert!(RotateSdf2::new(spoke(), 0, 1.0).is_err());
    }
}

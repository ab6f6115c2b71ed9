use crate::math::{Box2, Point2};

use super::Sdf2;

/// Union of any number of fields: the pointwise minimum.
pub struct UnionSdf2 {
    children: Vec<Box<dyn Sdf2>>,
    bb: Box2,
}

impl UnionSdf2 {
    /// Creates the union of `first` and `rest`.
    #[must_use]
    pub fn new(first: Box<dyn Sdf2>, rest: Vec<Box<dyn Sdf2>>) -> Self {
        let bb = rest
            .iter()
            .fold(first.bounding_box(), |bb, s| bb.union(&s.bounding_box()));
        let mut children = Vec::with_capacity(rest.len() + 1);
        children.push(first);
        children.extend(rest);
        Self { children, bb }
    }

    /// Creates the union of two fields.
    #[must_use]
    pub fn pair(a: Box<dyn Sdf2>, b: Box<dyn Sdf2>) -> Self {
        Self::new(a, vec![b])
    }
}

impl Sdf2 for UnionSdf2 {
    fn evaluate(&self, p: Point2) -> f64 {
        self.children
            .iter()
            .map(|s| s.evaluate(p))
            .fold(f64::INFINITY, f64::min)
    }

    fn bounding_box(&self) -> Box2 {
        self.bb
    }
}

/// `a` with `b` removed: `max(a, -b)`.
pub struct DifferenceSdf2 {
    a: Box<dyn Sdf2>,
    b: Box<dyn Sdf2>,
}

impl DifferenceSdf2 {
    /// Creates the difference `a - b`.
    #[must_use]
    pub fn new(a: Box<dyn Sdf2>, b: Box<dyn Sdf2>) -> Self {
        Self { a, b }
    }
}

impl Sdf2 for DifferenceSdf2 {
    fn evaluate(&self, p: Point2) -> f64 {
        self.a.evaluate(p).max(-self.b.evaluate(p))
    }

    fn bounding_box(&self) -> Box2 {
        self.a.bounding_box()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::sdf::CircleSdf2;

    struct Shifted(CircleSdf2, f64);

    impl Sdf2 for Shifted {
        fn evaluate(&self, p: Point2) -> f64 {
            self.0.evaluate(Point2::new(p.x - self.1, p.y))
        }

        fn bounding_box(&self) -> Box2 {
            let bb = self.0.bounding_box();
            Box2::new(
                Point2::new(bb.min.x + self.1, bb.min.y),
                Point2::new(bb.max.x + self.1, bb.max.y),
            )
        }
    }

    #[test]
    fn union_takes_nearest() {
        let u = UnionSdf2::pair(
            Box::new(CircleSdf2::new(1.0)),
            Box::new(Shifted(CircleSdf2::new(1.0), 4.0)),
        );
        assert_abs_diff_eq!(u.evaluate(Point2::new(2.0, 0.0)), 1.0);
        assert_abs_diff_eq!(u.evaluate(Point2::new(4.0, 0.0)), -1.0);
        let bb = u.bounding_box();
        assert_eq!(bb.min, Point2::new(-1.0, -1.0));
        assert_eq!(bb.max, Point2::new(5.0, 1.0));
    }

    #[test]
    fn difference_cuts_hole() {
        let ring = DifferenceSdf2::new(Box::new(CircleSdf2::new(3.0)), Box::new(CircleSdf2::new(1.0)));
        assert_abs_diff_eq!(ring.evaluate(Point2::origin()), 1.0);
        assert_abs_diff_eq!(ring.evaluate(Point2::new(2.0, 0.0)), -1.0);
        assert_abs_diff_eq!(ring.evaluate(Point2::new(5.0, 0.0)), 2.0);
        assert_eq!(ring.bounding_box(), CircleSdf2::new(3.0).bounding_box());
    }
}

use super::{Point2, Vector2};

/// An axis-aligned rectangle in the plane.
///
/// `min` is componentwise less than or equal to `max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Box2 {
    /// Minimum corner.
    pub min: Point2,
    /// Maximum corner.
    pub max: Point2,
}

impl Box2 {
    /// Creates a box spanning the two corners, in either order.
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Returns the smallest box enclosing all `points`, or `None` if empty.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bb = Self::new(*first, *first);
        for p in rest {
            bb = bb.extend(*p);
        }
        Some(bb)
    }

    /// Returns this box grown to include `p`.
    #[must_use]
    pub fn extend(&self, p: Point2) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Returns the smallest box enclosing both boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        self.extend(other.min).extend(other.max)
    }

    /// Returns the four corners, counter-clockwise from `min`.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        [
            self.min,
            Point2::new(self.max.x, self.min.y),
            self.max,
            Point2::new(self.min.x, self.max.y),
        ]
    }

    /// Returns the extent of the box.
    #[must_use]
    pub fn size(&self) -> Vector2 {
        self.max - self.min
    }
}

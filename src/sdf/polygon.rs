use crate::error::{GeometryError, Result};
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::{Box2, Point2};

use super::Sdf2;

/// A closed polygon given by its vertices in order.
///
/// The closing edge from the last vertex back to the first is implicit.
/// Inside/outside is decided by the even-odd rule, so either winding is
/// accepted.
#[derive(Debug, Clone)]
pub struct PolygonSdf2 {
    vertices: Vec<Point2>,
    bb: Box2,
}

impl PolygonSdf2 {
    /// Creates a polygon from an ordered vertex list.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than three vertices are given or any
    /// coordinate is not finite.
    pub fn new(vertices: Vec<Point2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::Degenerate(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            ))
            .into());
        }
        if let Some(bad) = vertices.iter().find(|v| !v.x.is_finite() || !v.y.is_finite()) {
            return Err(GeometryError::Degenerate(format!(
                "polygon vertex ({}, {}) is not finite",
                bad.x, bad.y
            ))
            .into());
        }
        let bb = Box2::from_points(&vertices)
            .ok_or_else(|| GeometryError::Degenerate("empty polygon".into()))?;
        Ok(Self { vertices, bb })
    }

    /// Returns the polygon vertices in order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

impl Sdf2 for PolygonSdf2 {
    fn evaluate(&self, p: Point2) -> f64 {
        let mut dist = f64::INFINITY;
        let mut inside = false;
        for (a, b) in self.edges() {
            dist = dist.min(point_to_segment_dist(p, a, b));
            // Ray cast towards +x.
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
        }
        if inside {
            -dist
        } else {
            dist
        }
    }

    fn bounding_box(&self) -> Box2 {
        self.bb
    }
}

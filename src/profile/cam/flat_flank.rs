use tracing::trace;

use crate::error::{require_positive, GeometryError, Result};
use crate::math::distance_2d::signed_line_offset;
use crate::math::{Box2, Point2, Vector2, TOLERANCE};
use crate::sdf::Sdf2;

/// A cam made from a base circle, a nose circle and straight flanks.
///
/// The base circle is centred on the origin and the nose circle on the
/// positive y axis. Each flank is the common outer tangent of the two
/// circles, so the profile is symmetric about the y axis.
#[derive(Debug, Clone)]
pub struct FlatFlankCam {
    distance: f64,
    base_radius: f64,
    nose_radius: f64,
    /// Flank tangent point on the base circle (+x side).
    a: Point2,
    /// Flank tangent point on the nose circle (+x side).
    b: Point2,
    /// Unit direction from `a` to `b`.
    u: Vector2,
    /// Length of the flank line.
    l: f64,
    bb: Box2,
}

impl FlatFlankCam {
    /// Creates a flat-flank cam.
    ///
    /// # Arguments
    ///
    /// * `distance` - Centre to centre distance of the base and nose circles
    /// * `base_radius` - Radius of the base circle
    /// * `nose_radius` - Radius of the nose circle
    ///
    /// # Errors
    ///
    /// Returns an error if any argument is non-positive or the circles
    /// have no common outer tangent of non-zero length
    /// (`|base_radius - nose_radius| >= distance`).
    pub fn new(distance: f64, base_radius: f64, nose_radius: f64) -> Result<Self> {
        require_positive("distance", distance)?;
        require_positive("base_radius", base_radius)?;
        require_positive("nose_radius", nose_radius)?;

        let sin = (base_radius - nose_radius) / distance;
        if sin.abs() >= 1.0 {
            return Err(GeometryError::Degenerate(format!(
                "no flank tangent: |base_radius - nose_radius| = {} exceeds distance = {distance}",
                (base_radius - nose_radius).abs()
            ))
            .into());
        }
        let cos = (1.0 - sin * sin).sqrt();

        // The tangent points share the outward normal (cos, sin).
        let n = Vector2::new(cos, sin);
        let a = Point2::from(n * base_radius);
        let b = Point2::from(n * nose_radius + Vector2::new(0.0, distance));
        let ab = b - a;
        let l = ab.norm();
        if l <= TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "flank has zero length: circles are internally tangent at distance = {distance}"
            ))
            .into());
        }
        let u = ab / l;
        trace!(?a, ?b, flank_length = l, "flat flank cam");

        Ok(Self {
            distance,
            base_radius,
            nose_radius,
            a,
            b,
            u,
            l,
            bb: Box2::new(
                Point2::new(-base_radius, -base_radius),
                Point2::new(base_radius, distance + nose_radius),
            ),
        })
    }

    /// Returns the centre to centre distance.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns the base circle radius.
    #[must_use]
    pub fn base_radius(&self) -> f64 {
        self.base_radius
    }

    /// Returns the nose circle radius.
    #[must_use]
    pub fn nose_radius(&self) -> f64 {
        self.nose_radius
    }

    /// Returns the flank endpoints on the base and nose circles (+x side).
    #[must_use]
    pub fn flank(&self) -> (Point2, Point2) {
        (self.a, self.b)
    }

    /// Returns the length of one flank line.
    #[must_use]
    pub fn flank_length(&self) -> f64 {
        self.l
    }

    fn base_distance(&self, p0: Point2) -> f64 {
        p0.coords.norm() - self.base_radius
    }

    fn flank_distance(&self, p0: Point2) -> f64 {
        signed_line_offset(p0, self.a, &self.u)
    }

    fn nose_distance(&self, p0: Point2) -> f64 {
        (p0 - Point2::new(0.0, self.distance)).norm() - self.nose_radius
    }
}

impl Sdf2 for FlatFlankCam {
    fn evaluate(&self, p: Point2) -> f64 {
        let p0 = Point2::new(p.x.abs(), p.y);
        let t = (p0 - self.a).dot(&self.u);
        if t < 0.0 {
            self.base_distance(p0)
        } else if t <= self.l {
            self.flank_distance(p0)
        } else {
            self.nose_distance(p0)
        }
    }

    fn bounding_box(&self) -> Box2 {
        self.bb
    }
}

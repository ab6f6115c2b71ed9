use tracing::trace;

use crate::error::{require_positive, GeometryError, Result};
use crate::math::{Box2, Point2, TOLERANCE};
use crate::sdf::Sdf2;

/// A cam made from a base circle, a nose circle and circular flank arcs.
///
/// The base circle is centred on the origin and the nose circle on the
/// positive y axis. Each flank arc is internally tangent to both circles.
/// Only the +x flank is stored; the other is its mirror image.
#[derive(Debug, Clone)]
pub struct ThreeArcCam {
    distance: f64,
    base_radius: f64,
    nose_radius: f64,
    flank_radius: f64,
    /// Centre of the +x flank arc, always on the -x side.
    flank_center: Point2,
    /// Angle about `flank_center` where the flank meets the base circle.
    theta_base: f64,
    /// Angle about `flank_center` where the flank meets the nose circle.
    theta_nose: f64,
    bb: Box2,
}

impl ThreeArcCam {
    /// Creates a three-arc cam.
    ///
    /// # Arguments
    ///
    /// * `distance` - Centre to centre distance of the base and nose circles
    /// * `base_radius` - Radius of the base circle
    /// * `nose_radius` - Radius of the nose circle
    /// * `flank_radius` - Radius of the flank arcs
    ///
    /// # Errors
    ///
    /// Returns an error if any argument is non-positive, the flank radius
    /// does not exceed both circle radii, or no flank arc can touch both
    /// circles.
    pub fn new(distance: f64, base_radius: f64, nose_radius: f64, flank_radius: f64) -> Result<Self> {
        require_positive("distance", distance)?;
        require_positive("base_radius", base_radius)?;
        require_positive("nose_radius", nose_radius)?;
        require_positive("flank_radius", flank_radius)?;
        if flank_radius <= base_radius.max(nose_radius) {
            return Err(GeometryError::Degenerate(format!(
                "flank_radius = {flank_radius} must exceed base_radius = {base_radius} and nose_radius = {nose_radius}"
            ))
            .into());
        }

        // The flank centre is r0 from the base centre and r1 from the nose
        // centre. Take the -x intersection so the arc bulges towards +x.
        let r0 = flank_radius - base_radius;
        let r1 = flank_radius - nose_radius;
        let y = (r0 * r0 - r1 * r1 + distance * distance) / (2.0 * distance);
        let x = (r0 * r0 - y * y).max(0.0).sqrt();
        if x <= TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "flank_radius = {flank_radius} cannot touch both circles at distance = {distance}"
            ))
            .into());
        }
        let flank_center = Point2::new(-x, y);

        let to_base = Point2::origin() - flank_center;
        let to_nose = Point2::new(0.0, distance) - flank_center;
        let theta_base = to_base.y.atan2(to_base.x);
        let theta_nose = to_nose.y.atan2(to_nose.x);
        trace!(?flank_center, theta_base, theta_nose, "three arc cam");

        Ok(Self {
            distance,
            base_radius,
            nose_radius,
            flank_radius,
            flank_center,
            theta_base,
            theta_nose,
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

    /// Returns the flank arc radius.
    #[must_use]
    pub fn flank_radius(&self) -> f64 {
        self.flank_radius
    }

    /// Returns the centre of the +x flank arc.
    #[must_use]
    pub fn flank_center(&self) -> Point2 {
        self.flank_center
    }

    /// Returns the angles about the flank centre where the flank meets the
    /// base and nose circles.
    #[must_use]
    pub fn flank_angles(&self) -> (f64, f64) {
        (self.theta_base, self.theta_nose)
    }

    fn base_distance(&self, p0: Point2) -> f64 {
        p0.coords.norm() - self.base_radius
    }

    fn flank_distance(&self, p0: Point2) -> f64 {
        (p0 - self.flank_center).norm() - self.flank_radius
    }

    fn nose_distance(&self, p0: Point2) -> f64 {
        (p0 - Point2::new(0.0, self.distance)).norm() - self.nose_radius
    }
}

impl Sdf2 for ThreeArcCam {
    fn evaluate(&self, p: Point2) -> f64 {
        // p0.x >= 0 > flank_center.x keeps atan2 inside (-pi/2, pi/2).
        let p0 = Point2::new(p.x.abs(), p.y);
        let v = p0 - self.flank_center;
        let t = v.y.atan2(v.x);
        if t < self.theta_base {
            self.base_distance(p0)
        } else if t > self.theta_nose {
            self.nose_distance(p0)
        } else {
            self.flank_distance(p0)
        }
    }

    fn bounding_box(&self) -> Box2 {
        self.bb
    }
}

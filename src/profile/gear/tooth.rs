use tracing::trace;

use crate::error::{require_positive, GeometryError, Result};
use crate::math::{rotate, Point2, PI};
use crate::profile::involute;
use crate::sdf::PolygonSdf2;

/// Builds the polygon for a single involute tooth.
///
/// The tooth points along +x and is symmetric about the x axis. The
/// polygon is a wedge: the lower flank from root to tip, the mirrored upper
/// flank from tip to root, then the origin.
pub struct MakeGearTooth {
    number_teeth: usize,
    gear_module: f64,
    root_radius: f64,
    base_radius: f64,
    outer_radius: f64,
    backlash: f64,
    facets: usize,
}

impl MakeGearTooth {
    /// Creates a new `MakeGearTooth` operation.
    ///
    /// * `gear_module` - Pitch circle diameter divided by the number of teeth.
    /// * `backlash` - Backlash as a length along the pitch circle.
    /// * `facets` - Number of straight segments per involute flank.
    #[must_use]
    pub fn new(
        number_teeth: usize,
        gear_module: f64,
        root_radius: f64,
        base_radius: f64,
        outer_radius: f64,
        backlash: f64,
        facets: usize,
    ) -> Self {
        Self {
            number_teeth,
            gear_module,
            root_radius,
            base_radius,
            outer_radius,
            backlash,
            facets,
        }
    }

    /// Executes the operation, returning the tooth polygon with
    /// `2 * (facets + 1) + 1` vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no teeth or facets, the module or base
    /// radius is non-positive, or the outer radius lies inside the base
    /// circle.
    pub fn execute(&self) -> Result<PolygonSdf2> {
        if self.number_teeth == 0 {
            return Err(GeometryError::Degenerate("gear needs at least one tooth".into()).into());
        }
        if self.facets == 0 {
            return Err(GeometryError::Degenerate("tooth flank needs at least one facet".into()).into());
        }
        require_positive("gear_module", self.gear_module)?;
        require_positive("base_radius", self.base_radius)?;
        if self.outer_radius < self.base_radius {
            return Err(GeometryError::Degenerate(format!(
                "outer_radius = {} lies inside base_radius = {}",
                self.outer_radius, self.base_radius
            ))
            .into());
        }

        #[allow(clippy::cast_precision_loss)]
        let n = self.number_teeth as f64;
        let pitch_radius = n * self.gear_module / 2.0;

        // Angular half-width of the tooth, measured from where the involute
        // leaves the base circle to where it crosses the pitch circle.
        let pitch_point = involute::point(
            self.base_radius,
            involute::angle(self.base_radius, pitch_radius.max(self.base_radius)),
        );
        let face_angle = pitch_point.y.atan2(pitch_point.x);
        let backlash_angle = self.backlash / (2.0 * pitch_radius);
        let center_angle = PI / (2.0 * n) + face_angle - backlash_angle;

        let start_angle = involute::angle(self.base_radius, self.base_radius.max(self.root_radius));
        let stop_angle = involute::angle(self.base_radius, self.outer_radius);
        #[allow(clippy::cast_precision_loss)]
        let dtheta = (stop_angle - start_angle) / self.facets as f64;
        trace!(center_angle, start_angle, stop_angle, "gear tooth");

        let mut v = Vec::with_capacity(2 * (self.facets + 1) + 1);

        // lower flank
        for i in 0..=self.facets {
            #[allow(clippy::cast_precision_loss)]
            let angle = start_angle + dtheta * i as f64;
            v.push(rotate(involute::point(self.base_radius, angle), -center_angle));
        }

        // upper flank, reversed so the outline keeps its winding
        for i in (0..=self.facets).rev() {
            let p = v[i];
            v.push(Point2::new(p.x, -p.y));
        }

        v.push(Point2::origin());

        PolygonSdf2::new(v)
    }
}

mod tooth;

pub use tooth::MakeGearTooth;

use tracing::debug;

use crate::error::{require_positive, DesignError, GeometryError, Result};
use crate::math::{Box2, Point2, PI, TAU};
use crate::sdf::{CircleSdf2, DifferenceSdf2, RotateSdf2, Sdf2, UnionSdf2};

/// Design parameters for an involute spur gear.
#[derive(Debug, Clone, Copy)]
pub struct InvoluteGearParams {
    /// Number of teeth.
    pub number_teeth: usize,
    /// Pitch circle diameter divided by the number of teeth.
    pub gear_module: f64,
    /// Pressure angle in radians.
    pub pressure_angle: f64,
    /// Backlash as a length along the pitch circle.
    pub backlash: f64,
    /// Extra root depth below the standard dedendum.
    pub clearance: f64,
    /// Wall thickness of the gear body, measured inward from the root circle.
    pub ring_width: f64,
    /// Number of straight segments per involute flank.
    pub facets: usize,
}

impl Default for InvoluteGearParams {
    fn default() -> Self {
        Self {
            number_teeth: 20,
            gear_module: 1.0,
            pressure_angle: 20.0_f64.to_radians(),
            backlash: 0.0,
            clearance: 0.0,
            ring_width: 1.0,
            facets: 16,
        }
    }
}

/// Radii derived from [`InvoluteGearParams`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearGeometry {
    pub pitch_radius: f64,
    pub base_radius: f64,
    pub outer_radius: f64,
    pub root_radius: f64,
    pub ring_radius: f64,
}

impl GearGeometry {
    /// Derives the gear radii.
    ///
    /// The addendum equals the module and the dedendum is the addendum plus
    /// the clearance.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no teeth, the module is non-positive,
    /// the pressure angle is outside `(0, pi/2)`, the root circle collapses,
    /// or the ring is wider than the root radius.
    pub fn new(params: &InvoluteGearParams) -> Result<Self> {
        if params.number_teeth == 0 {
            return Err(GeometryError::Degenerate("gear needs at least one tooth".into()).into());
        }
        require_positive("gear_module", params.gear_module)?;
        if !(params.pressure_angle > 0.0 && params.pressure_angle < PI / 2.0) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "pressure_angle",
                value: params.pressure_angle,
                min: 0.0,
                max: PI / 2.0,
            }
            .into());
        }

        #[allow(clippy::cast_precision_loss)]
        let pitch_radius = params.number_teeth as f64 * params.gear_module / 2.0;
        let base_radius = pitch_radius * params.pressure_angle.cos();
        let addendum = params.gear_module;
        let dedendum = addendum + params.clearance;
        let outer_radius = pitch_radius + addendum;
        let root_radius = pitch_radius - dedendum;
        if root_radius <= 0.0 {
            return Err(DesignError::DerivedNonPositive {
                parameter: "root_radius",
                value: root_radius,
            }
            .into());
        }
        if !(params.ring_width >= 0.0 && params.ring_width <= root_radius) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "ring_width",
                value: params.ring_width,
                min: 0.0,
                max: root_radius,
            }
            .into());
        }
        let ring_radius = root_radius - params.ring_width;

        Ok(Self {
            pitch_radius,
            base_radius,
            outer_radius,
            root_radius,
            ring_radius,
        })
    }
}

/// A complete involute spur gear centred on the origin.
pub struct InvoluteGear {
    geometry: GearGeometry,
    number_teeth: usize,
    sdf: DifferenceSdf2,
}

impl InvoluteGear {
    /// Returns the derived radii.
    #[must_use]
    pub fn geometry(&self) -> &GearGeometry {
        &self.geometry
    }

    /// Returns the number of teeth.
    #[must_use]
    pub fn number_teeth(&self) -> usize {
        self.number_teeth
    }
}

impl Sdf2 for InvoluteGear {
    fn evaluate(&self, p: Point2) -> f64 {
        self.sdf.evaluate(p)
    }

    fn bounding_box(&self) -> Box2 {
        self.sdf.bounding_box()
    }
}

/// Builds an involute spur gear: the teeth and root disk, minus the bore.
pub struct MakeGear {
    params: InvoluteGearParams,
}

impl MakeGear {
    /// Creates a new `MakeGear` operation.
    #[must_use]
    pub fn new(params: InvoluteGearParams) -> Self {
        Self { params }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters do not describe a valid gear.
    pub fn execute(&self) -> Result<InvoluteGear> {
        let p = &self.params;
        let geometry = GearGeometry::new(p)?;
        debug!(
            number_teeth = p.number_teeth,
            pitch_radius = geometry.pitch_radius,
            base_radius = geometry.base_radius,
            outer_radius = geometry.outer_radius,
            root_radius = geometry.root_radius,
            ring_radius = geometry.ring_radius,
            "derived gear geometry"
        );

        let tooth = MakeGearTooth::new(
            p.number_teeth,
            p.gear_module,
            geometry.root_radius,
            geometry.base_radius,
            geometry.outer_radius,
            p.backlash,
            p.facets,
        )
        .execute()?;

        // Teeth and root must be merged before the bore is cut.
        #[allow(clippy::cast_precision_loss)]
        let teeth = RotateSdf2::new(Box::new(tooth), p.number_teeth, TAU / p.number_teeth as f64)?;
        let body = UnionSdf2::pair(Box::new(teeth), Box::new(CircleSdf2::new(geometry.root_radius)));
        let sdf = DifferenceSdf2::new(Box::new(body), Box::new(CircleSdf2::new(geometry.ring_radius)));

        Ok(InvoluteGear {
            geometry,
            number_teeth: p.number_teeth,
            sdf,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::ProfileError;

    fn params() -> InvoluteGearParams {
        InvoluteGearParams {
            number_teeth: 20,
            gear_module: 2.0,
            ring_width: 3.0,
            ..InvoluteGearParams::default()
        }
    }

    fn polar(r: f64, a: f64) -> Point2 {
        Point2::new(r * a.cos(), r * a.sin())
    }

    #[test]
    fn derived_radii() {
        let g = GearGeometry::new(&params()).unwrap();
        assert_abs_diff_eq!(g.pitch_radius, 20.0);
        assert_abs_diff_eq!(g.base_radius, 20.0 * 20.0_f64.to_radians().cos(), epsilon = 1e-12);
        assert_abs_diff_eq!(g.outer_radius, 22.0);
        assert_abs_diff_eq!(g.root_radius, 18.0);
        assert_abs_diff_eq!(g.ring_radius, 15.0);
    }

    #[test]
    fn clearance_deepens_root() {
        let g = GearGeometry::new(&InvoluteGearParams {
            clearance: 0.5,
            ..params()
        })
        .unwrap();
        assert_abs_diff_eq!(g.root_radius, 17.5);
        assert_abs_diff_eq!(g.ring_radius, 14.5);
    }

    #[test]
    fn regions() {
        let gear = MakeGear::new(params()).execute().unwrap();
        // Bore.
        assert_abs_diff_eq!(gear.evaluate(Point2::origin()), 15.0, epsilon = 1e-12);
        // Body wall between bore and root.
        assert_abs_diff_eq!(gear.evaluate(polar(16.5, -PI / 2.0 + PI / 20.0)), -1.5, epsilon = 1e-12);
        // Tooth at angle zero, and every other tooth.
        for k in 0..20_u32 {
            let a = TAU * f64::from(k) / 20.0;
            assert!(gear.evaluate(polar(20.0, a)) < 0.0, "tooth {k}");
            assert!(gear.evaluate(polar(20.0, a + PI / 20.0)) > 0.0, "gap {k}");
        }
        // Well outside the tips.
        assert!(gear.evaluate(Point2::new(0.0, 30.0)) > 7.0);
    }

    #[test]
    fn mirror_symmetric() {
        let gear = MakeGear::new(params()).execute().unwrap();
        for (x, y) in [(19.0, 3.0), (21.5, 0.7), (5.0, 16.2), (-12.0, 14.5)] {
            let d = gear.evaluate(Point2::new(x, y));
            assert_abs_diff_eq!(d, gear.evaluate(Point2::new(x, -y)), epsilon = 1e-9);
            // Even tooth count is also symmetric about the y axis.
            assert_abs_diff_eq!(d, gear.evaluate(Point2::new(-x, y)), epsilon = 1e-9);
        }
    }

    #[test]
    fn bounding_box_covers_tips() {
        let bb = MakeGear::new(params()).execute().unwrap().bounding_box();
        for v in [bb.max.x, bb.max.y, -bb.min.x, -bb.min.y] {
            assert!(v > 21.5 && v < 23.0, "{v}");
        }
    }

    #[test]
    fn solid_gear_without_bore() {
        let gear = MakeGear::new(InvoluteGearParams {
            ring_width: 18.0,
            ..params()
        })
        .execute()
        .unwrap();
        assert_abs_diff_eq!(gear.geometry().ring_radius, 0.0);
        assert!(gear.evaluate(Point2::new(1.0, 1.0)) < 0.0);
    }

    #[test]
    fn rejects_invalid_params() {
        let bad = [
            InvoluteGearParams { number_teeth: 0, ..params() },
            InvoluteGearParams { gear_module: -1.0, ..params() },
            InvoluteGearParams { pressure_angle: 0.0, ..params() },
            InvoluteGearParams { ring_width: 20.0, ..params() },
            InvoluteGearParams { ring_width: -1.0, ..params() },
        ];
        for p in bad {
            assert!(MakeGear::new(p).execute().is_err(), "{p:?}");
        }
        // Two teeth of module 2 leave no room below the pitch circle.
        let err = MakeGear::new(InvoluteGearParams {
            number_teeth: 2,
            ..params()
        })
        .execute()
        .err()
        .unwrap();
        assert!(matches!(
            err,
            ProfileError::Design(DesignError::DerivedNonPositive { parameter: "root_radius", .. })
        ));
    }
}

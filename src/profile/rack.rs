use tracing::debug;

use crate::error::{require_positive, GeometryError, Result};
use crate::math::{sawtooth, Box2, Point2, PI};
use crate::sdf::{PolygonSdf2, Sdf2};

/// Design parameters for a straight gear rack.
#[derive(Debug, Clone, Copy)]
pub struct GearRackParams {
    /// Number of teeth; only sets the rack length, so fractions are allowed.
    pub number_teeth: f64,
    /// Module of the mating gear.
    pub gear_module: f64,
    /// Pressure angle in radians.
    pub pressure_angle: f64,
    /// Backlash as a length along the pitch line.
    pub backlash: f64,
    /// Height of the solid base below the teeth.
    pub base_height: f64,
}

impl Default for GearRackParams {
    fn default() -> Self {
        Self {
            number_teeth: 10.0,
            gear_module: 1.0,
            pressure_angle: 20.0_f64.to_radians(),
            backlash: 0.0,
            base_height: 1.0,
        }
    }
}

/// A straight involute gear rack lying along the x axis, teeth pointing +y.
///
/// The profile repeats with period `pitch` and is cut to `[-length, length]`.
#[derive(Debug, Clone)]
pub struct GearRack {
    tooth: PolygonSdf2,
    pitch: f64,
    length: f64,
    bb: Box2,
}

impl GearRack {
    /// Creates a gear rack.
    ///
    /// # Errors
    ///
    /// Returns an error if the tooth count or module is non-positive, the
    /// base height is negative, the pressure angle is outside `(0, pi/2)`,
    /// or the backlash leaves no tooth tip.
    pub fn new(params: &GearRackParams) -> Result<Self> {
        require_positive("number_teeth", params.number_teeth)?;
        require_positive("gear_module", params.gear_module)?;
        if !(params.base_height >= 0.0) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "base_height",
                value: params.base_height,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        if !(params.pressure_angle > 0.0 && params.pressure_angle < PI / 2.0) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "pressure_angle",
                value: params.pressure_angle,
                min: 0.0,
                max: PI / 2.0,
            }
            .into());
        }

        let addendum = params.gear_module;
        let dedendum = params.gear_module * 1.25;
        let base_height = params.base_height;
        let tooth_height = base_height + addendum + dedendum;
        let pitch = params.gear_module * PI;

        // x run of a flank
        let dx = (addendum + dedendum) * params.pressure_angle.tan();
        // half width of the tooth top
        let dxt = (pitch / 2.0 - dx) / 2.0;
        let bl = params.backlash / 2.0;
        if dxt - bl <= 0.0 {
            return Err(GeometryError::Degenerate(format!(
                "rack tooth has no tip: half top width {dxt} with backlash {}",
                params.backlash
            ))
            .into());
        }

        // Half a tooth around the y axis, padded out to a full pitch either
        // side so the folded domain never sees the polygon ends.
        let tooth = PolygonSdf2::new(vec![
            Point2::new(pitch, 0.0),
            Point2::new(pitch, base_height),
            Point2::new(dx + dxt - bl, base_height),
            Point2::new(dxt - bl, tooth_height),
            Point2::new(-pitch, tooth_height),
            Point2::new(-pitch, 0.0),
        ])?;

        let length = pitch * params.number_teeth / 2.0;
        debug!(pitch, half_length = length, tooth_height, "derived gear rack");

        Ok(Self {
            tooth,
            pitch,
            length,
            bb: Box2::new(Point2::new(-length, 0.0), Point2::new(length, tooth_height)),
        })
    }

    /// Returns the tooth to tooth pitch along the x axis.
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Returns half the total rack length.
    #[must_use]
    pub fn half_length(&self) -> f64 {
        self.length
    }
}

impl Sdf2 for GearRack {
    fn evaluate(&self, p: Point2) -> f64 {
        let p0 = Point2::new(sawtooth(p.x, self.pitch).abs(), p.y);
        let d0 = self.tooth.evaluate(p0);
        // Cut the infinite rack to its length.
        let d1 = p.x.abs() - self.length;
        d0.max(d1)
    }

    fn bounding_box(&self) -> Box2 {
        self.bb
    }
}

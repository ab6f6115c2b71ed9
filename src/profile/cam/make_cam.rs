use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{require_positive, DesignError, GeometryError, ProfileError, Result};
use crate::math::PI;

use super::{CamProfile, FlatFlankCam};

/// The cam construction to derive from design parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CamType {
    /// Straight flanks tangent to base and nose circles.
    FlatFlank,
    /// Circular flank arcs tangent to base and nose circles.
    ThreeArc,
}

impl FromStr for CamType {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "flat_flank" => Ok(Self::FlatFlank),
            "three_arc" => Ok(Self::ThreeArc),
            other => Err(DesignError::UnknownCamType(other.to_owned()).into()),
        }
    }
}

impl fmt::Display for CamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FlatFlank => "flat_flank",
            Self::ThreeArc => "three_arc",
        })
    }
}

/// Derives a cam profile from follower design intent.
///
/// The base circle is sized so the cam sweeps at most `max_diameter`, and
/// the nose is shaped so the follower rises by `lift` over `duration`
/// radians of rotation.
pub struct MakeCam {
    cam_type: CamType,
    lift: f64,
    duration: f64,
    max_diameter: f64,
}

impl MakeCam {
    /// Creates a new `MakeCam` operation.
    ///
    /// * `lift` - Follower lift above the base circle.
    /// * `duration` - Rotation angle in radians over which the follower is lifted.
    /// * `max_diameter` - Maximum diameter swept by the cam.
    #[must_use]
    pub fn new(cam_type: CamType, lift: f64, duration: f64, max_diameter: f64) -> Self {
        Self {
            cam_type,
            lift,
            duration,
            max_diameter,
        }
    }

    /// Executes the operation, returning the derived profile.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_diameter` or `lift` is non-positive,
    /// `duration` is outside `(0, pi)`, the derived base or nose radius is
    /// non-positive, or the three-arc construction is requested (it has no
    /// closed-form derivation from these inputs).
    pub fn execute(&self) -> Result<CamProfile> {
        require_positive("max_diameter", self.max_diameter)?;
        require_positive("lift", self.lift)?;
        if !(self.duration > 0.0 && self.duration < PI) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "duration",
                value: self.duration,
                min: 0.0,
                max: PI,
            }
            .into());
        }

        let base_radius = self.max_diameter / 2.0 - self.lift;
        if base_radius <= 0.0 {
            return Err(DesignError::DerivedNonPositive {
                parameter: "base_radius",
                value: base_radius,
            }
            .into());
        }

        match self.cam_type {
            CamType::FlatFlank => self.flat_flank(base_radius),
            CamType::ThreeArc => Err(DesignError::NotImplemented("three_arc cam design").into()),
        }
    }

    fn flat_flank(&self, base_radius: f64) -> Result<CamProfile> {
        // The flank leaves the base circle `delta` either side of the nose
        // axis, which fixes sin(phi) = (rb - rn) / d = cos(delta).
        let delta = self.duration / 2.0;
        let c = delta.cos();
        let nose_radius = base_radius - (self.lift * c) / (1.0 - c);
        if nose_radius <= 0.0 {
            return Err(DesignError::DerivedNonPositive {
                parameter: "nose_radius",
                value: nose_radius,
            }
            .into());
        }
        let distance = base_radius + self.lift - nose_radius;
        debug!(
            cam_type = %self.cam_type,
            base_radius,
            nose_radius,
            distance,
            "derived cam profile"
        );
        Ok(FlatFlankCam::new(distance, base_radius, nose_radius)?.into())
    }
}

mod flat_flank;
mod make_cam;
mod three_arc;

pub use flat_flank::FlatFlankCam;
pub use make_cam::{CamType, MakeCam};
pub use three_arc::ThreeArcCam;

use crate::math::{Box2, Point2};
use crate::sdf::Sdf2;

/// Any of the supported cam profiles.
#[derive(Debug, Clone)]
pub enum CamProfile {
    FlatFlank(FlatFlankCam),
    ThreeArc(ThreeArcCam),
}

impl CamProfile {
    /// Returns the base circle radius.
    #[must_use]
    pub fn base_radius(&self) -> f64 {
        match self {
            Self::FlatFlank(c) => c.base_radius(),
            Self::ThreeArc(c) => c.base_radius(),
        }
    }

    /// Returns the nose circle radius.
    #[must_use]
    pub fn nose_radius(&self) -> f64 {
        match self {
            Self::FlatFlank(c) => c.nose_radius(),
            Self::ThreeArc(c) => c.nose_radius(),
        }
    }

    /// Returns the centre to centre distance.
    #[must_use]
    pub fn distance(&self) -> f64 {
        match self {
            Self::FlatFlank(c) => c.distance(),
            Self::ThreeArc(c) => c.distance(),
        }
    }

    /// Returns the follower lift: the nose tip height above the base circle.
    #[must_use]
    pub fn lift(&self) -> f64 {
        self.distance() + self.nose_radius() - self.base_radius()
    }
}

impl Sdf2 for CamProfile {
    fn evaluate(&self, p: Point2) -> f64 {
        match self {
            Self::FlatFlank(c) => c.evaluate(p),
            Self::ThreeArc(c) => c.evaluate(p),
        }
    }

    fn bounding_box(&self) -> Box2 {
        match self {
            Self::FlatFlank(c) => c.bounding_box(),
            Self::ThreeArc(c) => c.bounding_box(),
        }
    }
}

impl From<FlatFlankCam> for CamProfile {
    fn from(cam: FlatFlankCam) -> Self {
        Self::FlatFlank(cam)
    }
}

impl From<ThreeArcCam> for CamProfile {
    fn from(cam: ThreeArcCam) -> Self {
        Self::ThreeArc(cam)
    }
}

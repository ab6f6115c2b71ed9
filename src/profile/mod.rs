//! Mechanical profile curves: cams, involute gears and gear racks.
//!
//! Every profile is immutable once built and implements [`Sdf2`](crate::sdf::Sdf2).

pub mod cam;
pub mod gear;
pub mod involute;
pub mod rack;

pub use cam::{CamProfile, CamType, FlatFlankCam, MakeCam, ThreeArcCam};
pub use gear::{GearGeometry, InvoluteGear, InvoluteGearParams, MakeGear, MakeGearTooth};
pub use rack::{GearRack, GearRackParams};

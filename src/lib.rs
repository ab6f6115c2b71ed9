pub mod error;
pub mod math;
pub mod profile;
pub mod sdf;

pub use error::{ProfileError, Result};
pub use sdf::Sdf2;

use thiserror::Error;

/// Top-level error type for profile construction.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Design(#[from] DesignError),
}

/// Errors raised while building a profile from explicit geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{parameter} = {value} must be positive")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("parameter {parameter} = {value} is out of range ({min}, {max})")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors raised while deriving a profile from design intent.
#[derive(Debug, Error)]
pub enum DesignError {
    #[error("derived {parameter} = {value} must be positive")]
    DerivedNonPositive { parameter: &'static str, value: f64 },

    #[error("unknown cam_type: {0:?}")]
    UnknownCamType(String),

    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
}

/// Convenience type alias for results using [`ProfileError`].
pub type Result<T> = std::result::Result<T, ProfileError>;

/// Fails with [`GeometryError::NonPositive`] unless `value > 0`.
pub(crate) fn require_positive(parameter: &'static str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::NonPositive { parameter, value }.into())
    }
}

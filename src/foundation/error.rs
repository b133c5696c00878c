/// Convenience result type used across sheetmotion.
pub type MotionResult<T> = Result<T, MotionError>;

/// Error taxonomy for the fallible edges of the crate.
///
/// The presentation and transition operations themselves never fail; errors only
/// surface while validating configuration, animation parameters or replay traces.
#[derive(thiserror::Error, Debug)]
pub enum MotionError {
    /// Invalid user-provided configuration or trace data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid animation parameters (durations, spring coefficients).
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotionError {
    /// Build a [`MotionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MotionError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`MotionError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for MotionError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

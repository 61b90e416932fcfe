/// Convenience result type used across matrixfx.
pub type MatrixFxResult<T> = Result<T, MatrixFxError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Empty text and out-of-canvas coordinates are never errors: effects degrade or clip instead.
#[derive(thiserror::Error, Debug)]
pub enum MatrixFxError {
    /// Invalid user-provided parameters or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// A canvas sink failed to present or persist a frame.
    #[error("sink error: {0}")]
    Sink(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MatrixFxError {
    /// Build a [`MatrixFxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MatrixFxError::Sink`] value.
    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink(msg.into())
    }

    /// Build a [`MatrixFxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

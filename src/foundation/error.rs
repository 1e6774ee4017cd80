/// Convenience result type used across inkframe.
pub type InkResult<T> = Result<T, InkError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Out-of-bounds drawing and unsupported glyphs are deliberately absent: both are handled by
/// silent clipping and blank substitution, never by an error value.
#[derive(thiserror::Error, Debug)]
pub enum InkError {
    /// A frame or scratch buffer could not be obtained.
    #[error("allocation error: could not obtain {bytes} byte buffer")]
    Allocation {
        /// Requested buffer size in bytes.
        bytes: usize,
    },

    /// A supplied packed frame is shorter than the display requires.
    #[error("size mismatch: expected at least {expected} bytes, got {actual}")]
    SizeMismatch {
        /// Packed size required by the canvas.
        expected: usize,
        /// Size actually supplied.
        actual: usize,
    },

    /// Invalid user-provided geometry, configuration, or input data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// IO failure in a sink or loader.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InkError {
    /// Build a [`InkError::Allocation`] value.
    pub fn allocation(bytes: usize) -> Self {
        Self::Allocation { bytes }
    }

    /// Build a [`InkError::SizeMismatch`] value.
    pub fn size_mismatch(expected: usize, actual: usize) -> Self {
        Self::SizeMismatch { expected, actual }
    }

    /// Build a [`InkError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`InkError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether a caller may degrade to a simpler render instead of giving up.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Allocation { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

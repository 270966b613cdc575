/// Result alias for every fallible flipdot call.
pub type FlipdotResult<T> = Result<T, FlipdotError>;

/// Why a flipdot operation failed.
#[derive(thiserror::Error, Debug)]
pub enum FlipdotError {
    /// A grid, show, preview style or shape parameter is out of range.
    #[error("validation error: {0}")]
    Validation(String),

    /// An animation was handed a canvas it cannot draw on.
    #[error("animation error: {0}")]
    Animation(String),

    /// A bit string or PNG could not be encoded or decoded.
    #[error("codec error: {0}")]
    Codec(String),

    /// A show file is not valid JSON for the show schema.
    #[error("serialization error: {0}")]
    Serde(String),

    /// File system failures and other errors carried with `anyhow` context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlipdotError {
    /// Shorthand for [`FlipdotError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Shorthand for [`FlipdotError::Animation`].
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Shorthand for [`FlipdotError::Codec`].
    pub fn codec(msg: impl Into<String>) -> Self {
        Self::Codec(msg.into())
    }

    /// Shorthand for [`FlipdotError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

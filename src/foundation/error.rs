/// Result alias used across the crate.
pub type SwellResult<T> = Result<T, SwellError>;

/// Crate-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum SwellError {
    /// Invalid parameters or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed keyframes or timelines.
    #[error("animation error: {0}")]
    Animation(String),

    /// Invalid per-frame input to the scene (for example a negative delta time).
    #[error("simulation error: {0}")]
    Simulation(String),

    /// Configuration (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SwellError {
    /// Build a [`SwellError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SwellError::Animation`].
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`SwellError::Simulation`].
    pub fn simulation(msg: impl Into<String>) -> Self {
        Self::Simulation(msg.into())
    }

    /// Build a [`SwellError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

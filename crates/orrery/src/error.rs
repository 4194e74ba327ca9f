//! Error types for body construction, world mutation and configuration.

use thiserror::Error;

use crate::body::BodyId;
use crate::vector::VectorError;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the engine.
///
/// Numerical blow-ups during a tick are not errors; they are reported through
/// [`StepReport::degenerate`](crate::world::StepReport::degenerate).
#[derive(Debug, Error)]
pub enum Error {
    /// Mass must be positive and finite.
    #[error("invalid mass {mass}: must be positive and finite")]
    InvalidMass { mass: f64 },

    /// Radius must be non-negative and finite.
    #[error("invalid radius {radius}: must be non-negative and finite")]
    InvalidRadius { radius: f64 },

    /// A body with this id is already in the world.
    #[error("body {0:?} already exists")]
    DuplicateBody(BodyId),

    /// No body with this id is in the world.
    #[error("no body with id {0:?}")]
    UnknownBody(BodyId),

    /// Vector operation on a degenerate argument.
    #[error(transparent)]
    Vector(#[from] VectorError),

    /// Configuration could not be parsed.
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration parsed but holds an unusable value.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Create an invalid config error.
    #[must_use]
    pub fn invalid_config(details: impl Into<String>) -> Self {
        Self::InvalidConfig(details.into())
    }
}

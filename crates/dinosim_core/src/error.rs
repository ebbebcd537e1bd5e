//! Error types for the simulation core.
//!
//! A [`SimError`] aborts the update of a single entity; the tick carries on
//! with the rest of the world.

use thiserror::Error;

/// Main error type for simulation core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// An entity was told to move but has no positive speed.
    #[error("entity lacks a speed (speed = {speed}): {entity}")]
    MissingSpeed {
        speed: f64,
        /// Debug rendering of the offending entity.
        entity: String,
    },
}

/// Result type alias for simulation core operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    /// Creates a new missing-speed error from anything debug-printable.
    #[must_use]
    pub fn missing_speed<E: std::fmt::Debug>(speed: f64, entity: &E) -> Self {
        Self::MissingSpeed {
            speed,
            entity: format!("{entity:?}"),
        }
    }
}

//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Transport mode label not offered by the selector
    #[error("Unknown transport mode: {0}")]
    UnknownTransportMode(String),

    /// Coordinates outside latitude [-90, 90] or longitude [-180, 180]
    #[error("Invalid coordinates: {latitude}, {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
}

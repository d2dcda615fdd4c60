//! Configuration errors
//!
//! The simulation itself has no runtime failures. Everything that can go wrong
//! is a bad configuration, and it is caught before a round can start.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("food catalog is empty")]
    EmptyCatalog,
    #[error("lane count must be at least 1")]
    ZeroLanes,
    #[error("round duration must be at least 1 second")]
    ZeroRoundDuration,
    #[error("{name} must be greater than zero")]
    ZeroInterval { name: &'static str },
    #[error("invalid fall speed range [{min}, {max}]")]
    InvalidFallSpeed { min: f32, max: f32 },
    #[error("invalid playfield geometry: {name}")]
    InvalidGeometry { name: &'static str },
    #[error("initial lane {lane} outside [0, {lanes})")]
    InitialLaneOutOfRange { lane: usize, lanes: usize },
    /// Kept as text so the error stays comparable
    #[error("config parse error: {0}")]
    Parse(String),
}

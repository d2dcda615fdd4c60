//! Round configuration
//!
//! Every constant the renderer and the simulation must agree on, as one
//! serializable value. Defaults come from [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Fixed round configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of lanes
    pub lanes: usize,
    /// Round length in whole seconds
    pub round_secs: u32,

    // === Cadences ===
    pub spawn_interval_ms: u64,
    pub countdown_interval_ms: u64,
    pub tick_interval_ms: u64,

    // === Falling items ===
    /// Slowest fall speed (units per tick)
    pub min_fall_speed: f32,
    /// Fastest fall speed (units per tick)
    pub max_fall_speed: f32,

    // === Geometry ===
    pub playfield_height: f32,
    pub item_size: f32,
    pub catch_zone_height: f32,

    // === Presentation hints ===
    /// Display window for the last score delta
    pub score_pulse_ms: u64,

    /// Lane the catcher is placed in at round start
    pub initial_lane: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            lanes: LANES,
            round_secs: ROUND_SECS,

            spawn_interval_ms: SPAWN_INTERVAL_MS,
            countdown_interval_ms: COUNTDOWN_INTERVAL_MS,
            tick_interval_ms: TICK_INTERVAL_MS,

            min_fall_speed: MIN_FALL_SPEED,
            max_fall_speed: MAX_FALL_SPEED,

            playfield_height: PLAYFIELD_HEIGHT,
            item_size: ITEM_SIZE,
            catch_zone_height: CATCH_ZONE_HEIGHT,

            score_pulse_ms: SCORE_PULSE_MS,

            initial_lane: INITIAL_LANE,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check all invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lanes == 0 {
            return Err(ConfigError::ZeroLanes);
        }
        if self.round_secs == 0 {
            return Err(ConfigError::ZeroRoundDuration);
        }

        for (name, value) in [
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("countdown_interval_ms", self.countdown_interval_ms),
            ("tick_interval_ms", self.tick_interval_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroInterval { name });
            }
        }

        let (min, max) = (self.min_fall_speed, self.max_fall_speed);
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || min > max {
            return Err(ConfigError::InvalidFallSpeed { min, max });
        }

        for (name, value) in [
            ("playfield_height", self.playfield_height),
            ("item_size", self.item_size),
            ("catch_zone_height", self.catch_zone_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidGeometry { name });
            }
        }
        if self.catch_zone_height > self.playfield_height {
            return Err(ConfigError::InvalidGeometry {
                name: "catch_zone_height",
            });
        }

        if self.initial_lane >= self.lanes {
            return Err(ConfigError::InitialLaneOutOfRange {
                lane: self.initial_lane,
                lanes: self.lanes,
            });
        }

        Ok(())
    }

    /// Upper boundary of the catch zone
    pub fn catch_zone_top(&self) -> f32 {
        self.playfield_height - self.catch_zone_height
    }

    /// Spawn height: the item sits fully above the visible playfield
    pub fn spawn_position(&self) -> f32 {
        -self.item_size
    }
}

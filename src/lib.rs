//! Healthy Catch - A lane-based food catching arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, falling, catching, round state)
//! - `settings`: Data-driven round configuration
//! - `error`: Configuration faults detected at startup

pub mod error;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Number of lanes items fall through
    pub const LANES: usize = 6;
    /// Round length in seconds
    pub const ROUND_SECS: u32 = 60;

    /// Spawn cadence (ms)
    pub const SPAWN_INTERVAL_MS: u64 = 1500;
    /// Countdown cadence (ms)
    pub const COUNTDOWN_INTERVAL_MS: u64 = 1000;
    /// Fast advance tick (~60 Hz)
    pub const TICK_INTERVAL_MS: u64 = 16;

    /// Fall speed range, in playfield units per tick
    pub const MIN_FALL_SPEED: f32 = 3.5;
    pub const MAX_FALL_SPEED: f32 = 6.5;

    /// Playfield dimensions
    pub const PLAYFIELD_HEIGHT: f32 = 800.0;
    pub const ITEM_SIZE: f32 = 40.0;
    /// Catcher height; the catch zone is this band at the bottom of the playfield
    pub const CATCH_ZONE_HEIGHT: f32 = 100.0;

    /// How long the last score delta stays visible (ms)
    pub const SCORE_PULSE_MS: u64 = 1000;

    /// Lane the catcher starts each round in
    pub const INITIAL_LANE: usize = 0;
}

//! Session state and core simulation types
//!
//! Everything a renderer needs to draw a frame lives in [`SessionState`].

use serde::{Deserialize, Serialize};

/// Food category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Healthy,
    Unhealthy,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Healthy => "Healthy",
            Category::Unhealthy => "Unhealthy",
        }
    }
}

/// A catalog entry (immutable once the catalog is built)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodDefinition {
    pub name: String,
    /// Display glyph for the renderer
    pub glyph: String,
    pub category: Category,
    /// Signed score effect. Healthy items are positive by convention only.
    pub points: i32,
    pub calories: u32,
}

impl FoodDefinition {
    pub fn new(
        name: impl Into<String>,
        glyph: impl Into<String>,
        category: Category,
        points: i32,
        calories: u32,
    ) -> Self {
        Self {
            name: name.into(),
            glyph: glyph.into(),
            category,
            points,
            calories,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.category == Category::Healthy
    }
}

/// An item in flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallingItem {
    pub id: u32,
    pub food: FoodDefinition,
    /// Lane in `[0, lanes)`, fixed at spawn
    pub lane: usize,
    /// Top edge; grows downward every tick
    pub y: f32,
    /// Units per tick, fixed at spawn
    pub fall_speed: f32,
}

impl FallingItem {
    /// Lower edge of the item
    pub fn bottom(&self, item_size: f32) -> f32 {
        self.y + item_size
    }
}

/// A caught item, kept for the end-of-round summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatchRecord {
    pub food: FoodDefinition,
    /// Simulated time of the catch (ms)
    pub at_ms: u64,
}

/// High-level session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Home screen, waiting for start
    #[default]
    Idle,
    /// Round in progress
    Running,
    /// Round over, showing results
    Ended,
}

/// Catcher movement intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub phase: Phase,
    pub score: i64,
    /// Whole seconds left in the round
    pub remaining_time: u32,
    pub catcher_lane: usize,
    /// Items in flight (order irrelevant)
    pub in_flight: Vec<FallingItem>,
    /// Catches since the last start, in catch order
    pub history: Vec<CatchRecord>,
    /// Presentation hint: signed value of the most recent catch, 0 when expired
    pub last_score_delta: i32,
    /// When `last_score_delta` resets to 0
    #[serde(default)]
    pub score_pulse_until_ms: Option<u64>,
    /// Simulated time of the last processed instant (ms)
    pub now_ms: u64,
    /// Next item ID
    next_id: u32,
}

impl SessionState {
    pub fn new(round_secs: u32, initial_lane: usize) -> Self {
        Self {
            phase: Phase::Idle,
            score: 0,
            remaining_time: round_secs,
            catcher_lane: initial_lane,
            in_flight: Vec::new(),
            history: Vec::new(),
            last_score_delta: 0,
            score_pulse_until_ms: None,
            now_ms: 0,
            next_id: 1,
        }
    }

    /// Allocate a new item ID (IDs stay unique across rounds)
    pub fn next_item_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset per-round values. IDs keep counting.
    pub fn reset_round(&mut self, round_secs: u32, initial_lane: usize) {
        self.score = 0;
        self.remaining_time = round_secs;
        self.catcher_lane = initial_lane;
        self.in_flight.clear();
        self.history.clear();
        self.last_score_delta = 0;
        self.score_pulse_until_ms = None;
    }

    /// Clear the score pulse once its window has passed
    pub fn expire_score_pulse(&mut self, now_ms: u64) -> bool {
        match self.score_pulse_until_ms {
            Some(until) if now_ms >= until => {
                self.last_score_delta = 0;
                self.score_pulse_until_ms = None;
                true
            }
            _ => false,
        }
    }
}

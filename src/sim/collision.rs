//! Collision detection and scoring for falling items
//!
//! Each advance builds the next generation of in-flight items directly,
//! partitioning the moved items into survivors, catches and misses.

use super::state::{CatchRecord, FallingItem, FoodDefinition, SessionState};
use crate::settings::GameConfig;

/// Where an item ends up after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fate {
    /// In the catcher's lane and touching the catch zone
    Caught,
    /// Fully below the playfield
    Missed,
    /// Still falling
    Falling,
}

/// Result of one advance step
#[derive(Debug, Clone, Default)]
pub struct AdvanceOutcome {
    pub survivors: Vec<FallingItem>,
    /// In the order the items were in flight
    pub caught: Vec<FallingItem>,
    pub missed: Vec<FallingItem>,
}

/// Classify an already-moved item.
///
/// The catch check runs first: an item that qualifies as both is caught.
pub fn classify(item: &FallingItem, catcher_lane: usize, config: &GameConfig) -> Fate {
    let in_lane = item.lane == catcher_lane;
    let touching_catcher = item.bottom(config.item_size) >= config.catch_zone_top();
    let on_screen = item.y < config.playfield_height;

    if in_lane && touching_catcher && on_screen {
        Fate::Caught
    } else if item.y >= config.playfield_height {
        Fate::Missed
    } else {
        Fate::Falling
    }
}

/// Move every item one fixed step and sort it by fate
pub fn advance(
    items: Vec<FallingItem>,
    catcher_lane: usize,
    config: &GameConfig,
) -> AdvanceOutcome {
    let mut outcome = AdvanceOutcome {
        survivors: Vec::with_capacity(items.len()),
        ..Default::default()
    };

    for mut item in items {
        item.y += item.fall_speed;
        match classify(&item, catcher_lane, config) {
            Fate::Caught => outcome.caught.push(item),
            Fate::Missed => outcome.missed.push(item),
            Fate::Falling => outcome.survivors.push(item),
        }
    }

    outcome
}

/// Apply a catch to the session: score (no floor), history, score pulse
pub fn score_catch(state: &mut SessionState, food: &FoodDefinition, now_ms: u64, pulse_ms: u64) {
    state.score += i64::from(food.points);
    state.history.push(CatchRecord {
        food: food.clone(),
        at_ms: now_ms,
    });
    state.last_score_delta = food.points;
    state.score_pulse_until_ms = Some(now_ms.saturating_add(pulse_ms));
}

/// Advance the session's in-flight items and apply every catch.
///
/// Returns how many items were caught and missed.
pub fn step(state: &mut SessionState, config: &GameConfig, now_ms: u64) -> (usize, usize) {
    let items = std::mem::take(&mut state.in_flight);
    let outcome = advance(items, state.catcher_lane, config);
    state.in_flight = outcome.survivors;

    for item in &outcome.caught {
        score_catch(state, &item.food, now_ms, config.score_pulse_ms);
        log::debug!(
            "Caught {} #{} ({:+}), score {}",
            item.food.name,
            item.id,
            item.food.points,
            state.score
        );
    }
    for item in &outcome.missed {
        log::debug!("Missed {} #{} in lane {}", item.food.name, item.id, item.lane);
    }

    (outcome.caught.len(), outcome.missed.len())
}

//! Demo autopilot
//!
//! Picks lane moves for an unattended round. It only ever produces
//! `move_lane` intents; it never touches session state.

use super::state::{Direction, FallingItem, Phase, SessionState};
use crate::settings::GameConfig;

/// Ticks until an item's lower edge reaches the catch zone
fn ticks_to_zone(item: &FallingItem, config: &GameConfig) -> f32 {
    let gap = config.catch_zone_top() - item.bottom(config.item_size);
    (gap / item.fall_speed).max(0.0)
}

/// Lane the catcher should head for: the healthy item that lands soonest.
///
/// With nothing healthy in flight, step out of the lane of the next unhealthy
/// item to land.
pub fn target_lane(state: &SessionState, config: &GameConfig) -> Option<usize> {
    let landing_order = |a: &&FallingItem, b: &&FallingItem| {
        ticks_to_zone(a, config).total_cmp(&ticks_to_zone(b, config))
    };

    if let Some(item) = state
        .in_flight
        .iter()
        .filter(|i| i.food.is_healthy())
        .min_by(landing_order)
    {
        return Some(item.lane);
    }

    let threat = state
        .in_flight
        .iter()
        .filter(|i| i.lane == state.catcher_lane)
        .min_by(landing_order)?;

    // Any neighbouring lane will do
    if threat.lane + 1 < config.lanes {
        Some(threat.lane + 1)
    } else {
        threat.lane.checked_sub(1)
    }
}

/// One step toward the target lane, or `None` to hold position
pub fn choose_move(state: &SessionState, config: &GameConfig) -> Option<Direction> {
    if state.phase != Phase::Running {
        return None;
    }
    let target = target_lane(state, config)?;
    match target.cmp(&state.catcher_lane) {
        std::cmp::Ordering::Less => Some(Direction::Left),
        std::cmp::Ordering::Greater => Some(Direction::Right),
        std::cmp::Ordering::Equal => None,
    }
}

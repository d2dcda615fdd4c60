//! Item spawning

use rand::Rng;

use super::catalog::Catalog;
use super::state::{FallingItem, Phase, SessionState};
use crate::settings::GameConfig;

/// Spawn one item above the playfield and put it in flight.
///
/// Returns `None` outside `Running`, so a late spawn after the round ends is
/// dropped without touching state.
pub fn spawn<R: Rng + ?Sized>(
    state: &mut SessionState,
    catalog: &Catalog,
    config: &GameConfig,
    rng: &mut R,
) -> Option<u32> {
    if state.phase != Phase::Running {
        return None;
    }

    let food = catalog.pick_random(rng).clone();
    let lane = rng.random_range(0..config.lanes);
    let fall_speed = rng.random_range(config.min_fall_speed..=config.max_fall_speed);

    let id = state.next_item_id();
    log::debug!(
        "Spawned {} #{} in lane {} at speed {:.2}",
        food.name,
        id,
        lane,
        fall_speed
    );
    state.in_flight.push(FallingItem {
        id,
        food,
        lane,
        y: config.spawn_position(),
        fall_speed,
    });
    Some(id)
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Simulated time only (no wall clock reads)
//! - Seeded RNG only
//! - Fixed step per advance, not scaled by elapsed time
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod catalog;
pub mod clock;
pub mod collision;
pub mod session;
pub mod spawner;
pub mod state;
pub mod summary;

pub use catalog::Catalog;
pub use clock::{ClockEvent, ClockState, SimClock};
pub use collision::{AdvanceOutcome, Fate, advance, classify};
pub use session::{Session, SubscriptionId};
pub use state::{
    CatchRecord, Category, Direction, FallingItem, FoodDefinition, Phase, SessionState,
};
pub use summary::RoundSummary;

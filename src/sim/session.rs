//! Game session state machine
//!
//! Owns the [`SessionState`] and the [`SimClock`]. The outside world sees
//! state only through [`Session::state`], [`Session::snapshot`] and
//! subscriptions, and changes it only through the intent methods.
//!
//! Intents take effect at the most recent simulated instant passed to
//! [`Session::tick`].

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::catalog::Catalog;
use super::clock::{ClockEvent, ClockState, SimClock};
use super::collision;
use super::spawner;
use super::state::{Direction, Phase, SessionState};
use super::summary::RoundSummary;
use crate::error::ConfigError;
use crate::settings::GameConfig;

/// Handle returned by [`Session::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&SessionState)>;

/// One player's game: phase, round state, clock and observers
pub struct Session {
    config: GameConfig,
    catalog: Catalog,
    seed: u64,
    rng: Pcg32,
    clock: SimClock,
    state: SessionState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl Session {
    /// Build a session in `Idle`. Bad configuration is refused here, so a
    /// round can never start with it.
    pub fn new(config: GameConfig, catalog: Catalog, seed: u64) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            log::error!("Refusing session config: {}", err);
            return Err(err);
        }

        Ok(Self {
            clock: SimClock::new(&config),
            state: SessionState::new(config.round_secs, config.initial_lane),
            rng: Pcg32::seed_from_u64(seed),
            seed,
            config,
            catalog,
            subscribers: Vec::new(),
            next_subscription: 1,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn clock_state(&self) -> ClockState {
        self.clock.state()
    }

    /// Read-only view of the live state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> SessionState {
        self.state.clone()
    }

    /// Summary of the current (or just finished) round
    pub fn summary(&self) -> RoundSummary {
        RoundSummary::from_history(&self.state.history)
    }

    /// Register a callback fired after every state change
    pub fn subscribe(&mut self, callback: impl FnMut(&SessionState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns false if the handle was unknown
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    // === Intents ===

    /// Idle -> Running
    pub fn start(&mut self) -> bool {
        if self.state.phase != Phase::Idle {
            log::debug!("start ignored in {:?}", self.state.phase);
            return false;
        }
        self.begin_round();
        true
    }

    /// Ended -> Running, with a fresh round
    pub fn restart(&mut self) -> bool {
        if self.state.phase != Phase::Ended {
            log::debug!("restart ignored in {:?}", self.state.phase);
            return false;
        }
        self.begin_round();
        true
    }

    /// Ended -> Idle
    pub fn return_home(&mut self) -> bool {
        if self.state.phase != Phase::Ended {
            log::debug!("return_home ignored in {:?}", self.state.phase);
            return false;
        }
        self.clock.stop();
        self.state.phase = Phase::Idle;
        log::info!("Returned home");
        self.notify();
        true
    }

    /// Shift the catcher one lane, clamped to the playfield.
    ///
    /// Returns whether the catcher moved.
    pub fn move_lane(&mut self, direction: Direction) -> bool {
        if self.state.phase != Phase::Running {
            log::debug!("move_lane ignored in {:?}", self.state.phase);
            return false;
        }

        let lane = self.state.catcher_lane;
        let target = match direction {
            Direction::Left => lane.saturating_sub(1),
            Direction::Right => (lane + 1).min(self.config.lanes - 1),
        };
        if target == lane {
            return false;
        }

        self.state.catcher_lane = target;
        self.notify();
        true
    }

    /// End the running round now. A no-op in any other phase.
    pub fn stop(&mut self) -> bool {
        if self.state.phase != Phase::Running {
            // Still make sure nothing is scheduled
            self.clock.stop();
            return false;
        }
        self.end_round();
        self.notify();
        true
    }

    // === Time ===

    /// Advance simulated time to `now_ms`, firing every due cadence in
    /// chronological order. Time never moves backwards.
    pub fn tick(&mut self, now_ms: u64) {
        let now_ms = now_ms.max(self.state.now_ms);

        while let Some((at, event)) = self.clock.poll(now_ms) {
            self.state.now_ms = at;
            self.state.expire_score_pulse(at);
            self.fire(at, event);
            self.notify();
        }

        self.state.now_ms = now_ms;
        if self.state.expire_score_pulse(now_ms) {
            self.notify();
        }
    }

    fn fire(&mut self, at: u64, event: ClockEvent) {
        match event {
            ClockEvent::Spawn => {
                spawner::spawn(&mut self.state, &self.catalog, &self.config, &mut self.rng);
            }
            ClockEvent::Advance => {
                if self.state.phase == Phase::Running {
                    collision::step(&mut self.state, &self.config, at);
                }
            }
            ClockEvent::Countdown => self.count_down(),
        }
    }

    fn count_down(&mut self) {
        if self.state.phase != Phase::Running {
            return;
        }
        if self.state.remaining_time <= 1 {
            self.state.remaining_time = 0;
            self.end_round();
        } else {
            self.state.remaining_time -= 1;
        }
    }

    fn begin_round(&mut self) {
        self.clock.stop();
        self.state
            .reset_round(self.config.round_secs, self.config.initial_lane);
        self.state.phase = Phase::Running;
        self.clock.start(self.state.now_ms);
        log::info!(
            "Round started at {}ms ({}s, seed {})",
            self.state.now_ms,
            self.config.round_secs,
            self.seed
        );
        self.notify();
    }

    /// Subscribers are told by the caller, once per firing or intent
    fn end_round(&mut self) {
        self.clock.stop();
        self.state.phase = Phase::Ended;
        log::info!(
            "Round ended at {}ms: score {}, {} catches",
            self.state.now_ms,
            self.state.score,
            self.state.history.len()
        );
    }

    fn notify(&mut self) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.state);
        }
    }
}

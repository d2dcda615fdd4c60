//! Simulation clock
//!
//! Multiplexes the three round cadences (spawn, advance, countdown) onto one
//! logical time source. The caller feeds simulated time through
//! [`SimClock::poll`] and gets back each due firing in order, so tests can
//! drive a whole round without waiting on a wall clock.

use serde::{Deserialize, Serialize};

use crate::settings::GameConfig;

/// A periodic action. Declaration order is the firing order when several
/// are due at the same instant: a final catch is scored before the
/// countdown can end the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClockEvent {
    Spawn,
    Advance,
    Countdown,
}

/// Clock lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockState {
    Stopped,
    Active,
}

/// One repeating timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cadence {
    interval_ms: u64,
    next_due_ms: Option<u64>,
}

impl Cadence {
    fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            next_due_ms: None,
        }
    }

    fn due_at_or_before(&self, now_ms: u64) -> Option<u64> {
        self.next_due_ms.filter(|&due| due <= now_ms)
    }

    /// A slot past the end of simulated time is never due
    fn reschedule(&mut self) {
        self.next_due_ms = self
            .next_due_ms
            .and_then(|due| due.checked_add(self.interval_ms));
    }
}

/// The three round cadences, always scheduled and cancelled together
#[derive(Debug, Clone)]
pub struct SimClock {
    state: ClockState,
    spawn: Cadence,
    advance: Cadence,
    countdown: Cadence,
}

impl SimClock {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            state: ClockState::Stopped,
            spawn: Cadence::new(config.spawn_interval_ms),
            advance: Cadence::new(config.tick_interval_ms),
            countdown: Cadence::new(config.countdown_interval_ms),
        }
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state() == ClockState::Active
    }

    /// Schedule all three cadences from `now_ms`.
    ///
    /// Anything left over from a previous round is cancelled first. The first
    /// spawn fires immediately; advance and countdown fire one interval later.
    pub fn start(&mut self, now_ms: u64) {
        self.stop();
        self.state = ClockState::Active;
        self.spawn.next_due_ms = Some(now_ms);
        self.advance.next_due_ms = now_ms.checked_add(self.advance.interval_ms);
        self.countdown.next_due_ms = now_ms.checked_add(self.countdown.interval_ms);
    }

    /// Cancel every cadence. Safe to call any number of times.
    ///
    /// Returns whether the clock was active.
    pub fn stop(&mut self) -> bool {
        let was_active = self.is_active();
        self.state = ClockState::Stopped;
        for cadence in self.cadences_mut() {
            cadence.next_due_ms = None;
        }
        was_active
    }

    /// Pop the earliest firing due at or before `now_ms`, if any, and move
    /// that cadence to its next slot.
    pub fn poll(&mut self, now_ms: u64) -> Option<(u64, ClockEvent)> {
        let (due, event) = [
            (self.spawn.due_at_or_before(now_ms), ClockEvent::Spawn),
            (self.advance.due_at_or_before(now_ms), ClockEvent::Advance),
            (self.countdown.due_at_or_before(now_ms), ClockEvent::Countdown),
        ]
        .into_iter()
        .filter_map(|(due, event)| due.map(|due| (due, event)))
        .min()?;

        self.cadence_mut(event).reschedule();
        Some((due, event))
    }

    /// Next scheduled firing of one cadence
    pub fn next_due(&self, event: ClockEvent) -> Option<u64> {
        match event {
            ClockEvent::Spawn => self.spawn.next_due_ms,
            ClockEvent::Advance => self.advance.next_due_ms,
            ClockEvent::Countdown => self.countdown.next_due_ms,
        }
    }

    fn cadence_mut(&mut self, event: ClockEvent) -> &mut Cadence {
        match event {
            ClockEvent::Spawn => &mut self.spawn,
            ClockEvent::Advance => &mut self.advance,
            ClockEvent::Countdown => &mut self.countdown,
        }
    }

    fn cadences_mut(&mut self) -> [&mut Cadence; 3] {
        [&mut self.spawn, &mut self.advance, &mut self.countdown]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(clock: &mut SimClock, now_ms: u64) -> Vec<(u64, ClockEvent)> {
        std::iter::from_fn(|| clock.poll(now_ms)).collect()
    }

    #[test]
    fn test_stopped_clock_never_fires() {
        let mut clock = SimClock::new(&GameConfig::default());
        assert_eq!(clock.state(), ClockState::Stopped);
        assert_eq!(clock.poll(u64::MAX / 2), None);
    }

    #[test]
    fn test_start_schedules_all_three() {
        let mut clock = SimClock::new(&GameConfig::default());
        clock.start(100);
        assert!(clock.is_active());
        assert_eq!(clock.next_due(ClockEvent::Spawn), Some(100));
        assert_eq!(clock.next_due(ClockEvent::Advance), Some(116));
        assert_eq!(clock.next_due(ClockEvent::Countdown), Some(1100));
    }

    #[test]
    fn test_events_come_out_in_time_order() {
        let mut clock = SimClock::new(&GameConfig::default());
        clock.start(0);
        let events = drain(&mut clock, 1000);

        assert_eq!(events.first(), Some(&(0, ClockEvent::Spawn)));
        assert_eq!(events.last(), Some(&(1000, ClockEvent::Countdown)));
        assert!(events.windows(2).all(|w| w[0].0 <= w[1].0));

        let advances = events.iter().filter(|(_, e)| *e == ClockEvent::Advance).count();
        // 16, 32, ..., 992
        assert_eq!(advances, 62);
    }

    #[test]
    fn test_same_instant_order_is_spawn_advance_countdown() {
        let config = GameConfig {
            spawn_interval_ms: 1000,
            ..Default::default()
        };
        let mut clock = SimClock::new(&config);
        clock.start(0);
        // 4000 is a multiple of all three intervals
        let at_4000: Vec<ClockEvent> = drain(&mut clock, 4000)
            .into_iter()
            .filter(|(t, _)| *t == 4000)
            .map(|(_, e)| e)
            .collect();
        assert_eq!(
            at_4000,
            vec![ClockEvent::Spawn, ClockEvent::Advance, ClockEvent::Countdown]
        );
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut clock = SimClock::new(&GameConfig::default());
        clock.start(0);
        assert!(clock.stop());
        assert!(!clock.stop());
        assert_eq!(clock.state(), ClockState::Stopped);
        for event in [ClockEvent::Spawn, ClockEvent::Advance, ClockEvent::Countdown] {
            assert_eq!(clock.next_due(event), None);
        }
    }

    #[test]
    fn test_restart_discards_pending_firings() {
        let mut clock = SimClock::new(&GameConfig::default());
        clock.start(0);
        clock.poll(500);

        clock.start(10_000);
        assert_eq!(clock.poll(9_999), None);
        assert_eq!(clock.poll(10_000), Some((10_000, ClockEvent::Spawn)));
    }

    #[test]
    fn test_slots_past_end_of_time_are_dropped() {
        let mut clock = SimClock::new(&GameConfig::default());
        clock.start(u64::MAX - 20);
        assert!(clock.is_active());
        assert_eq!(clock.next_due(ClockEvent::Advance), Some(u64::MAX - 4));
        assert_eq!(clock.next_due(ClockEvent::Countdown), None);

        let events = drain(&mut clock, u64::MAX);
        assert_eq!(
            events,
            vec![
                (u64::MAX - 20, ClockEvent::Spawn),
                (u64::MAX - 4, ClockEvent::Advance),
            ]
        );
        // Still counts as running until stopped
        assert!(clock.is_active());
        assert!(clock.stop());
    }
}

//! Playback scheduler
//!
//! Swings the servo between P1 and P2, one move per period. The first
//! move after power-on goes to P2.

use super::actuator::AngleActuator;
use super::positions::{PositionStore, Slot};
use crate::config::ControllerConfig;
use crate::traits::ServoOutput;

/// Time-driven P1/P2 alternation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlaybackScheduler {
    active: bool,
    /// Slot the next move goes to
    next_target: Slot,
    period_ms: u32,
    min_period_ms: u32,
    max_period_ms: u32,
    quantum_ms: u32,
    last_transition_ms: u32,
}

impl PlaybackScheduler {
    /// Create an inactive scheduler
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            active: false,
            next_target: Slot::P2,
            period_ms: config
                .initial_period_ms
                .clamp(config.min_period_ms, config.max_period_ms),
            min_period_ms: config.min_period_ms,
            max_period_ms: config.max_period_ms,
            quantum_ms: config.period_quantum_ms,
            last_transition_ms: 0,
        }
    }

    /// Whether playback is running
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Time between moves (ms)
    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Time between moves (seconds)
    pub fn period_secs(&self) -> f32 {
        self.period_ms as f32 / 1000.0
    }

    /// Slot the next move goes to
    pub fn next_target(&self) -> Slot {
        self.next_target
    }

    /// Start or stop playback
    ///
    /// Dropped silently unless both slots are set. Returns whether the
    /// state flipped. The period timer restarts at `now_ms`, so the first
    /// move comes one full period after starting.
    pub fn toggle(&mut self, positions: &PositionStore, now_ms: u32) -> bool {
        if positions.both().is_none() {
            return false;
        }
        self.active = !self.active;
        self.last_transition_ms = now_ms;
        true
    }

    /// Change the period by `delta` encoder detents
    ///
    /// Positive detents shorten the period. The result is clamped to the
    /// configured range no matter how large `delta` is.
    pub fn adjust_period(&mut self, delta: i32) -> u32 {
        let change = i64::from(delta) * i64::from(self.quantum_ms);
        let period = (i64::from(self.period_ms) - change)
            .clamp(i64::from(self.min_period_ms), i64::from(self.max_period_ms));
        // Clamped into the u32 config range above
        self.period_ms = period as u32;
        self.period_ms
    }

    /// Move to the next slot if a full period has elapsed
    ///
    /// Returns the slot and angle moved to.
    pub fn tick<S: ServoOutput>(
        &mut self,
        now_ms: u32,
        positions: &PositionStore,
        actuator: &mut AngleActuator,
        servo: &mut S,
    ) -> Option<(Slot, u8)> {
        if !self.active || now_ms.wrapping_sub(self.last_transition_ms) < self.period_ms {
            return None;
        }

        let target = self.next_target;
        self.next_target = target.other();
        self.last_transition_ms = now_ms;

        positions
            .jump_to(target, actuator, servo)
            .map(|angle| (target, angle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder(heapless::Vec<u8, 16>);

    impl ServoOutput for Recorder {
        fn write_angle(&mut self, degrees: u8) {
            let _ = self.0.push(degrees);
        }
    }

    fn filled_store() -> PositionStore {
        let mut store = PositionStore::new();
        store.save(Slot::P1, 30);
        store.save(Slot::P2, 150);
        store
    }

    #[test]
    fn test_toggle_requires_both_slots() {
        let mut playback = PlaybackScheduler::new(&ControllerConfig::DEFAULT);
        let mut store = PositionStore::new();

        assert!(!playback.toggle(&store, 0));
        assert!(!playback.is_active());

        store.save(Slot::P1, 30);
        assert!(!playback.toggle(&store, 0));
        assert!(!playback.is_active());

        store.save(Slot::P2, 150);
        assert!(playback.toggle(&store, 0));
        assert!(playback.is_active());

        assert!(playback.toggle(&store, 0));
        assert!(!playback.is_active());
    }

    #[test]
    fn test_alternates_starting_with_p2() {
        let store = filled_store();
        let mut playback = PlaybackScheduler::new(&ControllerConfig::DEFAULT);
        let mut actuator = AngleActuator::new(90);
        let mut servo = Recorder(heapless::Vec::new());

        playback.toggle(&store, 1000);
        assert_eq!(playback.next_target(), Slot::P2);

        // Not yet a full period
        assert_eq!(playback.tick(1499, &store, &mut actuator, &mut servo), None);

        assert_eq!(
            playback.tick(1500, &store, &mut actuator, &mut servo),
            Some((Slot::P2, 150))
        );
        assert_eq!(playback.tick(1600, &store, &mut actuator, &mut servo), None);
        assert_eq!(playback.next_target(), Slot::P1);
        assert_eq!(
            playback.tick(2000, &store, &mut actuator, &mut servo),
            Some((Slot::P1, 30))
        );
        assert_eq!(
            playback.tick(2500, &store, &mut actuator, &mut servo),
            Some((Slot::P2, 150))
        );
        assert_eq!(servo.0.as_slice(), &[150, 30, 150]);
        assert_eq!(actuator.angle(), 150);
    }

    #[test]
    fn test_inactive_tick_does_nothing() {
        let store = filled_store();
        let mut playback = PlaybackScheduler::new(&ControllerConfig::DEFAULT);
        let mut actuator = AngleActuator::new(90);
        let mut servo = Recorder(heapless::Vec::new());

        assert_eq!(playback.tick(10_000, &store, &mut actuator, &mut servo), None);
        assert!(servo.0.is_empty());
    }

    #[test]
    fn test_adjust_period_direction() {
        let mut playback = PlaybackScheduler::new(&ControllerConfig::DEFAULT);
        assert_eq!(playback.period_ms(), 500);

        assert_eq!(playback.adjust_period(4), 300);
        assert_eq!(playback.adjust_period(-4), 500);
        assert_eq!(playback.adjust_period(-4), 700);
    }

    #[test]
    fn test_adjust_period_clamps() {
        let mut playback = PlaybackScheduler::new(&ControllerConfig::DEFAULT);

        for _ in 0..10 {
            playback.adjust_period(4);
        }
        assert_eq!(playback.period_ms(), 50);

        assert_eq!(playback.adjust_period(i32::MIN), 1000);
        assert_eq!(playback.adjust_period(i32::MAX), 50);
    }

    #[test]
    fn test_period_secs() {
        let playback = PlaybackScheduler::new(&ControllerConfig::DEFAULT);
        assert!((playback.period_secs() - 0.5).abs() < f32::EPSILON);
    }
}

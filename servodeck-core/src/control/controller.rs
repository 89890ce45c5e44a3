//! Control loop
//!
//! [`ControlLoop`] owns all controller state and runs one tick at a time.
//! Each tick, in order:
//!
//! 1. Encoder: jog the angle (manual) or adjust the period (playback)
//! 2. Step switch: advance the jog step on an accepted press
//! 3. Buttons: classify releases as tap/hold and run the bound action
//! 4. Playback: move to the next slot when the period has elapsed
//!
//! The caller sleeps between ticks. Nothing here fails; impossible
//! requests (unset slots, playback without both slots) are dropped.

use heapless::Vec;

use super::actuator::AngleActuator;
use super::buttons::{binding, ButtonBinding, ButtonId, TapAction};
use super::debounce::SwitchDebouncer;
use super::hold::{HoldDetector, PressKind};
use super::playback::PlaybackScheduler;
use super::positions::{PositionStore, Slot};
use super::step::StepSelector;
use crate::config::{ControllerConfig, BUTTON_COUNT};
use crate::state::{ControlEvent, Mode};
use crate::status::StatusLabels;
use crate::traits::Board;

/// Upper bound on events in one tick (encoder + switch + buttons + playback)
pub const MAX_TICK_EVENTS: usize = 8;

/// What one tick did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Events in the order they happened
    pub events: Vec<ControlEvent, MAX_TICK_EVENTS>,
    /// Status labels changed and should be redrawn
    pub display_dirty: bool,
}

impl TickReport {
    fn record(&mut self, event: ControlEvent) {
        // Bounded by MAX_TICK_EVENTS
        let _ = self.events.push(event);
    }
}

/// Controller state and tick logic
#[derive(Debug, Clone)]
pub struct ControlLoop {
    config: ControllerConfig,
    actuator: AngleActuator,
    steps: StepSelector,
    positions: PositionStore,
    playback: PlaybackScheduler,
    holds: [HoldDetector; BUTTON_COUNT],
    switch: SwitchDebouncer,
    last_encoder: i32,
}

impl ControlLoop {
    /// Create a controller in manual mode at the configured initial angle
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            actuator: AngleActuator::new(config.initial_angle),
            steps: StepSelector::new(config.step_sizes),
            positions: PositionStore::new(),
            playback: PlaybackScheduler::new(&config),
            holds: [HoldDetector::new(config.hold_threshold_ms); BUTTON_COUNT],
            switch: SwitchDebouncer::new(config.switch_debounce, config.switch_settle_ms),
            last_encoder: 0,
        }
    }

    /// Power-on: drive the servo to the initial angle and latch the encoder
    ///
    /// Returns the labels for the first screen.
    pub fn start<B: Board>(&mut self, board: &mut B) -> StatusLabels {
        let initial = i32::from(self.actuator.angle());
        self.actuator.apply(board, initial);
        self.last_encoder = board.encoder_position();
        self.labels()
    }

    /// Run one tick
    pub fn tick<B: Board>(&mut self, board: &mut B) -> TickReport {
        let mut report = TickReport::default();
        let mode = self.mode();

        self.handle_encoder(board, mode, &mut report);

        let now = board.now_ms();
        if self.switch.poll(board, now) {
            self.steps.advance();
            report.record(ControlEvent::StepChanged {
                step: self.steps.current(),
            });
            report.display_dirty = true;
        }

        // Blocking debounce may have slept, so sample the clock again
        let now = board.now_ms();
        for button in ButtonId::ALL {
            let active = board.button_active(button);
            let Some(kind) = self.holds[button.index()].update(active, now) else {
                continue;
            };
            let event = self.dispatch(board, button, binding(button), kind, now);
            report.record(event);
            report.display_dirty = true;
        }

        if self.playback.is_active() {
            let now = board.now_ms();
            let moved = self
                .playback
                .tick(now, &self.positions, &mut self.actuator, board);
            if let Some((slot, angle)) = moved {
                report.record(ControlEvent::PlaybackMoved { slot, angle });
            }
        }

        report
    }

    fn handle_encoder<B: Board>(&mut self, board: &mut B, mode: Mode, report: &mut TickReport) {
        let position = board.encoder_position();
        if position == self.last_encoder {
            return;
        }
        let delta = position.wrapping_sub(self.last_encoder);
        self.last_encoder = position;

        let event = match mode {
            Mode::Playback => ControlEvent::PeriodAdjusted {
                period_ms: self.playback.adjust_period(delta),
            },
            Mode::Manual => {
                let jog = delta.saturating_mul(i32::from(self.steps.current()));
                let requested = i32::from(self.actuator.angle()).saturating_add(jog);
                ControlEvent::Jogged {
                    angle: self.actuator.apply(board, requested),
                }
            }
        };
        report.record(event);
        report.display_dirty = true;
    }

    fn dispatch<B: Board>(
        &mut self,
        board: &mut B,
        button: ButtonId,
        binding: ButtonBinding,
        kind: PressKind,
        now: u32,
    ) -> ControlEvent {
        match kind {
            PressKind::Hold => match binding.save_slot {
                Some(slot) => {
                    let angle = self.actuator.angle();
                    self.positions.save(slot, angle);
                    ControlEvent::Saved { slot, angle }
                }
                None => ControlEvent::HoldIgnored { button },
            },
            PressKind::Tap => match binding.tap {
                TapAction::JumpTo(slot) => {
                    match self.positions.jump_to(slot, &mut self.actuator, board) {
                        Some(angle) => ControlEvent::Jumped { slot, angle },
                        None => ControlEvent::JumpSkipped { slot },
                    }
                }
                TapAction::TogglePlayback => {
                    if !self.playback.toggle(&self.positions, now) {
                        ControlEvent::PlaybackRefused
                    } else if self.playback.is_active() {
                        ControlEvent::PlaybackStarted
                    } else {
                        ControlEvent::PlaybackStopped
                    }
                }
            },
        }
    }

    /// Current encoder interpretation
    pub fn mode(&self) -> Mode {
        Mode::from_playback(self.playback.is_active())
    }

    /// Configuration in use
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Current servo angle
    pub fn angle(&self) -> u8 {
        self.actuator.angle()
    }

    /// Current jog step size
    pub fn step_size(&self) -> u16 {
        self.steps.current()
    }

    /// Angle saved in `slot`
    pub fn position(&self, slot: Slot) -> Option<u8> {
        self.positions.get(slot)
    }

    /// Playback state
    pub fn playback(&self) -> &PlaybackScheduler {
        &self.playback
    }

    /// Status labels for the current state
    pub fn labels(&self) -> StatusLabels {
        StatusLabels::format(
            self.steps.current(),
            self.actuator.angle(),
            self.mode(),
            self.playback.period_ms(),
            self.positions.get(Slot::P1),
            self.positions.get(Slot::P2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{ControlInputs, MonotonicClock, ServoOutput};
    use embedded_hal::delay::DelayNs;

    /// Board with levels set directly by the test
    #[derive(Default)]
    struct TestBoard {
        now_ms: u32,
        encoder: i32,
        switch: bool,
        buttons: [bool; BUTTON_COUNT],
        writes: Vec<u8, 32>,
    }

    impl ControlInputs for TestBoard {
        fn encoder_position(&mut self) -> i32 {
            self.encoder
        }

        fn switch_active(&mut self) -> bool {
            self.switch
        }

        fn button_active(&mut self, button: ButtonId) -> bool {
            self.buttons[button.index()]
        }
    }

    impl ServoOutput for TestBoard {
        fn write_angle(&mut self, degrees: u8) {
            let _ = self.writes.push(degrees);
        }
    }

    impl MonotonicClock for TestBoard {
        fn now_ms(&self) -> u32 {
            self.now_ms
        }
    }

    impl DelayNs for TestBoard {
        fn delay_ns(&mut self, ns: u32) {
            self.now_ms += ns / 1_000_000;
        }
    }

    fn started() -> (ControlLoop, TestBoard) {
        let mut controller = ControlLoop::new(ControllerConfig::DEFAULT);
        let mut board = TestBoard::default();
        controller.start(&mut board);
        (controller, board)
    }

    fn press(
        controller: &mut ControlLoop,
        board: &mut TestBoard,
        button: ButtonId,
        held_ms: u32,
    ) -> TickReport {
        board.buttons[button.index()] = true;
        controller.tick(board);
        board.now_ms += held_ms;
        board.buttons[button.index()] = false;
        controller.tick(board)
    }

    #[test]
    fn test_start_writes_initial_angle() {
        let (controller, board) = started();
        assert_eq!(board.writes.as_slice(), &[90]);
        assert_eq!(controller.labels().angle.as_str(), "A:090");
        assert_eq!(controller.mode(), Mode::Manual);
    }

    #[test]
    fn test_start_latches_encoder() {
        let mut controller = ControlLoop::new(ControllerConfig::DEFAULT);
        let mut board = TestBoard {
            encoder: 37,
            ..TestBoard::default()
        };
        controller.start(&mut board);

        let report = controller.tick(&mut board);
        assert!(report.events.is_empty());
        assert!(!report.display_dirty);
        assert_eq!(controller.angle(), 90);
    }

    #[test]
    fn test_idle_tick_is_quiet() {
        let (mut controller, mut board) = started();
        let report = controller.tick(&mut board);
        assert_eq!(report, TickReport::default());
    }

    #[test]
    fn test_hold_on_middle_is_ignored() {
        let (mut controller, mut board) = started();
        let report = press(&mut controller, &mut board, ButtonId::Middle, 1500);

        assert_eq!(
            report.events.as_slice(),
            &[ControlEvent::HoldIgnored {
                button: ButtonId::Middle
            }]
        );
        assert!(report.display_dirty);
        assert_eq!(controller.position(Slot::P1), None);
        assert_eq!(controller.position(Slot::P2), None);
    }

    #[test]
    fn test_tap_on_unset_slot_is_skipped() {
        let (mut controller, mut board) = started();
        let report = press(&mut controller, &mut board, ButtonId::Left, 100);

        assert_eq!(
            report.events.as_slice(),
            &[ControlEvent::JumpSkipped { slot: Slot::P1 }]
        );
        assert_eq!(board.writes.as_slice(), &[90]);
    }

    #[test]
    fn test_save_then_jump() {
        let (mut controller, mut board) = started();

        board.encoder = -20;
        controller.tick(&mut board);
        assert_eq!(controller.angle(), 70);

        let report = press(&mut controller, &mut board, ButtonId::Right, 1000);
        assert_eq!(
            report.events.as_slice(),
            &[ControlEvent::Saved {
                slot: Slot::P2,
                angle: 70
            }]
        );

        board.encoder = 0;
        controller.tick(&mut board);
        assert_eq!(controller.angle(), 90);

        let report = press(&mut controller, &mut board, ButtonId::Right, 200);
        assert_eq!(
            report.events.as_slice(),
            &[ControlEvent::Jumped {
                slot: Slot::P2,
                angle: 70
            }]
        );
        assert_eq!(controller.angle(), 70);
        assert_eq!(controller.labels().p2.as_str(), "070");
    }

    #[test]
    fn test_toggle_refused_without_slots() {
        let (mut controller, mut board) = started();
        let report = press(&mut controller, &mut board, ButtonId::Middle, 100);

        assert_eq!(report.events.as_slice(), &[ControlEvent::PlaybackRefused]);
        assert_eq!(controller.mode(), Mode::Manual);
    }

    #[test]
    fn test_switch_cycles_step() {
        let (mut controller, mut board) = started();

        board.switch = true;
        let report = controller.tick(&mut board);
        assert_eq!(
            report.events.as_slice(),
            &[ControlEvent::StepChanged { step: 10 }]
        );
        assert_eq!(controller.labels().step.as_str(), "10°");

        // Still held: no repeat
        board.now_ms += 1000;
        assert!(controller.tick(&mut board).events.is_empty());

        board.switch = false;
        controller.tick(&mut board);
        board.switch = true;
        controller.tick(&mut board);
        assert_eq!(controller.step_size(), 100);
    }

    #[test]
    fn test_encoder_in_playback_adjusts_period() {
        let (mut controller, mut board) = started();
        press(&mut controller, &mut board, ButtonId::Left, 1000);
        press(&mut controller, &mut board, ButtonId::Right, 1000);
        press(&mut controller, &mut board, ButtonId::Middle, 100);
        assert_eq!(controller.mode(), Mode::Playback);

        board.encoder = 2;
        let report = controller.tick(&mut board);
        assert_eq!(
            report.events.first(),
            Some(&ControlEvent::PeriodAdjusted { period_ms: 400 })
        );
        assert_eq!(controller.angle(), 90);
        assert_eq!(controller.labels().speed.as_str(), "S:60%");
        assert_eq!(controller.labels().mode.as_str(), "M:Ply");
    }
}

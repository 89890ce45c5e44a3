//! Simulated board for driving the control loop in tests

#![allow(dead_code)]

use embedded_hal::delay::DelayNs;
use servodeck_core::config::BUTTON_COUNT;
use servodeck_core::control::{ButtonId, ControlLoop, TickReport};
use servodeck_core::traits::{ControlInputs, MonotonicClock, ServoOutput};

/// Board whose clock only moves when the test (or a delay) moves it
#[derive(Debug, Default)]
pub struct SimBoard {
    pub now_ms: u32,
    pub encoder: i32,
    pub buttons: [bool; BUTTON_COUNT],
    /// Switch reads pressed while `now_ms` is before this time
    pub switch_until_ms: Option<u32>,
    pub servo_writes: Vec<u8>,
    pub slept_ns: u64,
    /// Detents the encoder turns during the next delay
    pub turn_during_sleep: i32,
}

impl SimBoard {
    /// Press the switch for `ms` starting now
    pub fn hold_switch(&mut self, ms: u32) {
        self.switch_until_ms = Some(self.now_ms + ms);
    }

    pub fn last_write(&self) -> Option<u8> {
        self.servo_writes.last().copied()
    }
}

impl ControlInputs for SimBoard {
    fn encoder_position(&mut self) -> i32 {
        self.encoder
    }

    fn switch_active(&mut self) -> bool {
        self.switch_until_ms.is_some_and(|until| self.now_ms < until)
    }

    fn button_active(&mut self, button: ButtonId) -> bool {
        self.buttons[button.index()]
    }
}

impl ServoOutput for SimBoard {
    fn write_angle(&mut self, degrees: u8) {
        self.servo_writes.push(degrees);
    }
}

impl MonotonicClock for SimBoard {
    fn now_ms(&self) -> u32 {
        self.now_ms
    }
}

impl DelayNs for SimBoard {
    fn delay_ns(&mut self, ns: u32) {
        self.encoder += core::mem::take(&mut self.turn_during_sleep);
        self.slept_ns += u64::from(ns);
        self.now_ms += ns / 1_000_000;
    }
}

/// Advance time by `ms` in tick-sized increments, ticking after each
pub fn run_for(controller: &mut ControlLoop, board: &mut SimBoard, ms: u32) -> Vec<TickReport> {
    let interval = controller.config().tick_interval_ms;
    let mut reports = Vec::new();
    let mut elapsed = 0;
    while elapsed < ms {
        board.now_ms += interval;
        elapsed += interval;
        reports.push(controller.tick(board));
    }
    reports
}

/// Press `button`, keep it down for `held_ms`, release it
pub fn press(
    controller: &mut ControlLoop,
    board: &mut SimBoard,
    button: ButtonId,
    held_ms: u32,
) -> TickReport {
    board.buttons[button.index()] = true;
    controller.tick(board);
    board.now_ms += held_ms;
    board.buttons[button.index()] = false;
    controller.tick(board)
}

/// Turn the encoder by `detents` and tick once
pub fn turn(controller: &mut ControlLoop, board: &mut SimBoard, detents: i32) -> TickReport {
    board.encoder += detents;
    controller.tick(board)
}

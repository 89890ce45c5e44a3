//! Step switch debouncing
//!
//! Two strategies, selected by [`SwitchDebounce`]:
//!
//! - `Blocking` sleeps for the settle window, then waits for release before
//!   reporting the press. The caller's loop is stalled for the whole press.
//! - `Cooldown` reports a press on the rising edge and ignores further
//!   edges for the settle window. It never blocks.

use embedded_hal::delay::DelayNs;

use crate::config::SwitchDebounce;
use crate::traits::ControlInputs;

/// Poll interval while waiting for release in blocking mode
const RELEASE_POLL_MS: u32 = 1;

/// Detects one logical press per physical press of the step switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchDebouncer {
    mode: SwitchDebounce,
    settle_ms: u32,
    was_active: bool,
    last_press_ms: Option<u32>,
}

impl SwitchDebouncer {
    /// Create a debouncer that has seen the switch released
    pub fn new(mode: SwitchDebounce, settle_ms: u32) -> Self {
        Self {
            mode,
            settle_ms,
            was_active: false,
            last_press_ms: None,
        }
    }

    /// Sample the switch; returns `true` once per accepted press
    pub fn poll<B>(&mut self, board: &mut B, now_ms: u32) -> bool
    where
        B: ControlInputs + DelayNs,
    {
        match self.mode {
            SwitchDebounce::Blocking => Self::wait_for_release(board, self.settle_ms),
            SwitchDebounce::Cooldown => self.rising_edge(board.switch_active(), now_ms),
        }
    }

    fn wait_for_release<B>(board: &mut B, settle_ms: u32) -> bool
    where
        B: ControlInputs + DelayNs,
    {
        if !board.switch_active() {
            return false;
        }
        board.delay_ms(settle_ms);
        while board.switch_active() {
            board.delay_ms(RELEASE_POLL_MS);
        }
        true
    }

    fn rising_edge(&mut self, active: bool, now_ms: u32) -> bool {
        let edge = active && !self.was_active;
        self.was_active = active;
        if !edge {
            return false;
        }

        let settled = self
            .last_press_ms
            .map_or(true, |last| now_ms.wrapping_sub(last) >= self.settle_ms);
        if settled {
            self.last_press_ms = Some(now_ms);
        }
        settled
    }
}

//! Status display labels
//!
//! Text fields for the status panel, formatted from controller state.

use core::fmt::Write;

use heapless::String;

use crate::state::Mode;

/// Capacity of a single label (bytes; `°` takes two)
pub const LABEL_CAPACITY: usize = 8;

/// A single status label
pub type Label = String<LABEL_CAPACITY>;

/// All text fields of the status display
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusLabels {
    /// Jog step, e.g. `10°`
    pub step: Label,
    /// Current angle, e.g. `A:090`
    pub angle: Label,
    /// Mode, `M:Man` or `M:Ply`
    pub mode: Label,
    /// Playback speed, e.g. `S:50%`
    pub speed: Label,
    /// Saved P1 angle, blank when unset
    pub p1: Label,
    /// Saved P2 angle, blank when unset
    pub p2: Label,
}

impl StatusLabels {
    /// Format every field
    pub fn format(
        step: u16,
        angle: u8,
        mode: Mode,
        period_ms: u32,
        p1: Option<u8>,
        p2: Option<u8>,
    ) -> Self {
        let mut labels = Self::default();
        // Capacities cover the widest value of each field
        let _ = write!(labels.step, "{}°", step);
        let _ = write!(labels.angle, "A:{:03}", angle);
        let _ = labels.mode.push_str(mode.label());
        let _ = write!(labels.speed, "S:{}%", speed_percent(period_ms));
        if let Some(p1) = p1 {
            let _ = write!(labels.p1, "{:03}", p1);
        }
        if let Some(p2) = p2 {
            let _ = write!(labels.p2, "{:03}", p2);
        }
        labels
    }
}

/// `(1 - period) * 100`, with period in seconds, rounded to nearest
pub fn speed_percent(period_ms: u32) -> u32 {
    (1000u32.saturating_sub(period_ms) + 5) / 10
}

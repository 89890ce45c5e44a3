//! Tap vs. hold detection
//!
//! One detector per button. A press is classified exactly once, when the
//! button is released:
//!
//! ```text
//! Idle --active--> Pressed(start) --released--> Tap | Hold --> Idle
//! ```

/// Classification of a completed press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressKind {
    /// Released before the hold threshold
    Tap,
    /// Released at or after the hold threshold
    Hold,
}

/// Per-button press timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HoldDetector {
    threshold_ms: u32,
    pressed_at_ms: Option<u32>,
}

impl HoldDetector {
    /// Create an idle detector
    pub fn new(threshold_ms: u32) -> Self {
        Self {
            threshold_ms,
            pressed_at_ms: None,
        }
    }

    /// Whether a press is in progress
    pub fn is_pressed(&self) -> bool {
        self.pressed_at_ms.is_some()
    }

    /// Feed one sample of the button level
    ///
    /// Returns the classification on the sample where the button is first
    /// seen released; `None` on every other sample.
    pub fn update(&mut self, active: bool, now_ms: u32) -> Option<PressKind> {
        if active {
            if self.pressed_at_ms.is_none() {
                self.pressed_at_ms = Some(now_ms);
            }
            return None;
        }

        let start = self.pressed_at_ms.take()?;
        Some(self.classify(now_ms.wrapping_sub(start)))
    }

    /// Classify a press of `held_ms` duration
    pub fn classify(&self, held_ms: u32) -> PressKind {
        if held_ms >= self.threshold_ms {
            PressKind::Hold
        } else {
            PressKind::Tap
        }
    }
}

//! Jog step selector

use crate::config::STEP_COUNT;

/// Cycles through the jog step sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepSelector {
    sizes: [u16; STEP_COUNT],
    index: usize,
}

impl StepSelector {
    /// Start at the first (smallest) step size
    pub fn new(sizes: [u16; STEP_COUNT]) -> Self {
        Self { sizes, index: 0 }
    }

    /// Move to the next step size, wrapping after the last
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % STEP_COUNT;
    }

    /// Current step size in degrees per detent
    pub fn current(&self) -> u16 {
        self.sizes[self.index]
    }

    /// Index of the current step size
    pub fn index(&self) -> usize {
        self.index
    }
}

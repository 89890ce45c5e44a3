//! Configuration type definitions
//!
//! Every tunable of the controller lives in [`ControllerConfig`]. The
//! firmware bakes a validated instance into the binary at build time, so
//! these values are compile-time constants on the device.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of jog step sizes the step switch cycles through
pub const STEP_COUNT: usize = 3;

/// Number of push-buttons
pub const BUTTON_COUNT: usize = 3;

/// Lowest servo angle (degrees)
pub const MIN_ANGLE: u8 = 0;

/// Highest servo angle (degrees)
pub const MAX_ANGLE: u8 = 180;

/// How the encoder push switch is debounced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SwitchDebounce {
    /// Sleep for the settle window, then spin until release.
    ///
    /// The whole control loop stalls while the switch is held, including
    /// playback and button handling.
    Blocking,
    /// Accept a press on the rising edge unless one was accepted within
    /// the settle window. Never blocks the loop.
    #[default]
    Cooldown,
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A jog step size is zero
    ZeroStepSize,
    /// Hold threshold is zero (every press would be a hold)
    ZeroHoldThreshold,
    /// Tick interval is zero
    ZeroTickInterval,
    /// Playback period quantum is zero
    ZeroPeriodQuantum,
    /// Minimum period is zero or not below the maximum
    InvalidPeriodRange,
    /// Initial period is outside [min, max]
    InitialPeriodOutOfRange,
    /// Initial angle is above 180°
    InitialAngleOutOfRange,
}

/// Controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ControllerConfig {
    /// Press duration at or above which a release counts as a hold (ms)
    pub hold_threshold_ms: u32,
    /// Jog step sizes in degrees, cycled by the step switch
    pub step_sizes: [u16; STEP_COUNT],
    /// Control loop period (ms)
    pub tick_interval_ms: u32,
    /// Servo angle at power-on (degrees)
    pub initial_angle: u8,
    /// Playback period at power-on (ms)
    pub initial_period_ms: u32,
    /// Shortest playback period (ms)
    pub min_period_ms: u32,
    /// Longest playback period (ms)
    pub max_period_ms: u32,
    /// Period change per encoder detent in playback mode (ms)
    pub period_quantum_ms: u32,
    /// Step switch debounce strategy
    pub switch_debounce: SwitchDebounce,
    /// Step switch settle window (ms)
    pub switch_settle_ms: u32,
}

impl ControllerConfig {
    /// Factory defaults
    pub const DEFAULT: Self = Self {
        hold_threshold_ms: 1000,
        step_sizes: [1, 10, 100],
        tick_interval_ms: 50,
        initial_angle: 90,
        initial_period_ms: 500,
        min_period_ms: 50,
        max_period_ms: 1000,
        period_quantum_ms: 50,
        switch_debounce: SwitchDebounce::Cooldown,
        switch_settle_ms: 200,
    };

    /// Check the configuration for inconsistent values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_sizes.iter().any(|&s| s == 0) {
            return Err(ConfigError::ZeroStepSize);
        }
        if self.hold_threshold_ms == 0 {
            return Err(ConfigError::ZeroHoldThreshold);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.period_quantum_ms == 0 {
            return Err(ConfigError::ZeroPeriodQuantum);
        }
        if self.min_period_ms == 0 || self.min_period_ms >= self.max_period_ms {
            return Err(ConfigError::InvalidPeriodRange);
        }
        if !(self.min_period_ms..=self.max_period_ms).contains(&self.initial_period_ms) {
            return Err(ConfigError::InitialPeriodOutOfRange);
        }
        if self.initial_angle > MAX_ANGLE {
            return Err(ConfigError::InitialAngleOutOfRange);
        }
        Ok(())
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

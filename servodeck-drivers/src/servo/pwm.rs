//! Hobby servo on a PWM channel
//!
//! A standard positional servo reads the pulse width of a 50 Hz signal:
//! `min_pulse_us` is 0°, `max_pulse_us` is 180°, linear in between.
//!
//! The driver only needs [`SetDutyCycle`]; the PWM peripheral must already
//! be configured for the frame period in [`ServoConfig::frame_us`].
//!
//! ```ignore
//! let mut servo = PwmServo::new(pwm, ServoConfig::default());
//! servo.set_degrees(90)?;
//! ```

use embedded_hal::pwm::SetDutyCycle;
use servodeck_core::config::MAX_ANGLE;
use servodeck_core::traits::ServoOutput;

/// Servo pulse calibration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServoConfig {
    /// Pulse width at 0° (µs)
    pub min_pulse_us: u32,
    /// Pulse width at 180° (µs)
    pub max_pulse_us: u32,
    /// PWM frame period (µs), 20 ms for 50 Hz
    pub frame_us: u32,
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self {
            min_pulse_us: 500,
            max_pulse_us: 2500,
            frame_us: 20_000,
        }
    }
}

/// Positional servo driven by a PWM duty cycle
pub struct PwmServo<P> {
    pwm: P,
    config: ServoConfig,
}

impl<P: SetDutyCycle> PwmServo<P> {
    /// Create a servo driver; nothing is written until the first move
    pub fn new(pwm: P, config: ServoConfig) -> Self {
        Self { pwm, config }
    }

    /// Pulse width for an angle, angles above 180° are capped
    pub fn pulse_us(&self, degrees: u8) -> u32 {
        let degrees = u32::from(degrees.min(MAX_ANGLE));
        let span = self.config.max_pulse_us.saturating_sub(self.config.min_pulse_us);
        self.config.min_pulse_us + degrees * span / u32::from(MAX_ANGLE)
    }

    /// Duty cycle value for an angle
    pub fn duty_for(&self, degrees: u8) -> u16 {
        let max_duty = u64::from(self.pwm.max_duty_cycle());
        let frame = u64::from(self.config.frame_us.max(1));
        let duty = u64::from(self.pulse_us(degrees)) * max_duty / frame;
        duty.min(max_duty) as u16
    }

    /// Move to `degrees`
    pub fn set_degrees(&mut self, degrees: u8) -> Result<(), P::Error> {
        let duty = self.duty_for(degrees);
        self.pwm.set_duty_cycle(duty)
    }

    /// Stop sending pulses; the servo goes limp
    pub fn relax(&mut self) -> Result<(), P::Error> {
        self.pwm.set_duty_cycle_fully_off()
    }
}

impl<P: SetDutyCycle> ServoOutput for PwmServo<P> {
    fn write_angle(&mut self, degrees: u8) {
        // The servo contract has no failure path; a rejected duty write
        // leaves the servo at its previous position
        let _ = self.set_degrees(degrees);
    }
}

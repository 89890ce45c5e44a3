//! Angle actuator
//!
//! Owns the current servo angle. Every write to the servo goes through
//! [`AngleActuator::apply`], which keeps the angle inside `0..=180`.

use crate::config::{MAX_ANGLE, MIN_ANGLE};
use crate::traits::ServoOutput;

/// Clamp a requested angle to the servo range
pub fn clamp_angle(requested: i32) -> u8 {
    // In range after the clamp, so the cast cannot truncate
    requested.clamp(MIN_ANGLE as i32, MAX_ANGLE as i32) as u8
}

/// Current servo angle plus the clamping write path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AngleActuator {
    angle: u8,
}

impl AngleActuator {
    /// Create an actuator that believes the servo sits at `initial`
    ///
    /// Nothing is written to the servo until the first [`apply`](Self::apply).
    pub fn new(initial: u8) -> Self {
        Self {
            angle: initial.min(MAX_ANGLE),
        }
    }

    /// Current angle in degrees
    pub fn angle(&self) -> u8 {
        self.angle
    }

    /// Clamp `requested`, write it to the servo and remember it
    ///
    /// Out-of-range requests are corrected silently. Returns the angle that
    /// was actually applied.
    pub fn apply<S: ServoOutput>(&mut self, servo: &mut S, requested: i32) -> u8 {
        let angle = clamp_angle(requested);
        servo.write_angle(angle);
        self.angle = angle;
        angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct LastWrite(Option<u8>);

    impl ServoOutput for LastWrite {
        fn write_angle(&mut self, degrees: u8) {
            self.0 = Some(degrees);
        }
    }

    #[test]
    fn test_apply_in_range() {
        let mut servo = LastWrite::default();
        let mut actuator = AngleActuator::new(90);

        assert_eq!(actuator.apply(&mut servo, 42), 42);
        assert_eq!(actuator.angle(), 42);
        assert_eq!(servo.0, Some(42));
    }

    #[test]
    fn test_apply_clamps() {
        let mut servo = LastWrite::default();
        let mut actuator = AngleActuator::new(90);

        assert_eq!(actuator.apply(&mut servo, 195), 180);
        assert_eq!(servo.0, Some(180));

        assert_eq!(actuator.apply(&mut servo, -40), 0);
        assert_eq!(actuator.angle(), 0);
        assert_eq!(servo.0, Some(0));
    }

    #[test]
    fn test_new_does_not_write() {
        let actuator = AngleActuator::new(250);
        assert_eq!(actuator.angle(), 180);
    }
}

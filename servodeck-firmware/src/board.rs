//! Board wiring
//!
//! Binds the RP2040 peripherals to the controller's hardware traits.
//!
//! | Function        | Pin   | Wiring                 |
//! |-----------------|-------|------------------------|
//! | Button left     | GP12  | to 3.3V, pull-down     |
//! | Button middle   | GP11  | to 3.3V, pull-down     |
//! | Button right    | GP10  | to 3.3V, pull-down     |
//! | Encoder A / B   | GP13 / GP14 | pull-up          |
//! | Encoder switch  | GP15  | to GND, pull-up        |
//! | Servo signal    | GP16  | PWM slice 0, channel A |
//! | OLED SDA / SCL  | GP8 / GP9 | I2C0               |

use embassy_rp::gpio::Input;
use embassy_rp::pwm::PwmOutput;
use embassy_time::{Delay, Instant};
use embedded_hal::delay::DelayNs;
use portable_atomic::Ordering;

use servodeck_core::config::BUTTON_COUNT;
use servodeck_core::control::ButtonId;
use servodeck_core::traits::{ControlInputs, MonotonicClock, ServoOutput};
use servodeck_drivers::input::LevelInput;
use servodeck_drivers::servo::PwmServo;

use crate::channels::ENCODER_POSITION;

/// Push-button input
pub type Button = LevelInput<Input<'static>>;

/// The servodeck board
pub struct ServodeckBoard {
    /// Indexed by [`ButtonId::index`]
    buttons: [Button; BUTTON_COUNT],
    switch: LevelInput<Input<'static>>,
    servo: PwmServo<PwmOutput<'static>>,
    delay: Delay,
}

impl ServodeckBoard {
    pub fn new(
        buttons: [Button; BUTTON_COUNT],
        switch: LevelInput<Input<'static>>,
        servo: PwmServo<PwmOutput<'static>>,
    ) -> Self {
        Self {
            buttons,
            switch,
            servo,
            delay: Delay,
        }
    }
}

impl ControlInputs for ServodeckBoard {
    fn encoder_position(&mut self) -> i32 {
        ENCODER_POSITION.load(Ordering::Relaxed)
    }

    fn switch_active(&mut self) -> bool {
        self.switch.is_active()
    }

    fn button_active(&mut self, button: ButtonId) -> bool {
        self.buttons[button.index()].is_active()
    }
}

impl ServoOutput for ServodeckBoard {
    fn write_angle(&mut self, degrees: u8) {
        self.servo.write_angle(degrees);
    }
}

impl MonotonicClock for ServodeckBoard {
    fn now_ms(&self) -> u32 {
        // Truncation wraps after ~49 days; the controller uses wrapping math
        Instant::now().as_millis() as u32
    }
}

/// Busy-waits; encoder sampling continues from the interrupt executor
impl DelayNs for ServodeckBoard {
    fn delay_ns(&mut self, ns: u32) {
        self.delay.delay_ns(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

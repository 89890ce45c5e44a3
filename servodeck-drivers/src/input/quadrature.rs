//! Rotary encoder decoding
//!
//! Decodes quadrature signals into an absolute detent count.
//! Uses a state machine for reliable decoding with noise rejection.

use embedded_hal::digital::InputPin;

/// Direction of one completed detent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

/// Decoder states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    CwStep1,
    CwStep2,
    CcwStep1,
    CcwStep2,
}

/// Detent counter fed with A/B levels
///
/// Quadrature encoding:
/// CW:  A leads B (A changes first when rotating clockwise)
/// CCW: B leads A (B changes first when rotating counter-clockwise)
///
/// State transitions for CW rotation:
/// Idle (1,1) -> CwStep1 (0,1) -> CwStep2 (0,0) -> count +1 -> Idle
///
/// State transitions for CCW rotation:
/// Idle (1,1) -> CcwStep1 (1,0) -> CcwStep2 (0,0) -> count -1 -> Idle
#[derive(Debug, Clone)]
pub struct QuadratureCounter {
    phase: Phase,
    last: (bool, bool),
    position: i32,
}

impl QuadratureCounter {
    /// Create a counter at zero given the current A/B levels
    pub fn new(a: bool, b: bool) -> Self {
        Self {
            phase: Phase::Idle,
            last: (a, b),
            position: 0,
        }
    }

    /// Absolute detent count (wraps at the `i32` limits)
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Feed the current A/B levels
    ///
    /// Returns the direction when a full detent completes.
    pub fn update(&mut self, a: bool, b: bool) -> Option<Rotation> {
        if (a, b) == self.last {
            return None;
        }
        self.last = (a, b);

        let rotation = self.decode(a, b)?;
        self.position = match rotation {
            Rotation::Clockwise => self.position.wrapping_add(1),
            Rotation::CounterClockwise => self.position.wrapping_sub(1),
        };
        Some(rotation)
    }

    fn decode(&mut self, a: bool, b: bool) -> Option<Rotation> {
        match self.phase {
            Phase::Idle => {
                if !a && b {
                    // A fell first
                    self.phase = Phase::CwStep1;
                } else if a && !b {
                    // B fell first
                    self.phase = Phase::CcwStep1;
                }
                None
            }
            Phase::CwStep1 | Phase::CcwStep1 => {
                if !a && !b {
                    self.phase = if self.phase == Phase::CwStep1 {
                        Phase::CwStep2
                    } else {
                        Phase::CcwStep2
                    };
                } else if a && b {
                    // Bounce back to rest
                    self.phase = Phase::Idle;
                }
                None
            }
            Phase::CwStep2 => {
                if a || b {
                    self.phase = Phase::Idle;
                    return Some(Rotation::Clockwise);
                }
                None
            }
            Phase::CcwStep2 => {
                if a || b {
                    self.phase = Phase::Idle;
                    return Some(Rotation::CounterClockwise);
                }
                None
            }
        }
    }
}

/// Encoder on two input pins
pub struct QuadratureEncoder<A, B> {
    a: A,
    b: B,
    counter: QuadratureCounter,
}

impl<A: InputPin, B: InputPin> QuadratureEncoder<A, B> {
    /// Create an encoder, latching the current pin levels as the rest state
    pub fn new(mut a: A, mut b: B) -> Self {
        let level_a = a.is_high().unwrap_or(true);
        let level_b = b.is_high().unwrap_or(true);
        Self {
            a,
            b,
            counter: QuadratureCounter::new(level_a, level_b),
        }
    }

    /// Sample both pins; call every 1-2 ms
    ///
    /// Returns the absolute position after the sample. A failed read
    /// skips the sample.
    pub fn poll(&mut self) -> i32 {
        if let (Ok(a), Ok(b)) = (self.a.is_high(), self.b.is_high()) {
            self.counter.update(a, b);
        }
        self.counter.position()
    }
}

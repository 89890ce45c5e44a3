//! Servo output trait

/// Positional servo accepting an angle in degrees
///
/// The controller only ever writes angles in `0..=180`. Moves are treated
/// as instantaneous; implementations do not report errors back to the
/// control logic.
pub trait ServoOutput {
    /// Command the servo to `degrees`
    fn write_angle(&mut self, degrees: u8);
}

//! Operating mode

/// How encoder rotation is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Encoder jogs the servo angle by the current step size
    Manual,
    /// Servo swings between P1 and P2; encoder adjusts the period
    Playback,
}

impl Mode {
    /// Mode for a playback-active flag
    pub fn from_playback(active: bool) -> Self {
        if active {
            Mode::Playback
        } else {
            Mode::Manual
        }
    }

    /// Status display label
    pub fn label(self) -> &'static str {
        match self {
            Mode::Manual => "M:Man",
            Mode::Playback => "M:Ply",
        }
    }
}

//! Input drivers
//!
//! - [`LevelInput`]: push-button or switch with configurable polarity
//! - [`QuadratureEncoder`]: rotary encoder counting detents

pub mod level;
pub mod quadrature;

pub use level::{ActiveLevel, LevelInput};
pub use quadrature::{QuadratureCounter, QuadratureEncoder, Rotation};

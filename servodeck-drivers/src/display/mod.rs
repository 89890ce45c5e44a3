//! Status display drivers
//!
//! - [`FrameBuffer`]: 128x32 monochrome buffer with an `embedded-graphics` target
//! - [`Ssd1306`]: SSD1306 OLED controller over async I2C
//! - [`StatusPanel`]: lays out [`StatusLabels`](servodeck_core::status::StatusLabels)

pub mod framebuffer;
pub mod panel;
pub mod ssd1306;

#[cfg(test)]
mod fake_i2c;

pub use framebuffer::{FrameBuffer, HEIGHT, PAGES, WIDTH};
pub use panel::{draw_status, PanelError, StatusPanel};
pub use ssd1306::{Ssd1306, SSD1306_ADDR};

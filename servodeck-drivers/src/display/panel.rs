//! Status panel
//!
//! Renders [`StatusLabels`] onto the 128x32 OLED:
//!
//! ```text
//!  ___
//! ( 1°)  A:090       P1 045
//! (   )  M:Man       P2 135
//!  ‾‾‾   S:50%
//! ```
//!
//! Text positions are the left edge and vertical centre of each label.

use embedded_graphics::mono_font::iso_8859_1::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle};
use embedded_graphics::text::{Baseline, Text};
use servodeck_core::status::StatusLabels;

use super::framebuffer::FrameBuffer;
use super::ssd1306::Ssd1306;

/// Step badge centre and radius
const BADGE_CENTER: Point = Point::new(10, 16);
const BADGE_RADIUS: u32 = 10;

const STEP_POS: Point = Point::new(6, 20);
const ANGLE_POS: Point = Point::new(30, 5);
const MODE_POS: Point = Point::new(30, 17);
const SPEED_POS: Point = Point::new(30, 28);
const P1_CAPTION_POS: Point = Point::new(90, 5);
const P2_CAPTION_POS: Point = Point::new(90, 17);
const P1_VALUE_POS: Point = Point::new(105, 5);
const P2_VALUE_POS: Point = Point::new(105, 17);

/// Draw every status field onto `target`
pub fn draw_status<D>(target: &mut D, labels: &StatusLabels) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let lit = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    let inverted = MonoTextStyle::new(&FONT_6X10, BinaryColor::Off);

    Circle::with_center(BADGE_CENTER, BADGE_RADIUS * 2 + 1)
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(target)?;
    Text::with_baseline(labels.step.as_str(), STEP_POS, inverted, Baseline::Middle).draw(target)?;

    let fields = [
        (labels.angle.as_str(), ANGLE_POS),
        (labels.mode.as_str(), MODE_POS),
        (labels.speed.as_str(), SPEED_POS),
        ("P1", P1_CAPTION_POS),
        ("P2", P2_CAPTION_POS),
        (labels.p1.as_str(), P1_VALUE_POS),
        (labels.p2.as_str(), P2_VALUE_POS),
    ];
    for (text, position) in fields {
        Text::with_baseline(text, position, lit, Baseline::Middle).draw(target)?;
    }

    Ok(())
}

/// Panel error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError<E> {
    /// Controller initialization failed
    Init(E),
    /// Frame transfer failed
    Flush(E),
}

/// SSD1306 panel showing the controller status
pub struct StatusPanel<I2C> {
    driver: Ssd1306<I2C>,
    frame: FrameBuffer,
}

impl<I2C> StatusPanel<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    /// Create a panel at the default address
    pub fn new(i2c: I2C) -> Self {
        Self {
            driver: Ssd1306::new(i2c),
            frame: FrameBuffer::new(),
        }
    }

    /// Initialize the controller and blank the screen
    pub async fn init(&mut self) -> Result<(), PanelError<I2C::Error>> {
        self.driver.init().await.map_err(PanelError::Init)?;
        self.frame = FrameBuffer::new();
        self.flush().await
    }

    /// Redraw with new labels
    pub async fn show(&mut self, labels: &StatusLabels) -> Result<(), PanelError<I2C::Error>> {
        self.render(labels);
        self.flush().await
    }

    /// Push the current frame to the display
    pub async fn flush(&mut self) -> Result<(), PanelError<I2C::Error>> {
        self.driver
            .flush(&self.frame)
            .await
            .map_err(PanelError::Flush)
    }

    fn render(&mut self, labels: &StatusLabels) {
        self.frame = FrameBuffer::new();
        draw_status(&mut self.frame, labels).unwrap_or_else(|never| match never {});
    }
}

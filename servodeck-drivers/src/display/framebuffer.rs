//! Page-organised frame buffer
//!
//! One bit per pixel, eight vertical pixels per byte, matching the
//! SSD1306 GDDRAM layout so pages can be streamed without conversion.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// Panel width in pixels
pub const WIDTH: usize = 128;
/// Panel height in pixels
pub const HEIGHT: usize = 32;
/// Number of 8-pixel pages
pub const PAGES: usize = HEIGHT / 8;

/// Monochrome frame buffer
#[derive(Clone)]
pub struct FrameBuffer {
    pages: [[u8; WIDTH]; PAGES],
}

impl FrameBuffer {
    /// Blank buffer
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
        }
    }

    /// Raw bytes of one page
    pub fn page(&self, page: usize) -> &[u8; WIDTH] {
        &self.pages[page]
    }

    /// Pixel at `(x, y)`; out of bounds reads as off
    pub fn get_pixel(&self, x: usize, y: usize) -> BinaryColor {
        if x >= WIDTH || y >= HEIGHT {
            return BinaryColor::Off;
        }
        if self.pages[y / 8][x] & (1 << (y % 8)) != 0 {
            BinaryColor::On
        } else {
            BinaryColor::Off
        }
    }

    fn set_pixel(&mut self, point: Point, color: BinaryColor) {
        let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) else {
            return;
        };
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let byte = &mut self.pages[y / 8][x];
        let mask = 1 << (y % 8);
        match color {
            BinaryColor::On => *byte |= mask,
            BinaryColor::Off => *byte &= !mask,
        }
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = match color {
            BinaryColor::On => 0xFF,
            BinaryColor::Off => 0x00,
        };
        for page in self.pages.iter_mut() {
            page.fill(fill);
        }
        Ok(())
    }
}

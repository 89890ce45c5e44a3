//! SSD1306 OLED Display Driver
//!
//! Driver for 128x32 SSD1306-based OLED displays via async I2C.
//! Pixels are drawn into a [`FrameBuffer`] and streamed page by page.

use super::framebuffer::{FrameBuffer, PAGES, WIDTH};

/// SSD1306 I2C address (typically 0x3C or 0x3D)
pub const SSD1306_ADDR: u8 = 0x3C;

/// Control byte prefixes
const CONTROL_COMMAND: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const RESUME_FROM_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Initialization sequence for a 128x32 panel with internal charge pump
const INIT_SEQUENCE: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_CLOCK_DIV,
    0x80, // Default clock
    cmd::SET_MUX_RATIO,
    0x1F, // 32 lines
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::SET_CHARGE_PUMP,
    0x14, // Enable charge pump
    cmd::SET_MEMORY_MODE,
    0x02,                  // Page addressing
    cmd::SET_SEG_REMAP,    // Flip horizontally
    cmd::SET_COM_SCAN_DEC, // Flip vertically
    cmd::SET_COM_PINS,
    0x02, // Sequential COM config
    cmd::SET_CONTRAST,
    0x8F,
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::RESUME_FROM_RAM,
    cmd::SET_NORMAL,
    cmd::DISPLAY_ON,
];

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> Ssd1306<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    /// Create a driver at the default address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, SSD1306_ADDR)
    }

    /// Create a driver at a specific address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Initialize the display
    pub async fn init(&mut self) -> Result<(), I2C::Error> {
        for &c in INIT_SEQUENCE {
            self.command(c).await?;
        }
        Ok(())
    }

    /// Send a command to the display
    async fn command(&mut self, cmd: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[CONTROL_COMMAND, cmd]).await
    }

    /// Stream the frame buffer to the display
    pub async fn flush(&mut self, frame: &FrameBuffer) -> Result<(), I2C::Error> {
        let mut data = [0u8; WIDTH + 1];
        data[0] = CONTROL_DATA;

        for page in 0..PAGES {
            self.command(cmd::SET_PAGE_ADDR | page as u8).await?;
            self.command(cmd::SET_LOW_COLUMN).await?;
            self.command(cmd::SET_HIGH_COLUMN).await?;

            data[1..].copy_from_slice(frame.page(page));
            self.i2c.write(self.address, &data).await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::fake_i2c::RecordingI2c;
    use embassy_futures::block_on;
    use embedded_graphics::pixelcolor::BinaryColor;
    use embedded_graphics::prelude::*;

    #[test]
    fn test_init_sends_each_command() {
        let mut oled = Ssd1306::new(RecordingI2c::default());
        block_on(oled.init()).unwrap();

        let writes = &oled.i2c.writes;
        assert_eq!(writes.len(), INIT_SEQUENCE.len());
        for ((address, bytes), &c) in writes.iter().zip(INIT_SEQUENCE) {
            assert_eq!(*address, SSD1306_ADDR);
            assert_eq!(*bytes, [CONTROL_COMMAND, c]);
        }
        // 32-line multiplex ratio follows its command
        assert_eq!(writes[3].1, [CONTROL_COMMAND, cmd::SET_MUX_RATIO]);
        assert_eq!(writes[4].1, [CONTROL_COMMAND, 0x1F]);
    }

    #[test]
    fn test_flush_streams_every_page() {
        let mut frame = FrameBuffer::new();
        frame
            .draw_iter([Pixel(Point::new(5, 17), BinaryColor::On)])
            .unwrap();

        let mut oled = Ssd1306::with_address(RecordingI2c::default(), 0x3D);
        block_on(oled.flush(&frame)).unwrap();

        let writes = &oled.i2c.writes;
        assert_eq!(writes.len(), PAGES * 4);
        for (page, chunk) in writes.chunks(4).enumerate() {
            assert!(chunk.iter().all(|(address, _)| *address == 0x3D));
            assert_eq!(chunk[0].1, [CONTROL_COMMAND, 0xB0 | page as u8]);
            assert_eq!(chunk[1].1, [CONTROL_COMMAND, 0x00]);
            assert_eq!(chunk[2].1, [CONTROL_COMMAND, 0x10]);

            let data = &chunk[3].1;
            assert_eq!(data.len(), WIDTH + 1);
            assert_eq!(data[0], CONTROL_DATA);
            assert_eq!(&data[1..], &frame.page(page)[..]);
        }
        // y=17 is bit 1 of page 2
        assert_eq!(writes[2 * 4 + 3].1[1 + 5], 0b0000_0010);
    }

    #[test]
    fn test_bus_error_stops_flush() {
        let mut oled = Ssd1306::new(RecordingI2c::failing());
        assert!(block_on(oled.flush(&FrameBuffer::new())).is_err());
        assert!(oled.i2c.writes.is_empty());
    }
}

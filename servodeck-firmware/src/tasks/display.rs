//! Status display task
//!
//! Redraws the OLED whenever the control task publishes new labels.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;

use servodeck_drivers::display::StatusPanel;

use crate::channels::STATUS_UPDATE;

/// OLED panel on I2C0
pub type Panel = StatusPanel<I2c<'static, I2C0, Async>>;

#[embassy_executor::task]
pub async fn display_task(mut panel: Panel) {
    info!("Display task started");

    if let Err(e) = panel.init().await {
        warn!("Display init failed: {:?}", e);
    }

    loop {
        let labels = STATUS_UPDATE.wait().await;
        if let Err(e) = panel.show(&labels).await {
            warn!("Display update failed: {:?}", e);
        }
    }
}

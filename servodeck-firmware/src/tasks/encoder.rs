//! Encoder sampling task
//!
//! Polls the quadrature pins every millisecond and publishes the absolute
//! count for the control loop. Spawned on the interrupt executor, so it
//! keeps sampling while a control tick busy-waits.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Ticker};
use portable_atomic::Ordering;

use servodeck_drivers::input::QuadratureEncoder;

use crate::channels::ENCODER_POSITION;

/// Sample interval in milliseconds
const POLL_INTERVAL_MS: u64 = 1;

#[embassy_executor::task]
pub async fn encoder_task(a: Input<'static>, b: Input<'static>) {
    info!("Encoder task started");

    let mut encoder = QuadratureEncoder::new(a, b);
    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    loop {
        let position = encoder.poll();
        ENCODER_POSITION.store(position, Ordering::Relaxed);
        ticker.next().await;
    }
}

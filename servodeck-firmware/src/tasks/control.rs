//! Control loop task
//!
//! Runs one controller tick per configured interval and forwards status
//! changes to the display task.

use defmt::*;
use embassy_time::{Duration, Ticker};

use servodeck_core::control::ControlLoop;
use servodeck_core::state::ControlEvent;

use crate::board::ServodeckBoard;
use crate::channels::STATUS_UPDATE;
use crate::config::CONTROLLER_CONFIG;

#[embassy_executor::task]
pub async fn control_task(mut board: ServodeckBoard) {
    info!(
        "Control task started: tick={}ms hold={}ms debounce={}",
        CONTROLLER_CONFIG.tick_interval_ms,
        CONTROLLER_CONFIG.hold_threshold_ms,
        CONTROLLER_CONFIG.switch_debounce
    );

    let mut control = ControlLoop::new(CONTROLLER_CONFIG);
    STATUS_UPDATE.signal(control.start(&mut board));

    let interval = Duration::from_millis(u64::from(CONTROLLER_CONFIG.tick_interval_ms));
    let mut ticker = Ticker::every(interval);

    loop {
        ticker.next().await;

        let report = control.tick(&mut board);
        for event in report.events.iter() {
            log_event(&control, event);
        }

        if report.display_dirty {
            STATUS_UPDATE.signal(control.labels());
        }
    }
}

fn log_event(control: &ControlLoop, event: &ControlEvent) {
    let playback = control.playback();
    match event {
        ControlEvent::PeriodAdjusted { .. } => {
            debug!("Playback period {=f32}s", playback.period_secs())
        }
        ControlEvent::PlaybackStarted => debug!(
            "Playback started: every {=f32}s, first to {}",
            playback.period_secs(),
            playback.next_target()
        ),
        ControlEvent::PlaybackRefused => debug!("Playback refused: both positions must be saved"),
        ControlEvent::HoldIgnored { button } => debug!("Hold ignored on {}", button),
        ControlEvent::JumpSkipped { slot } => debug!("Jump skipped: {} not saved", slot),
        other => debug!("{}", other),
    }
}

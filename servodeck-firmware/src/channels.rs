//! Inter-task communication
//!
//! Static primitives shared between the Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use portable_atomic::AtomicI32;

use servodeck_core::status::StatusLabels;

/// Absolute encoder count (written by the encoder task, read each tick)
pub static ENCODER_POSITION: AtomicI32 = AtomicI32::new(0);

/// Latest status labels to show (newest wins)
pub static STATUS_UPDATE: Signal<CriticalSectionRawMutex, StatusLabels> = Signal::new();

//! Build-time configuration
//!
//! `build.rs` validates `servodeck.toml` and generates:
//! - `CONTROLLER_CONFIG`: controller tunables
//! - `SERVO_CONFIG`: servo pulse calibration

include!(concat!(env!("OUT_DIR"), "/config.rs"));

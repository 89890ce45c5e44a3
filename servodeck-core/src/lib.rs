//! Board-agnostic control logic for the servodeck servo controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (servo, inputs, clock)
//! - Jog, position capture and playback control
//! - Tap/hold classification and step switch debouncing
//! - Status label formatting
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod state;
pub mod status;
pub mod traits;

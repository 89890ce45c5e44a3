//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in servodeck-core, built on `embedded-hal`:
//!
//! - Servo output (hobby servo on a PWM channel)
//! - Inputs (push-buttons, encoder switch, quadrature encoder)
//! - Status display (SSD1306 128x32 OLED over I2C)

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod input;
pub mod servo;

//! Configuration types
//!
//! Board-agnostic controller tunables, validated before use.

pub mod types;

pub use types::*;

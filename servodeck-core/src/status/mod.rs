//! Status display content

pub mod labels;

pub use labels::{speed_percent, Label, StatusLabels, LABEL_CAPACITY};

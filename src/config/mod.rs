//! Configuration module for mix-colors
//!
//! Settings a host can adjust without touching code: how out-of-range
//! selections are treated, the localized label table and the starting
//! colors of both slots.

pub mod labels;
pub mod settings;

pub use labels::LabelTable;
pub use settings::{ConfigError, MixerConfig, OutOfRangePolicy};

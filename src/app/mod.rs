//! Application layer
//!
//! Connects the domain mixer to a GUI host: selection events come in,
//! display snapshots go out.

pub mod controller;
pub mod state;

pub use controller::{AppError, MixScreen};
pub use state::{DisplaySnapshot, ScreenLayout, ScreenOrientation, SelectionEvent, StackAxis};

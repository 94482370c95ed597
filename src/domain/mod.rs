//! Domain logic and core data structures
//!
//! Pure color types and mixing rules, independent of any UI toolkit.

pub mod color;
pub mod mixer;
pub mod naming;

pub use color::{Channel, Color, ColorError};
pub use mixer::{ColorMixer, InputSlot, SlotError, blend};
pub use naming::{ColorNamer, PaletteNamer};

//! Two-slot additive color mixer
//!
//! The mixer keeps two validated input colors and derives their blend on
//! every read, so the mixed color can never go stale.

use crate::domain::color::{Color, ColorError};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifies one of the two mixer inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSlot {
    A,
    B,
}

impl fmt::Display for InputSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSlot::A => f.write_str("A"),
            InputSlot::B => f.write_str("B"),
        }
    }
}

/// Text that does not name an input slot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown input slot '{0}', expected A or B")]
pub struct SlotError(pub String);

impl FromStr for InputSlot {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(InputSlot::A),
            "B" | "b" => Ok(InputSlot::B),
            other => Err(SlotError(other.to_string())),
        }
    }
}

/// Additively blends two colors
///
/// Color channels are summed and saturate at 1.0; alpha is averaged.
///
/// # Example
/// ```rust
/// use mix_colors::domain::{color::Color, mixer::blend};
///
/// let purple = blend(&Color::BLUE, &Color::RED);
/// assert_eq!(purple, Color::rgba(1.0, 0.0, 1.0, 1.0));
/// ```
pub fn blend(a: &Color, b: &Color) -> Color {
    Color::rgba(
        (a.red() + b.red()).min(1.0),
        (a.green() + b.green()).min(1.0),
        (a.blue() + b.blue()).min(1.0),
        (a.alpha() + b.alpha()) / 2.0,
    )
}

/// Holds the two input colors of a mixing session
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMixer {
    input_a: Color,
    input_b: Color,
}

impl Default for ColorMixer {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorMixer {
    /// Creates a mixer with white in slot A and black in slot B
    pub fn new() -> Self {
        Self {
            input_a: Color::WHITE,
            input_b: Color::BLACK,
        }
    }

    pub fn input_a(&self) -> Color {
        self.input_a
    }

    pub fn input_b(&self) -> Color {
        self.input_b
    }

    /// Returns the color currently held by `slot`
    pub fn input(&self, slot: InputSlot) -> Color {
        match slot {
            InputSlot::A => self.input_a,
            InputSlot::B => self.input_b,
        }
    }

    /// Replaces input A
    ///
    /// # Returns
    /// Ok(()) on success, or ColorError::ChannelOutOfRange with input A untouched
    pub fn set_input_a(&mut self, color: Color) -> Result<(), ColorError> {
        color.validate()?;
        self.input_a = color;
        Ok(())
    }

    /// Replaces input B
    ///
    /// # Returns
    /// Ok(()) on success, or ColorError::ChannelOutOfRange with input B untouched
    pub fn set_input_b(&mut self, color: Color) -> Result<(), ColorError> {
        color.validate()?;
        self.input_b = color;
        Ok(())
    }

    pub fn set_input(&mut self, slot: InputSlot, color: Color) -> Result<(), ColorError> {
        match slot {
            InputSlot::A => self.set_input_a(color),
            InputSlot::B => self.set_input_b(color),
        }
    }

    /// Returns the blend of the current inputs
    pub fn mixed(&self) -> Color {
        blend(&self.input_a, &self.input_b)
    }
}

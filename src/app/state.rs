//! Screen state: selection events and the orientation-driven layout plan
//!
//! The three swatches (input A, input B, mixed) are stacked along one axis.
//! Portrait screens stack them vertically, landscape screens horizontally.

use crate::domain::color::Color;
use crate::domain::mixer::InputSlot;

/// Orientation of the screen computed from its size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenOrientation {
    Landscape,
    Portrait,
}

impl ScreenOrientation {
    pub fn from_size(width: f64, height: f64) -> Self {
        if width >= height {
            ScreenOrientation::Landscape
        } else {
            ScreenOrientation::Portrait
        }
    }
}

/// Direction along which the swatches are stacked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackAxis {
    Horizontal,
    Vertical,
}

/// Geometry of the swatch stack for the current screen size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenLayout {
    pub orientation: ScreenOrientation,
    pub axis: StackAxis,
    pub swatch_size: f64,
    pub spacing: f64,
    pub corner_radius: f64,
}

impl ScreenLayout {
    pub const SWATCH_SIZE: f64 = 100.0;
    pub const SPACING: f64 = 5.0;
    pub const CORNER_RADIUS: f64 = 5.0;
    pub const SWATCH_COUNT: usize = 3;

    pub fn for_size(width: f64, height: f64) -> Self {
        let orientation = ScreenOrientation::from_size(width, height);
        let axis = match orientation {
            ScreenOrientation::Landscape => StackAxis::Horizontal,
            ScreenOrientation::Portrait => StackAxis::Vertical,
        };
        Self {
            orientation,
            axis,
            swatch_size: Self::SWATCH_SIZE,
            spacing: Self::SPACING,
            corner_radius: Self::CORNER_RADIUS,
        }
    }

    /// Length of the swatch stack along its axis
    pub fn content_extent(&self) -> f64 {
        let count = Self::SWATCH_COUNT as f64;
        count * self.swatch_size + (count - 1.0) * self.spacing
    }
}

impl Default for ScreenLayout {
    /// Portrait, as on a phone held upright
    fn default() -> Self {
        Self::for_size(0.0, 1.0)
    }
}

/// A color chosen by the user for one of the input slots
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionEvent {
    pub slot: InputSlot,
    pub color: Color,
}

impl SelectionEvent {
    pub fn new(slot: InputSlot, color: Color) -> Self {
        Self { slot, color }
    }
}

/// Everything a GUI layer needs to redraw the screen
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySnapshot {
    pub input_a: Color,
    pub input_b: Color,
    pub mixed: Color,
    /// Localized names from the configured namer
    pub name_a: String,
    pub name_b: String,
    pub mixed_name: String,
    pub layout: ScreenLayout,
}

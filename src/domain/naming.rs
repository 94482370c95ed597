//! Human-readable color names
//!
//! Naming is a service handed to the screen controller. `PaletteNamer` is
//! the built-in implementation: nearest match over a small fixed palette.
//! Names double as label identifiers, so a label table can localize them.

use crate::domain::color::Color;

/// Produces a display name for a color
pub trait ColorNamer {
    fn name_of(&self, color: &Color) -> String;
}

impl<F> ColorNamer for F
where
    F: Fn(&Color) -> String,
{
    fn name_of(&self, color: &Color) -> String {
        self(color)
    }
}

/// Below this alpha a color is reported as clear
const CLEAR_ALPHA: f64 = 0.05;

const PALETTE: &[(&str, [f64; 3])] = &[
    ("Black", [0.0, 0.0, 0.0]),
    ("White", [1.0, 1.0, 1.0]),
    ("Gray", [0.5, 0.5, 0.5]),
    ("Red", [1.0, 0.0, 0.0]),
    ("Green", [0.0, 1.0, 0.0]),
    ("Blue", [0.0, 0.0, 1.0]),
    ("Yellow", [1.0, 1.0, 0.0]),
    ("Cyan", [0.0, 1.0, 1.0]),
    ("Purple", [1.0, 0.0, 1.0]),
    ("Orange", [1.0, 0.5, 0.0]),
    ("Pink", [1.0, 0.75, 0.8]),
    ("Brown", [0.6, 0.3, 0.1]),
];

/// Nearest-neighbour namer over a fixed RGB palette
///
/// A fallback for hosts that have no platform color-naming service; hosts
/// that do should pass their own `ColorNamer` to `MixScreen::with_namer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteNamer;

impl ColorNamer for PaletteNamer {
    fn name_of(&self, color: &Color) -> String {
        if color.alpha() < CLEAR_ALPHA {
            return "Clear".to_string();
        }

        let rgb = [color.red(), color.green(), color.blue()];
        let mut best = PALETTE[0];
        let mut best_distance = f64::INFINITY;
        for &entry in PALETTE {
            let distance: f64 = entry
                .1
                .iter()
                .zip(rgb.iter())
                .map(|(p, c)| (p - c) * (p - c))
                .sum();
            if distance < best_distance {
                best = entry;
                best_distance = distance;
            }
        }
        best.0.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_palette_matches() {
        let namer = PaletteNamer;
        assert_eq!(namer.name_of(&Color::RED), "Red");
        assert_eq!(namer.name_of(&Color::BLUE), "Blue");
        assert_eq!(namer.name_of(&Color::rgba(1.0, 0.0, 1.0, 1.0)), "Purple");
        assert_eq!(namer.name_of(&Color::WHITE), "White");
    }

    #[test]
    fn nearest_match() {
        let namer = PaletteNamer;
        assert_eq!(namer.name_of(&Color::rgba(0.9, 0.05, 0.1, 1.0)), "Red");
        assert_eq!(namer.name_of(&Color::rgba(0.45, 0.5, 0.55, 1.0)), "Gray");
    }

    #[test]
    fn transparent_is_clear() {
        assert_eq!(PaletteNamer.name_of(&Color::rgba(1.0, 0.0, 0.0, 0.0)), "Clear");
        assert_eq!(PaletteNamer.name_of(&Color::rgba(1.0, 0.0, 0.0, 0.5)), "Red");
    }

    #[test]
    fn closures_are_namers() {
        let namer = |color: &Color| color.to_hex();
        assert_eq!(namer.name_of(&Color::BLACK), "#000000FF");
    }
}

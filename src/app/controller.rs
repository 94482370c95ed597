//! Screen controller
//!
//! `MixScreen` is what a GUI layer talks to: it forwards selection events to
//! the mixer, applies the configured out-of-range policy, and returns a fresh
//! `DisplaySnapshot` after every change.

use crate::app::state::{DisplaySnapshot, ScreenLayout, SelectionEvent};
use crate::config::{ConfigError, LabelTable, MixerConfig, OutOfRangePolicy};
use crate::domain::color::ColorError;
use crate::domain::mixer::ColorMixer;
use crate::domain::naming::{ColorNamer, PaletteNamer};
use log::{debug, warn};
use thiserror::Error;

/// Application errors surfaced to the binary
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Color error: {0}")]
    Color(#[from] ColorError),
    #[error("{0}")]
    Usage(String),
}

/// One mixing session, from screen creation until it is dropped
pub struct MixScreen<N: ColorNamer = PaletteNamer> {
    mixer: ColorMixer,
    namer: N,
    labels: LabelTable,
    policy: OutOfRangePolicy,
    layout: ScreenLayout,
}

impl MixScreen<PaletteNamer> {
    /// Creates a screen that names colors with the built-in palette
    pub fn new(config: &MixerConfig) -> Result<Self, ConfigError> {
        Self::with_namer(config, PaletteNamer)
    }
}

impl<N: ColorNamer> MixScreen<N> {
    pub fn with_namer(config: &MixerConfig, namer: N) -> Result<Self, ConfigError> {
        let (input_a, input_b) = config.initial_inputs()?;
        let mut mixer = ColorMixer::new();
        mixer
            .set_input_a(input_a)
            .map_err(|source| ConfigError::InvalidDefault { slot: 'A', source })?;
        mixer
            .set_input_b(input_b)
            .map_err(|source| ConfigError::InvalidDefault { slot: 'B', source })?;

        Ok(Self {
            mixer,
            namer,
            labels: config.labels.clone(),
            policy: config.out_of_range,
            layout: ScreenLayout::default(),
        })
    }

    pub fn mixer(&self) -> &ColorMixer {
        &self.mixer
    }

    pub fn layout(&self) -> ScreenLayout {
        self.layout
    }

    /// Applies a user selection and returns the refreshed display state
    ///
    /// With the reject policy an out-of-range color is returned as an error
    /// and the screen keeps its previous state.
    pub fn handle_selection(
        &mut self,
        event: SelectionEvent,
    ) -> Result<DisplaySnapshot, ColorError> {
        let color = match (event.color.validate(), self.policy) {
            (Ok(()), _) => event.color,
            (Err(err), OutOfRangePolicy::Reject) => {
                warn!("Rejected color for slot {}: {}", event.slot, err);
                return Err(err);
            }
            (Err(err), OutOfRangePolicy::Clamp) => {
                let clamped = event.color.clamped();
                warn!("Clamped color for slot {} to {} ({})", event.slot, clamped, err);
                clamped
            }
        };

        self.mixer.set_input(event.slot, color)?;
        debug!(
            "Slot {} set to {}, mixed is now {}",
            event.slot,
            color,
            self.mixer.mixed()
        );
        Ok(self.snapshot())
    }

    /// Recomputes the layout for a new screen size
    pub fn resize(&mut self, width: f64, height: f64) -> DisplaySnapshot {
        let layout = ScreenLayout::for_size(width, height);
        if layout.orientation != self.layout.orientation {
            debug!("Orientation changed to {:?}", layout.orientation);
        }
        self.layout = layout;
        self.snapshot()
    }

    /// Current display state
    pub fn snapshot(&self) -> DisplaySnapshot {
        let input_a = self.mixer.input_a();
        let input_b = self.mixer.input_b();
        let mixed = self.mixer.mixed();

        DisplaySnapshot {
            input_a,
            input_b,
            mixed,
            name_a: self.localized_name(&self.namer.name_of(&input_a)),
            name_b: self.localized_name(&self.namer.name_of(&input_b)),
            mixed_name: self.localized_name(&self.namer.name_of(&mixed)),
            layout: self.layout,
        }
    }

    fn localized_name(&self, name: &str) -> String {
        self.labels.localized(name).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{ScreenOrientation, StackAxis};
    use crate::domain::color::{Channel, Color};
    use crate::domain::mixer::InputSlot;

    fn screen() -> MixScreen {
        MixScreen::new(&MixerConfig::default()).unwrap()
    }

    #[test]
    fn initial_snapshot() {
        let snapshot = screen().snapshot();
        assert_eq!(snapshot.input_a, Color::WHITE);
        assert_eq!(snapshot.input_b, Color::BLACK);
        assert_eq!(snapshot.mixed, Color::WHITE);
        assert_eq!(snapshot.name_a, "White");
        assert_eq!(snapshot.name_b, "Black");
        assert_eq!(snapshot.mixed_name, "White");
    }

    #[test]
    fn selections_refresh_mixed_name() {
        let mut screen = screen();
        screen
            .handle_selection(SelectionEvent::new(InputSlot::A, Color::BLUE))
            .unwrap();
        let snapshot = screen
            .handle_selection(SelectionEvent::new(InputSlot::B, Color::RED))
            .unwrap();

        assert_eq!(snapshot.mixed, Color::rgba(1.0, 0.0, 1.0, 1.0));
        assert_eq!(snapshot.name_a, "Blue");
        assert_eq!(snapshot.name_b, "Red");
        assert_eq!(snapshot.mixed_name, "Purple");
    }

    #[test]
    fn reject_policy_keeps_state() {
        let mut screen = screen();
        let before = screen.snapshot();

        let err = screen
            .handle_selection(SelectionEvent::new(
                InputSlot::A,
                Color::rgba(1.5, 0.0, 0.0, 1.0),
            ))
            .unwrap_err();

        assert_eq!(
            err,
            ColorError::ChannelOutOfRange {
                channel: Channel::Red,
                value: 1.5
            }
        );
        assert_eq!(screen.snapshot(), before);
    }

    #[test]
    fn clamp_policy_accepts_out_of_range() {
        let config = MixerConfig {
            out_of_range: OutOfRangePolicy::Clamp,
            ..MixerConfig::default()
        };
        let mut screen = MixScreen::new(&config).unwrap();

        let snapshot = screen
            .handle_selection(SelectionEvent::new(
                InputSlot::A,
                Color::rgba(-1.0, 0.0, 3.0, 1.0),
            ))
            .unwrap();

        assert_eq!(snapshot.input_a, Color::BLUE);
    }

    #[test]
    fn labels_localize_names() {
        let config = MixerConfig {
            labels: [("Purple", "Violet")].into_iter().collect(),
            default_a: Some("#0000FF".to_string()),
            default_b: Some("#FF0000".to_string()),
            ..MixerConfig::default()
        };
        let screen = MixScreen::new(&config).unwrap();
        let snapshot = screen.snapshot();

        assert_eq!(snapshot.mixed_name, "Violet");
        assert_eq!(snapshot.name_a, "Blue");
    }

    #[test]
    fn custom_namer() {
        let namer = |color: &Color| color.to_hex();
        let screen = MixScreen::with_namer(&MixerConfig::default(), namer).unwrap();
        assert_eq!(screen.snapshot().mixed_name, "#FFFFFFFF");
    }

    #[test]
    fn resize_switches_axis() {
        let mut screen = screen();
        assert_eq!(screen.layout().axis, StackAxis::Vertical);

        let snapshot = screen.resize(844.0, 390.0);
        assert_eq!(snapshot.layout.orientation, ScreenOrientation::Landscape);
        assert_eq!(snapshot.layout.axis, StackAxis::Horizontal);

        screen.resize(390.0, 844.0);
        assert_eq!(screen.layout().axis, StackAxis::Vertical);
    }
}

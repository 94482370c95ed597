//! Color value type and channel validation
//!
//! Colors are four normalized channels (red, green, blue, alpha). The type
//! itself is a plain immutable value; range checks happen in `validate`,
//! which every mixer slot runs before accepting a color.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four components of a color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha",
        };
        f.write_str(name)
    }
}

/// Errors produced while building, parsing or accepting colors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A channel is outside [0.0, 1.0] or is NaN
    #[error("{channel} channel value {value} is outside [0, 1]")]
    ChannelOutOfRange { channel: Channel, value: f64 },
    /// Text could not be parsed as a color
    #[error("cannot parse color from '{0}'")]
    InvalidFormat(String),
}

/// Immutable RGBA color with normalized `f64` channels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const RED: Color = Color::rgba(1.0, 0.0, 0.0, 1.0);
    pub const BLUE: Color = Color::rgba(0.0, 0.0, 1.0, 1.0);

    /// Creates a color without range checks
    ///
    /// Use `try_rgba` when the channels come from an untrusted source.
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates a color, rejecting any channel outside [0, 1]
    ///
    /// # Example
    /// ```rust
    /// use mix_colors::domain::color::Color;
    ///
    /// assert!(Color::try_rgba(0.0, 0.5, 1.0, 1.0).is_ok());
    /// assert!(Color::try_rgba(1.5, 0.0, 0.0, 1.0).is_err());
    /// ```
    pub fn try_rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Result<Self, ColorError> {
        let color = Self::rgba(red, green, blue, alpha);
        color.validate()?;
        Ok(color)
    }

    pub fn red(&self) -> f64 {
        self.red
    }

    pub fn green(&self) -> f64 {
        self.green
    }

    pub fn blue(&self) -> f64 {
        self.blue
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the channels in (red, green, blue, alpha) order
    pub fn channels(&self) -> [(Channel, f64); 4] {
        [
            (Channel::Red, self.red),
            (Channel::Green, self.green),
            (Channel::Blue, self.blue),
            (Channel::Alpha, self.alpha),
        ]
    }

    /// Checks every channel and reports the first one outside [0, 1]
    ///
    /// NaN never passes.
    pub fn validate(&self) -> Result<(), ColorError> {
        for (channel, value) in self.channels() {
            if !(0.0..=1.0).contains(&value) {
                return Err(ColorError::ChannelOutOfRange { channel, value });
            }
        }
        Ok(())
    }

    /// Returns a copy with every channel forced into [0, 1] (NaN becomes 0)
    pub fn clamped(&self) -> Self {
        fn clamp(value: f64) -> f64 {
            if value.is_nan() {
                0.0
            } else {
                value.clamp(0.0, 1.0)
            }
        }

        Self::rgba(
            clamp(self.red),
            clamp(self.green),
            clamp(self.blue),
            clamp(self.alpha),
        )
    }

    /// Formats the color as `#RRGGBBAA`
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.channels().map(|(_, value)| to_byte(value));
        format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }
}

fn to_byte(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({:.3}, {:.3}, {:.3}, {:.3})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Accepts `#RRGGBB`, `#RRGGBBAA` (the `#` is optional) or `r,g,b[,a]`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.contains(',') {
            parse_decimal(text)
        } else {
            parse_hex(text)
        }
    }
}

fn parse_hex(text: &str) -> Result<Color, ColorError> {
    let invalid = || ColorError::InvalidFormat(text.to_string());
    let digits = text.strip_prefix('#').unwrap_or(text);

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    if digits.len() != 6 && digits.len() != 8 {
        return Err(invalid());
    }

    let byte = |index: usize| -> Result<f64, ColorError> {
        let pair = &digits[index * 2..index * 2 + 2];
        u8::from_str_radix(pair, 16)
            .map(|value| f64::from(value) / 255.0)
            .map_err(|_| invalid())
    };

    let alpha = if digits.len() == 8 { byte(3)? } else { 1.0 };
    Ok(Color::rgba(byte(0)?, byte(1)?, byte(2)?, alpha))
}

fn parse_decimal(text: &str) -> Result<Color, ColorError> {
    let values = text
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ColorError::InvalidFormat(text.to_string()))?;

    match values.as_slice() {
        [r, g, b] => Color::try_rgba(*r, *g, *b, 1.0),
        [r, g, b, a] => Color::try_rgba(*r, *g, *b, *a),
        _ => Err(ColorError::InvalidFormat(text.to_string())),
    }
}

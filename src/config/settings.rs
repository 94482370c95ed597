use crate::config::labels::LabelTable;
use crate::domain::color::{Color, ColorError};
use log::info;
use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a JSON configuration file
pub const CONFIG_ENV_VAR: &str = "MIX_COLORS_CONFIG";

/// What to do with a selected color whose channels fall outside [0, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutOfRangePolicy {
    /// Refuse the selection and report ColorError
    #[default]
    Reject,
    /// Force every channel into range before handing the color on
    Clamp,
}

/// User-facing settings for a mixing screen
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MixerConfig {
    pub out_of_range: OutOfRangePolicy,
    pub labels: LabelTable,
    /// Optional initial color for slot A, in any form `Color` parses
    pub default_a: Option<String>,
    /// Optional initial color for slot B
    pub default_b: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid default color for slot {slot}: {source}")]
    InvalidDefault { slot: char, source: ColorError },
}

impl MixerConfig {
    /// Parses and validates a JSON configuration document
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: MixerConfig = serde_json::from_str(text)?;
        config.initial_inputs()?;
        Ok(config)
    }

    /// Reads a JSON configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        info!(
            "Loaded configuration from {} ({} labels, {:?} policy)",
            path.display(),
            config.labels.len(),
            config.out_of_range
        );
        Ok(config)
    }

    /// Loads from `path` when given, else from `MIX_COLORS_CONFIG`, else defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_or_default_from(path, std::env::var_os(CONFIG_ENV_VAR))
    }

    /// Same as `load_or_default`, with the environment value passed in
    pub fn load_or_default_from(
        path: Option<&Path>,
        env_value: Option<OsString>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match env_value {
            Some(value) => Self::load(Path::new(&value)),
            None => {
                info!("No configuration file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Resolves the starting colors for slots A and B
    ///
    /// Unset slots fall back to white (A) and black (B).
    pub fn initial_inputs(&self) -> Result<(Color, Color), ConfigError> {
        let a = parse_default('A', self.default_a.as_deref(), Color::WHITE)?;
        let b = parse_default('B', self.default_b.as_deref(), Color::BLACK)?;
        Ok((a, b))
    }
}

fn parse_default(slot: char, text: Option<&str>, fallback: Color) -> Result<Color, ConfigError> {
    let Some(text) = text else {
        return Ok(fallback);
    };
    let color: Color = text
        .parse()
        .map_err(|source| ConfigError::InvalidDefault { slot, source })?;
    color
        .validate()
        .map_err(|source| ConfigError::InvalidDefault { slot, source })?;
    Ok(color)
}

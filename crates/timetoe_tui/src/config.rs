//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "timetoe.toml";

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// File that receives logs while the terminal UI is running.
    log_file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    log_filter: String,

    /// Colours used to draw the board.
    palette: PaletteConfig,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("timetoe.log"),
            log_filter: "info".to_string(),
            palette: PaletteConfig::default(),
        }
    }
}

/// Colour names as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Colour of X marks.
    x: String,
    /// Colour of O marks.
    o: String,
    /// Background of squares on the winning line.
    winning: String,
    /// Background of the cursor square.
    cursor: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            x: "blue".to_string(),
            o: "red".to_string(),
            winning: "green".to_string(),
            cursor: "white".to_string(),
        }
    }
}

/// Resolved colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Colour of X marks.
    pub x: Color,
    /// Colour of O marks.
    pub o: Color,
    /// Background of squares on the winning line.
    pub winning: Color,
    /// Background of the cursor square.
    pub cursor: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            x: Color::Blue,
            o: Color::Red,
            winning: Color::Green,
            cursor: Color::White,
        }
    }
}

impl PaletteConfig {
    /// Parses every colour name.
    #[instrument(skip(self))]
    pub fn resolve(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            x: parse_color("x", &self.x)?,
            o: parse_color("o", &self.o)?,
            winning: parse_color("winning", &self.winning)?,
            cursor: parse_color("cursor", &self.cursor)?,
        })
    }
}

fn parse_color(field: &str, name: &str) -> Result<Color, ConfigError> {
    Color::from_str(name)
        .map_err(|_| ConfigError::new(format!("unknown colour {name:?} for palette.{field}")))
}

impl TuiConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("malformed TOML: {e}")))?;
        config.palette.resolve()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("cannot read {}: {e}", path.as_ref().display())))?;
        let config = Self::from_toml(&content)?;
        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// A config file or palette entry that could not be used.
///
/// Records where in this crate the problem was detected, which helps when
/// the same message can come from the TOML and the palette stage.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid timetoe config: {message} (raised at {file}:{line})")]
pub struct ConfigError {
    /// What was wrong.
    pub message: String,
    /// Line of the call that raised the error.
    pub line: u32,
    /// File of the call that raised the error.
    pub file: &'static str,
}

impl ConfigError {
    /// Builds an error located at the caller.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let caller = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: caller.line(),
            file: caller.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = TuiConfig::from_toml("").expect("empty config");
        assert_eq!(config, TuiConfig::default());
        assert_eq!(config.palette().resolve().ok(), Some(Palette::default()));
    }

    #[test]
    fn test_partial_palette_keeps_other_defaults() {
        let config = TuiConfig::from_toml("log_filter = \"debug\"\n[palette]\nx = \"yellow\"\n")
            .expect("valid config");
        assert_eq!(config.log_filter(), "debug");
        let palette = config.palette().resolve().expect("palette");
        assert_eq!(palette.x, Color::Yellow);
        assert_eq!(palette.o, Color::Red);
    }

    #[test]
    fn test_unknown_colour_is_rejected() {
        let err = TuiConfig::from_toml("[palette]\nwinning = \"plaid\"\n").unwrap_err();
        assert!(err.message.contains("palette.winning"));
    }

    #[test]
    fn test_error_names_source_location() {
        let err = TuiConfig::from_file("/nonexistent/timetoe.toml").unwrap_err();
        assert!(err.file.ends_with("config.rs"));
        let text = err.to_string();
        assert!(text.starts_with("Invalid timetoe config: cannot read /nonexistent/timetoe.toml"));
        assert!(text.contains("(raised at "));
    }

    #[test]
    fn test_bad_toml_is_rejected() {
        assert!(TuiConfig::from_toml("log_file = ").is_err());
    }
}

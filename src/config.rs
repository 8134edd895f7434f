//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! We look for a folio.toml in the working directory and load settings from it if present. This
//! provides the scroll threshold, smooth-scroll pacing and the starting theme.

use facet::Facet;
use std::path::Path;
use std::{fs, io};
use thiserror::Error;

/// File looked up in the working directory.
pub const CONFIG_FILE: &str = "folio.toml";

#[derive(Debug, Error)]
/// Failures loading an explicit configuration file.
pub enum ConfigError {
    /// The file could not be read.
    #[error("reading config: {0}")]
    Io(#[from] io::Error),
    /// The file is not valid configuration TOML.
    #[error("parsing config: {0}")]
    Parse(String),
}

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from folio.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 3)]
    /// Rows before a section's heading at which it becomes active.
    pub scroll_threshold: u32,
    #[facet(default = 3)]
    /// Rows moved per arrow key or wheel notch.
    pub scroll_step: u32,
    #[facet(default = 12)]
    /// Frames a smooth scroll takes; zero jumps instantly.
    pub scroll_frames: u16,
    #[facet(default = 16)]
    /// Milliseconds between animation frames.
    pub frame_millis: u64,
    #[facet(default = "dark".to_string())]
    /// Starting theme, `light` or `dark`.
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scroll_threshold: crate::tracker::DEFAULT_SCROLL_THRESHOLD,
            scroll_step: 3,
            scroll_frames: crate::viewport::DEFAULT_SCROLL_FRAMES,
            frame_millis: 16,
            theme: "dark".to_string(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from folio.toml if present, otherwise use defaults.
    ///
    /// A file that exists but cannot be parsed is reported in the log and ignored.
    pub fn load() -> Self {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring {CONFIG_FILE}");
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        facet_toml::from_str::<Self>(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;

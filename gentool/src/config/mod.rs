//! Configuration management for gentool
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `GENTOOL_` prefix, `__` for nesting)
//! 2. An explicit file passed with `--config`
//! 3. `./gentool.toml`
//! 4. `~/.config/gentool/config.toml` (user config, XDG)
//! 5. Hardcoded defaults (fallback)
//!
//! Command line flags are applied on top by the CLI.
//!
//! # Example Configuration
//!
//! ```toml
//! [prompt]
//! max_attempts = 5
//! fancy = true
//!
//! [progress]
//! enabled = true
//! steps = 100
//! delay_ms = 10
//!
//! [output]
//! staging = true
//! ```

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};

/// Interactive prompt settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PromptSettings {
    /// How many invalid inputs are tolerated before giving up
    pub max_attempts: u32,

    /// Use arrow-key menus when running in a terminal
    pub fancy: bool,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            fancy: true,
        }
    }
}

/// Cosmetic progress bar shown before generating
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProgressSettings {
    /// Show the bar at all
    pub enabled: bool,

    /// Number of ticks
    pub steps: u64,

    /// Delay between ticks in milliseconds (0 disables the bar)
    pub delay_ms: u64,
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            steps: 100,
            delay_ms: 10,
        }
    }
}

impl ProgressSettings {
    /// Whether the bar should be drawn
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.enabled && self.steps > 0 && self.delay_ms > 0
    }
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputSettings {
    /// Build the tree in a hidden staging directory and move it into place
    pub staging: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { staging: true }
    }
}

/// Complete gentool configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GentoolConfig {
    /// Prompt settings
    #[serde(default)]
    pub prompt: PromptSettings,

    /// Progress bar settings
    #[serde(default)]
    pub progress: ProgressSettings,

    /// Output settings
    #[serde(default)]
    pub output: OutputSettings,
}

impl GentoolConfig {
    /// Name of the project-local config file
    pub const LOCAL_FILE: &'static str = "gentool.toml";

    /// Load configuration from the standard locations, plus an optional explicit file
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Config`] if:
    /// - the explicit file does not exist
    /// - any configuration file contains invalid TOML
    /// - values have the wrong type
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut figment = Self::defaults()?;

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                figment = figment.merge(Toml::file(&user_config));
            }
        }

        let local_config = PathBuf::from(Self::LOCAL_FILE);
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(GenError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment.merge(Self::env()).extract()?)
    }

    /// Load configuration from a single file layered over the defaults
    ///
    /// Environment variables still override the file.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Config`] if the file is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(Self::defaults()?
            .merge(Toml::file(path))
            .merge(Self::env())
            .extract()?)
    }

    /// Recommended per-user config path (`~/.config/gentool/config.toml`)
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gentool").join("config.toml"))
    }

    fn defaults() -> Result<Figment> {
        let defaults =
            toml::to_string(&Self::default()).map_err(|e| GenError::Config(e.to_string()))?;
        Ok(Figment::new().merge(Toml::string(&defaults)))
    }

    fn env() -> Env {
        Env::prefixed("GENTOOL_").split("__").lowercase(true)
    }
}

//! # gx-config
//!
//! Layered configuration loading for Gradex using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GRADEX_*` prefix, `__` as separator)
//! 2. Project-level `.gradex/config.toml`
//! 3. User-level `~/.config/gradex/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GRADEX_CANVAS__BASE_URL` -> `canvas.base_url`,
//! `GRADEX_EXPORT__INCLUDE_UNGRADED` -> `export.include_ungraded`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use gx_config::GradexConfig;
//!
//! let config = GradexConfig::load_with_dotenv().expect("config");
//!
//! if config.canvas.is_configured() {
//!     println!("Canvas: {}", config.canvas.base_url);
//! }
//! ```

mod canvas;
mod error;
mod export;

pub use canvas::{CanvasConfig, MAX_PER_PAGE};
pub use error::ConfigError;
pub use export::ExportConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every Gradex setting.
pub const ENV_PREFIX: &str = "GRADEX_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GradexConfig {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl GradexConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed, or
    /// [`ConfigError::InvalidValue`] if a value violates its constraints.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `.env` from the current directory (if present) before building
    /// the figment. This is the typical entry point for the CLI.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".gradex/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidValue`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.canvas.validate()
    }

    /// Fail with [`ConfigError::NotConfigured`] unless Canvas can be reached.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when `canvas.base_url` is empty.
    pub fn require_canvas(&self) -> Result<&CanvasConfig, ConfigError> {
        if self.canvas.is_configured() {
            Ok(&self.canvas)
        } else {
            Err(ConfigError::NotConfigured {
                section: "canvas".into(),
            })
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gradex").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = GradexConfig::default();
        assert!(!config.canvas.is_configured());
        assert!(!config.export.include_ungraded);
        assert_eq!(config.canvas.per_page, 100);
    }

    #[test]
    fn require_canvas_fails_when_unconfigured() {
        let config = GradexConfig::default();
        assert!(matches!(
            config.require_canvas(),
            Err(ConfigError::NotConfigured { section }) if section == "canvas"
        ));
    }
}

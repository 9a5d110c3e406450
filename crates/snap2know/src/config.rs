//! Configuration management for snap2know.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::dataset::KnowledgeBase;
use crate::error::{Error, Result};
use crate::projector::Category;
use crate::render::OutputFormat;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "snap2know";

/// Environment variable prefix.
const ENV_PREFIX: &str = "SNAP2KNOW_";

/// Upper bound for the auto-expand delay.
const MAX_AUTO_EXPAND_DELAY_MS: u64 = 10_000;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `SNAP2KNOW_`, sections split on `__`)
/// 2. TOML config file at `~/.config/snap2know/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset configuration.
    pub dataset: DatasetConfig,
    /// Display configuration.
    pub display: DisplayConfig,
    /// Output configuration.
    pub output: OutputConfig,
}

/// Dataset-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path to a JSON dataset.
    /// When unset, the dataset embedded in the binary is used.
    pub path: Option<PathBuf>,
}

/// Display-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Category expanded automatically after a full fetch.
    /// An empty string disables auto-expansion.
    pub auto_expand_category: String,
    /// Delay before the auto-expansion runs, in milliseconds.
    pub auto_expand_delay_ms: u64,
    /// URL prefix the video id is appended to when embedding a player.
    pub video_embed_base: String,
    /// Text shown when nothing is selected.
    pub placeholder: String,
}

/// Output-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default rendering format.
    pub format: OutputFormat,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            auto_expand_category: Category::Application.title().to_string(),
            auto_expand_delay_ms: 100,
            video_embed_base: "https://www.youtube.com/embed/".to_string(),
            placeholder: "Please select an equipment to begin.".to_string(),
        }
    }
}

impl DisplayConfig {
    /// The category to expand after a fetch, if enabled.
    #[must_use]
    pub fn auto_expand(&self) -> Option<&str> {
        if self.auto_expand_category.is_empty() {
            None
        } else {
            Some(&self.auto_expand_category)
        }
    }

    /// Get the auto-expand delay as a Duration.
    #[must_use]
    pub fn auto_expand_delay(&self) -> Duration {
        Duration::from_millis(self.auto_expand_delay_ms)
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        let base = &self.display.video_embed_base;
        if !(base.starts_with("https://") || base.starts_with("http://")) {
            return Err(Error::ConfigValidation {
                message: format!("video_embed_base must be an http(s) URL, got '{base}'"),
            });
        }

        if let Some(title) = self.display.auto_expand() {
            if Category::from_title(title).is_none() {
                return Err(Error::ConfigValidation {
                    message: format!(
                        "auto_expand_category '{title}' is not one of Application, Maintenance, Troubleshoot"
                    ),
                });
            }
        }

        if self.display.auto_expand_delay_ms > MAX_AUTO_EXPAND_DELAY_MS {
            return Err(Error::ConfigValidation {
                message: format!(
                    "auto_expand_delay_ms ({}) cannot exceed {MAX_AUTO_EXPAND_DELAY_MS}",
                    self.display.auto_expand_delay_ms
                ),
            });
        }

        Ok(())
    }

    /// Load the configured dataset, falling back to the embedded one.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be read or parsed.
    pub fn load_dataset(&self) -> Result<KnowledgeBase> {
        match &self.dataset.path {
            Some(path) => KnowledgeBase::load(path),
            None => KnowledgeBase::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::dataset::EquipmentSource;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.dataset.path.is_none());
        assert_eq!(config.display.auto_expand_category, "Application");
        assert_eq!(config.display.auto_expand_delay_ms, 100);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_embed_base() {
        let mut config = Config::default();
        config.display.video_embed_base = "youtube.com/embed/".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("video_embed_base"));
    }

    #[test]
    fn test_validate_unknown_category() {
        let mut config = Config::default();
        config.display.auto_expand_category = "Safety".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("auto_expand_category"));
    }

    #[test]
    fn test_validate_delay_too_long() {
        let mut config = Config::default();
        config.display.auto_expand_delay_ms = 60_000;

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("auto_expand_delay_ms"));
    }

    #[test]
    fn test_auto_expand_disabled() {
        let mut config = Config::default();
        config.display.auto_expand_category = String::new();

        assert!(config.display.auto_expand().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_auto_expand_delay() {
        let config = Config::default();
        assert_eq!(config.display.auto_expand_delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("snap2know"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let config = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[display]\nauto_expand_category = \"Maintenance\"\nauto_expand_delay_ms = 250\n\n[output]\nformat = \"html\""
        )
        .unwrap();

        let config = Config::load_from(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.display.auto_expand_category, "Maintenance");
        assert_eq!(config.display.auto_expand_delay_ms, 250);
        assert_eq!(config.output.format, OutputFormat::Html);
    }

    #[test]
    fn test_load_invalid_toml_values_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\nvideo_embed_base = \"ftp://videos\"").unwrap();

        let err = Config::load_from(Some(file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, Error::ConfigValidation { .. }));
    }

    #[test]
    fn test_load_dataset_builtin() {
        let kb = Config::default().load_dataset().unwrap();
        assert!(kb.contains("HHP-450"));
    }

    #[test]
    fn test_load_dataset_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"L-3": {{"name": "Lathe"}}}}"#).unwrap();

        let mut config = Config::default();
        config.dataset.path = Some(file.path().to_path_buf());

        let kb = config.load_dataset().unwrap();
        assert_eq!(kb.len(), 1);
        assert!(kb.contains("L-3"));
    }

    #[test]
    fn test_display_config_serialize() {
        let json = serde_json::to_string(&DisplayConfig::default()).unwrap();
        assert!(json.contains("auto_expand_category"));
        assert!(json.contains("video_embed_base"));
    }

    #[test]
    fn test_config_clone() {
        let config = Config::default();
        assert_eq!(config.clone(), config);
    }
}

//! Application configuration, including the navigation taxonomy.

use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    navigation::NavigationModel,
};

/// Configuration compiled into the application.
const BUILTIN: &str = include_str!("../companion.toml");

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Command palette settings.
    #[serde(default)]
    pub palette: PaletteConfig,

    /// Code block settings.
    #[serde(default)]
    pub code: CodeConfig,

    /// Sidebar and search taxonomy.
    #[serde(default)]
    pub navigation: NavigationModel,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Short line shown under the title.
    #[serde(default)]
    pub tagline: Option<String>,

    /// Navigation id shown on startup.
    #[serde(default = "default_section")]
    pub default_section: String,
}

/// Command palette configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Query field placeholder.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Key that opens the palette together with Ctrl or Cmd.
    #[serde(default = "default_shortcut")]
    pub shortcut: String,
}

/// Code block configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeConfig {
    /// How long the "Copied!" acknowledgement stays up, in milliseconds.
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,
}

fn default_section() -> String {
    "overview".to_string()
}

fn default_placeholder() -> String {
    "Search topics...".to_string()
}

fn default_shortcut() -> String {
    "k".to_string()
}

fn default_copy_feedback_ms() -> u64 {
    2000
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            shortcut: default_shortcut(),
        }
    }
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            copy_feedback_ms: default_copy_feedback_ms(),
        }
    }
}

impl CodeConfig {
    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}

impl Config {
    /// The configuration shipped with the application.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN)
    }

    /// Parse and validate configuration from TOML text.
    ///
    /// Syntax and shape errors surface as [`CoreError::Toml`].
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `COMPANION__*` environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("COMPANION").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.trim().is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.palette.shortcut.is_empty() {
            return Err(CoreError::config("palette.shortcut cannot be empty"));
        }

        self.navigation.validate()?;

        if self.navigation.item_count() == 0 {
            tracing::warn!("navigation is empty; the command palette will have nothing to show");
        } else if !self.navigation.contains(&self.site.default_section) {
            return Err(CoreError::config(format!(
                "site.default_section '{}' is not a navigation id",
                self.site.default_section
            )));
        }

        Ok(())
    }

    /// Display label for a navigation id, if it exists.
    pub fn label_for(&self, id: &str) -> Option<&str> {
        self.navigation.find(id).map(|item| item.label.as_str())
    }
}

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::element::Attributes;
use crate::error::{FormRowError, Result};
use crate::i18n::DEFAULT_TEXT_DOMAIN;
use crate::status::LabelPosition;

/// CSS class appended to inputs that failed validation
pub const DEFAULT_INPUT_ERROR_CLASS: &str = "input-error";

fn default_true() -> bool {
    true
}

fn default_input_error_class() -> String {
    DEFAULT_INPUT_ERROR_CLASS.to_string()
}

fn default_text_domain() -> String {
    DEFAULT_TEXT_DOMAIN.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowConfig {
    #[serde(default)]
    pub label_position: LabelPosition,

    /// Surface rendered errors through the help block
    #[serde(default = "default_true")]
    pub render_errors: bool,

    /// Empty string disables the error class
    #[serde(default = "default_input_error_class")]
    pub input_error_class: String,

    #[serde(default = "default_text_domain")]
    pub text_domain: String,

    /// JSON translation catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translations: Option<PathBuf>,

    /// Label attributes for elements that carry none of their own
    #[serde(default)]
    pub label_attributes: Attributes,
}

impl Default for RowConfig {
    fn default() -> Self {
        Self {
            label_position: LabelPosition::Default,
            label_attributes: Attributes::new(),
            render_errors: true,
            input_error_class: default_input_error_class(),
            text_domain: default_text_domain(),
            translations: None,
        }
    }
}

impl RowConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("formrow").join("config.toml"))
    }

    /// Load config from the default location, or fall back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            tracing::warn!("Could not find config directory");
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FormRowError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| FormRowError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Save config to file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let to_err = |reason: String| FormRowError::Config {
            path: path.to_path_buf(),
            reason,
        };

        if let Some(dir) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(dir) {
                tracing::warn!("Could not create config directory: {}", e);
            }
        }

        let mut clean_config = self.clone();
        clean_config.input_error_class = clean_config.input_error_class.trim().to_string();
        clean_config.text_domain = clean_config.text_domain.trim().to_string();
        if clean_config.text_domain.is_empty() {
            clean_config.text_domain = default_text_domain();
        }

        let content = toml::to_string_pretty(&clean_config).map_err(|e| to_err(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| to_err(e.to_string()))
    }
}

//! Label translation
//!
//! A `Catalog` holds one string table per text domain, loaded from JSON:
//!
//! ```json
//! { "default": { "Email": "E-mail" }, "admin": { "Email": "Adresse" } }
//! ```
//!
//! Messages without a translation come back unchanged.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::error::{FormRowError, Result};

/// Text domain used when none is configured
pub const DEFAULT_TEXT_DOMAIN: &str = "default";

pub trait Translator {
    fn translate(&self, message: &str, text_domain: &str) -> String;
}

pub type SharedTranslator = Arc<dyn Translator>;

type Translations = HashMap<String, String>;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    domains: HashMap<String, Translations>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from its JSON form
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let domains: HashMap<String, Translations> = serde_json::from_str(json)?;
        Ok(Self { domains })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FormRowError::Catalog {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let catalog = Self::from_json(&content).map_err(|e| FormRowError::Catalog {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        tracing::debug!(
            "Loaded {} text domain(s) from {}",
            catalog.domains.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn insert(
        &mut self,
        text_domain: impl Into<String>,
        message: impl Into<String>,
        translation: impl Into<String>,
    ) {
        self.domains
            .entry(text_domain.into())
            .or_default()
            .insert(message.into(), translation.into());
    }
}

impl Translator for Catalog {
    fn translate(&self, message: &str, text_domain: &str) -> String {
        self.domains
            .get(text_domain)
            .and_then(|table| table.get(message))
            .cloned()
            .unwrap_or_else(|| message.to_string())
    }
}

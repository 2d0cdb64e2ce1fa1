//! Static site configuration: tab descriptors and the showcase catalog.
//!
//! The configuration is embedded at compile time and never changes at runtime.

pub mod catalog;
pub mod tab;

pub use catalog::{Catalog, CatalogEntry};
pub use tab::{TabBehavior, TabDescriptor};

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const BUILTIN_SITE: &str = include_str!("site.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Title shown in the sticky header
    #[serde(default)]
    pub title: String,
    pub tabs: Vec<TabDescriptor>,
    #[serde(default)]
    pub catalog: Catalog,
    /// Names listed in the playground's authors info box
    #[serde(default)]
    pub authors: Vec<String>,
}

impl SiteConfig {
    /// Parse and shape-check a configuration document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration compiled into the binary
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(BUILTIN_SITE)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tabs.is_empty() {
            return Err(ConfigError::NoTabs);
        }
        let mut seen = HashSet::new();
        for tab in &self.tabs {
            if !seen.insert(tab.id.as_str()) {
                return Err(ConfigError::DuplicateTab(tab.id.clone()));
            }
        }
        let mut seen = HashSet::new();
        for entry in self.catalog.entries() {
            if !seen.insert(entry.id.as_str()) {
                return Err(ConfigError::DuplicateCatalogEntry(entry.id.clone()));
            }
        }
        Ok(())
    }

    pub fn tab(&self, id: &str) -> Option<&TabDescriptor> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    /// Tab flagged `active`, falling back to the first declared tab
    pub fn initial_tab(&self) -> Option<&TabDescriptor> {
        self.tabs
            .iter()
            .find(|tab| tab.active)
            .or_else(|| self.tabs.first())
    }
}

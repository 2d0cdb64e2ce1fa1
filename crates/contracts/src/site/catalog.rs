use serde::{Deserialize, Serialize};

/// One demo item of the component showcase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    /// Icon font classes, e.g. "fas fa-globe-americas"
    pub icon: String,
    /// Page loaded into the embedded frame
    #[serde(default)]
    pub content_url: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl CatalogEntry {
    /// URL to load into the frame, or `None` when the placeholder must be shown
    pub fn loadable_url(&self) -> Option<&str> {
        if !self.available {
            return None;
        }
        self.content_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Ordered showcase catalog. Order defines prev/next navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// Index of the entry whose id matches a card's `data-component`
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

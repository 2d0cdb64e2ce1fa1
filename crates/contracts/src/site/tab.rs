use serde::{Deserialize, Serialize};

/// Top-level tab declared in the site configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDescriptor {
    pub id: String,
    pub label: String,
    /// URL of the HTML fragment injected when the tab is selected
    pub source: String,
    /// Marks the tab selected on startup
    #[serde(default)]
    pub active: bool,
}

/// What the loader wires up after a tab's fragment has been injected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabBehavior {
    Example,
    Api,
    Playground,
    Plain,
}

impl TabBehavior {
    /// Fixed mapping from tab id to post-load behavior
    pub fn for_tab(tab_id: &str) -> Self {
        match tab_id {
            "example" => TabBehavior::Example,
            "api" => TabBehavior::Api,
            "playground" => TabBehavior::Playground,
            _ => TabBehavior::Plain,
        }
    }

    /// Page-level fade-in tracking plus the initial in-viewport reveal
    pub fn tracks_page_sections(&self) -> bool {
        matches!(self, TabBehavior::Example | TabBehavior::Api)
    }

    pub fn tracks_api_pane(&self) -> bool {
        matches!(self, TabBehavior::Api)
    }

    /// Showcase cards and the authors info box
    pub fn wires_showcase(&self) -> bool {
        matches!(self, TabBehavior::Playground)
    }

    /// In-page anchors scrolled with header compensation
    pub fn wires_anchor_links(&self) -> bool {
        matches!(self, TabBehavior::Example)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_behavior_mapping() {
        assert_eq!(TabBehavior::for_tab("example"), TabBehavior::Example);
        assert_eq!(TabBehavior::for_tab("api"), TabBehavior::Api);
        assert_eq!(TabBehavior::for_tab("playground"), TabBehavior::Playground);
        assert_eq!(TabBehavior::for_tab("home"), TabBehavior::Plain);
    }

    #[test]
    fn test_only_example_and_api_track_page_sections() {
        assert!(TabBehavior::Example.tracks_page_sections());
        assert!(TabBehavior::Api.tracks_page_sections());
        assert!(!TabBehavior::Playground.tracks_page_sections());
        assert!(!TabBehavior::Plain.tracks_page_sections());
        assert!(TabBehavior::Api.tracks_api_pane());
        assert!(!TabBehavior::Example.tracks_api_pane());
    }
}

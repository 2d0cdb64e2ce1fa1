//! Ephemeral view state, rebuilt on every tab switch.

pub mod active_link;
pub mod load_sequence;
pub mod showcase;

pub use active_link::{ActiveLinkTracker, PaneSnapshot, PaneUpdate, SectionObservation};
pub use load_sequence::{LoadOutcome, LoadSequence, LoadTicket};
pub use showcase::{
    Direction, FramePlan, FrameState, KeyOutcome, ShowcaseModel, BLANK_FRAME, FRAME_SETTLE_MS,
};

use crate::errors::LoadError;
use crate::site::{Catalog, TabBehavior};

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    active_tab: Option<String>,
    loads: LoadSequence,
    authors_open: bool,
    pub showcase: ShowcaseModel,
    pub active_link: ActiveLinkTracker,
}

impl ViewState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            active_tab: None,
            loads: LoadSequence::default(),
            authors_open: false,
            showcase: ShowcaseModel::new(catalog),
            active_link: ActiveLinkTracker::default(),
        }
    }

    pub fn is_active(&self, tab_id: &str) -> bool {
        self.active_tab.as_deref() == Some(tab_id)
    }

    /// Behavior of the active tab; `None` before the first selection
    pub fn active_behavior(&self) -> Option<TabBehavior> {
        self.active_tab.as_deref().map(TabBehavior::for_tab)
    }

    /// Make `tab_id` the single active tab and start a new load for it.
    ///
    /// State tied to the previous fragment (open modals, highlighted link)
    /// is dropped here since its elements are about to be replaced.
    pub fn select_tab(&mut self, tab_id: &str) -> LoadTicket {
        self.active_tab = Some(tab_id.to_string());
        self.active_link.reset();
        self.showcase.close();
        self.authors_open = false;
        self.loads.begin(tab_id)
    }

    pub fn is_current_load(&self, ticket: &LoadTicket) -> bool {
        self.loads.is_current(ticket)
    }

    /// Decide what a finished fetch does to the content region.
    ///
    /// Only the latest ticket may touch it; a failure never wires anything.
    pub fn resolve_load(
        &self,
        ticket: &LoadTicket,
        result: Result<String, LoadError>,
    ) -> LoadOutcome {
        if !self.is_current_load(ticket) {
            return LoadOutcome::Stale;
        }
        match result {
            Ok(html) => LoadOutcome::Mount {
                behavior: TabBehavior::for_tab(ticket.tab_id()),
                html,
            },
            Err(err) => LoadOutcome::Failed {
                message: err.user_message(),
            },
        }
    }

    pub fn authors_open(&self) -> bool {
        self.authors_open
    }

    /// Returns whether the info box changed state
    pub fn open_authors(&mut self) -> bool {
        !std::mem::replace(&mut self.authors_open, true)
    }

    pub fn close_authors(&mut self) -> bool {
        std::mem::replace(&mut self.authors_open, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::SiteConfig;

    #[test]
    fn test_exactly_one_active_tab() {
        let config = SiteConfig::builtin().unwrap();
        let mut state = ViewState::new(config.catalog.clone());
        for tab in &config.tabs {
            state.select_tab(&tab.id);
            let active: Vec<_> = config
                .tabs
                .iter()
                .filter(|t| state.is_active(&t.id))
                .collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].id, tab.id);
        }
    }

    #[test]
    fn test_select_tab_drops_fragment_state() {
        let config = SiteConfig::builtin().unwrap();
        let mut state = ViewState::new(config.catalog);
        state.select_tab("playground");
        state.showcase.open(4);
        state.active_link.select("intro");
        assert!(state.open_authors());

        let ticket = state.select_tab("api");
        assert!(!state.showcase.is_open());
        assert!(!state.authors_open());
        assert_eq!(state.active_link.current(), None);
        assert!(state.is_current_load(&ticket));
        assert!(state.is_active("api"));
        assert_eq!(state.active_behavior(), Some(TabBehavior::Api));
    }

    #[test]
    fn test_active_behavior() {
        let mut state = ViewState::new(Catalog::default());
        assert_eq!(state.active_behavior(), None);
        state.select_tab("home");
        assert_eq!(state.active_behavior(), Some(TabBehavior::Plain));
        state.select_tab("example");
        assert_eq!(state.active_behavior(), Some(TabBehavior::Example));
    }

    #[test]
    fn test_stale_load_after_switch() {
        let mut state = ViewState::new(Catalog::default());
        let api = state.select_tab("api");
        let example = state.select_tab("example");
        assert!(!state.is_current_load(&api));
        assert!(state.is_current_load(&example));
    }

    #[test]
    fn test_api_not_found_renders_error_and_wires_nothing() {
        let mut state = ViewState::new(Catalog::default());
        let ticket = state.select_tab("api");

        let outcome = state.resolve_load(&ticket, Err(LoadError::HttpStatus(404)));
        assert_eq!(outcome.behavior(), None);
        match outcome {
            LoadOutcome::Failed { message } => {
                assert!(message.contains("404"));
                assert!(message.starts_with("Error loading content:"));
            }
            other => panic!("expected a failure, got {:?}", other),
        }
    }

    #[test]
    fn test_successful_load_mounts_tab_behavior() {
        let mut state = ViewState::new(Catalog::default());
        let ticket = state.select_tab("api");
        let outcome = state.resolve_load(&ticket, Ok("<div id=\"apiRightPane\"></div>".into()));
        assert_eq!(
            outcome,
            LoadOutcome::Mount {
                behavior: TabBehavior::Api,
                html: "<div id=\"apiRightPane\"></div>".into(),
            }
        );
    }

    #[test]
    fn test_superseded_response_is_stale_either_way() {
        let mut state = ViewState::new(Catalog::default());
        let api = state.select_tab("api");
        let example = state.select_tab("example");

        assert_eq!(state.resolve_load(&api, Ok("<p>api</p>".into())), LoadOutcome::Stale);
        assert_eq!(
            state.resolve_load(&api, Err(LoadError::HttpStatus(500))),
            LoadOutcome::Stale
        );
        assert_eq!(
            state.resolve_load(&example, Ok("<p>example</p>".into())).behavior(),
            Some(TabBehavior::Example)
        );
    }

    #[test]
    fn test_authors_toggle_reports_changes() {
        let mut state = ViewState::new(Catalog::default());
        assert!(!state.close_authors());
        assert!(state.open_authors());
        assert!(!state.open_authors());
        assert!(state.authors_open());
        assert!(state.close_authors());
        assert!(!state.authors_open());
    }
}

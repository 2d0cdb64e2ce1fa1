use crate::domain::loader::{self, ContentMount};
use crate::shared::dom;
use contracts::site::{SiteConfig, TabDescriptor};
use contracts::view_state::ViewState;
use contracts::viewport::remeasured_root_margin;
use leptos::prelude::*;

/// Site-wide controller provided through context.
///
/// Owns the view state and the wiring of the currently injected fragment.
#[derive(Clone, Copy)]
pub struct SiteContext {
    config: StoredValue<SiteConfig>,
    pub view: RwSignal<ViewState>,
    header_height: StoredValue<i32>,
    // Observers and listeners hold JS closures, which are not Send
    mount: StoredValue<Option<ContentMount>, LocalStorage>,
}

impl SiteContext {
    pub fn new(config: SiteConfig) -> Self {
        let view = ViewState::new(config.catalog.clone());
        Self {
            config: StoredValue::new(config),
            view: RwSignal::new(view),
            header_height: StoredValue::new(0),
            mount: StoredValue::new_local(None),
        }
    }

    pub fn title(&self) -> String {
        self.config.with_value(|c| c.title.clone())
    }

    pub fn tabs(&self) -> Vec<TabDescriptor> {
        self.config.with_value(|c| c.tabs.clone())
    }

    pub fn tab(&self, id: &str) -> Option<TabDescriptor> {
        self.config.with_value(|c| c.tab(id).cloned())
    }

    /// Reactive: re-runs the caller when the active tab changes
    pub fn is_active_tab(&self, id: &str) -> bool {
        self.view.with(|v| v.is_active(id))
    }

    pub fn authors(&self) -> Vec<String> {
        self.config.with_value(|c| c.authors.clone())
    }

    /// User-initiated tab switch
    pub fn select_tab(&self, id: &str) {
        loader::load_tab(*self, id, true);
    }

    /// Startup load of the configured initial tab
    pub fn load_initial(&self) {
        self.refresh_header_height();
        let initial = self.config.with_value(|c| c.initial_tab().map(|t| t.id.clone()));
        match initial {
            Some(id) => loader::load_tab(*self, &id, false),
            None => log::warn!("No tabs configured, nothing to load"),
        }
    }

    pub fn header_height(&self) -> i32 {
        self.header_height.get_value()
    }

    pub fn refresh_header_height(&self) -> i32 {
        let height = dom::sticky_header_height();
        self.header_height.set_value(height);
        height
    }

    /// Drop the current fragment wiring and install `mount` in its place
    pub fn replace_mount(&self, mount: Option<ContentMount>) {
        self.mount.set_value(mount);
    }

    /// Window resize: when the header changed height, live trackers are
    /// rebuilt with the new trigger margin without reloading the tab.
    pub fn handle_resize(&self) {
        let previous = self.header_height();
        let Some(page_margin) = remeasured_root_margin(previous, self.refresh_header_height())
        else {
            return;
        };
        let Some(container) = dom::content_container() else {
            return;
        };
        log::debug!("Header height changed, page trigger margin now {}", page_margin);
        let ctx = *self;
        self.mount.update_value(|mount| {
            if let Some(mount) = mount {
                mount.rebuild_trackers(ctx, &container, &page_margin);
            }
        });
    }
}

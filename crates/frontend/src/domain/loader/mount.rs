use crate::domain::{api_pane::ApiPane, authors, showcase};
use crate::layout::global_context::SiteContext;
use crate::shared::dom;
use crate::shared::observers::SectionTracker;
use contracts::site::TabBehavior;
use contracts::viewport::page_root_margin;
use gloo_events::{EventListener, EventListenerOptions};
use web_sys::Element;

const FADE_IN_TARGETS: &str = ".content-section.fade-in-section";
const INITIAL_REVEAL_TARGETS: &str = ".fade-in-section, .api-section-content";
const ANCHOR_LINKS: &str = "a[href^=\"#\"]";

/// Everything wired against one injected fragment.
///
/// Dropping the mount disconnects its observers and detaches its listeners.
pub struct ContentMount {
    tab_id: String,
    page_tracker: Option<SectionTracker>,
    api_pane: Option<ApiPane>,
    listeners: Vec<EventListener>,
}

impl ContentMount {
    pub fn build(ctx: SiteContext, container: &Element, tab_id: &str, behavior: TabBehavior) -> Self {
        let mut mount = Self {
            tab_id: tab_id.to_string(),
            page_tracker: None,
            api_pane: None,
            listeners: Vec::new(),
        };

        if behavior.tracks_page_sections() {
            mount.page_tracker = page_tracker(container, &page_root_margin(ctx.header_height()));
            reveal_in_viewport(container);
        }
        if behavior.wires_anchor_links() {
            mount.listeners.extend(wire_anchor_links(ctx, container));
        }
        if behavior.wires_showcase() {
            mount.listeners.extend(showcase::wire_cards(ctx, container));
            mount.listeners.extend(authors::wire(ctx, container));
        }
        if behavior.tracks_api_pane() {
            mount.api_pane = ApiPane::mount(ctx, container);
        }

        log::debug!(
            "Mounted tab '{}' ({:?}, {} listeners)",
            mount.tab_id,
            behavior,
            mount.listeners.len()
        );
        mount
    }

    /// Recreate live trackers after the header height changed
    pub fn rebuild_trackers(&mut self, ctx: SiteContext, container: &Element, page_margin: &str) {
        if self.page_tracker.is_some() {
            self.page_tracker = None;
            self.page_tracker = page_tracker(container, page_margin);
        }
        if let Some(pane) = self.api_pane.as_mut() {
            pane.rebuild_tracker(ctx, container);
        }
    }
}

impl Drop for ContentMount {
    fn drop(&mut self) {
        log::debug!("Unmounting tab '{}'", self.tab_id);
    }
}

/// Page-level fade-in: sections get `visible` once they clear the header
fn page_tracker(container: &Element, root_margin: &str) -> Option<SectionTracker> {
    let targets = dom::query_all(container, FADE_IN_TARGETS);
    let root = container.clone();
    let tracker = SectionTracker::observe(None, root_margin, &targets, move |entries| {
        for entry in entries {
            let target = entry.target();
            if entry.is_intersecting() && root.contains(Some(&*target)) {
                dom::add_class(&target, dom::VISIBLE_CLASS);
            }
        }
    });
    match tracker {
        Ok(tracker) => Some(tracker),
        Err(err) => {
            log::warn!("Failed to create section observer: {:?}", err);
            None
        }
    }
}

/// Sections already on screen are revealed without waiting for a scroll
fn reveal_in_viewport(container: &Element) {
    for section in dom::query_all(container, INITIAL_REVEAL_TARGETS) {
        if dom::is_element_in_viewport(&section) {
            dom::add_class(&section, dom::VISIBLE_CLASS);
        }
    }
}

fn wire_anchor_links(ctx: SiteContext, container: &Element) -> Vec<EventListener> {
    dom::query_all(container, ANCHOR_LINKS)
        .into_iter()
        .filter_map(|link| {
            let href = link.get_attribute("href")?;
            let target = dom::anchor_target(&href)?.to_string();
            if target.is_empty() {
                return None;
            }
            Some(EventListener::new_with_options(
                &link,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |ev| {
                    ev.prevent_default();
                    dom::scroll_to_element(&target, ctx.header_height());
                },
            ))
        })
        .collect()
}

//! API reference pane: scroll-synchronised navigation menu.
//!
//! Sections inside `#apiRightPane` are observed against the pane itself;
//! the link of the topmost visible section carries `active-api-link`.

use crate::layout::global_context::SiteContext;
use crate::shared::dom;
use crate::shared::observers::SectionTracker;
use contracts::site::TabBehavior;
use contracts::view_state::{PaneSnapshot, SectionObservation};
use contracts::viewport::{pane_scroll_target, PANE_ROOT_MARGIN};
use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{Element, IntersectionObserverEntry};

const PANE_SELECTOR: &str = "#apiRightPane";
const NAV_LINKS: &str = "#apiNavMenu .api-nav-link";
const PANE_SECTIONS: &str = "#apiRightPane .content-section, #apiRightPane .api-section-content";
const ACTIVE_LINK_CLASS: &str = "active-api-link";
const INITIAL_HIGHLIGHT_DELAY_MS: u32 = 150;

pub struct ApiPane {
    pane: Element,
    tracker: Option<SectionTracker>,
    _nav_clicks: Vec<EventListener>,
}

impl ApiPane {
    /// Wire the pane found in `container`; `None` when the fragment has no pane
    pub fn mount(ctx: SiteContext, container: &Element) -> Option<Self> {
        let Some(pane) = container.query_selector(PANE_SELECTOR).ok().flatten() else {
            log::debug!("No {} in fragment, skipping API pane", PANE_SELECTOR);
            return None;
        };

        let nav_clicks = wire_nav_links(ctx, container, &pane);
        let tracker = track_sections(ctx, container, &pane);
        if tracker.is_some() {
            schedule_initial_highlight(ctx, container.clone(), pane.clone());
        }

        Some(Self {
            pane,
            tracker,
            _nav_clicks: nav_clicks,
        })
    }

    pub fn rebuild_tracker(&mut self, ctx: SiteContext, container: &Element) {
        if self.tracker.is_none() {
            return;
        }
        self.tracker = None;
        self.tracker = track_sections(ctx, container, &self.pane);
    }
}

fn nav_links(container: &Element) -> Vec<Element> {
    dom::query_all(container, NAV_LINKS)
}

/// Section id a nav link points at; empty for links without an anchor
fn link_target(link: &Element) -> String {
    link.get_attribute("href")
        .as_deref()
        .and_then(dom::anchor_target)
        .unwrap_or_default()
        .to_string()
}

fn highlight_link(links: &[Element], section_id: &str) {
    for link in links {
        if link_target(link) == section_id {
            dom::add_class(link, ACTIVE_LINK_CLASS);
        } else {
            dom::remove_class(link, ACTIVE_LINK_CLASS);
        }
    }
}

/// Whether the pane's tab is still the active one
fn owner_active(ctx: SiteContext) -> bool {
    ctx.view
        .with_untracked(|v| v.active_behavior() == Some(TabBehavior::Api))
}

fn link_target_ids(links: &[Element]) -> Vec<String> {
    links.iter().map(link_target).collect()
}

fn wire_nav_links(ctx: SiteContext, container: &Element, pane: &Element) -> Vec<EventListener> {
    let links = nav_links(container);
    links
        .iter()
        .map(|link| {
            let container = container.clone();
            let pane = pane.clone();
            let target_id = link_target(link);
            let handler = move |ev: &web_sys::Event| {
                ev.prevent_default();
                ctx.view.update_untracked(|v| v.active_link.select(&target_id));
                highlight_link(&nav_links(&container), &target_id);

                let Some(target) = dom::find_within(&container, &target_id) else {
                    return;
                };
                let top = pane_scroll_target(
                    f64::from(pane.scroll_top()),
                    dom::client_rect(&pane).top,
                    dom::client_rect(&target).top,
                );
                dom::smooth_scroll_element(&pane, top);
            };
            EventListener::new_with_options(
                link,
                "click",
                EventListenerOptions::enable_prevent_default(),
                handler,
            )
        })
        .collect()
}

fn track_sections(ctx: SiteContext, container: &Element, pane: &Element) -> Option<SectionTracker> {
    let sections = dom::query_all(container, PANE_SECTIONS);
    if sections.is_empty() {
        return None;
    }

    let container = container.clone();
    let root = pane.clone();
    let tracker = SectionTracker::observe(Some(pane), PANE_ROOT_MARGIN, &sections, move |entries| {
        on_pane_batch(ctx, &container, &root, &entries);
    });
    match tracker {
        Ok(tracker) => Some(tracker),
        Err(err) => {
            log::warn!("Failed to create API pane observer: {:?}", err);
            None
        }
    }
}

fn on_pane_batch(
    ctx: SiteContext,
    container: &Element,
    pane: &Element,
    entries: &[IntersectionObserverEntry],
) {
    let mut targets = Vec::with_capacity(entries.len());
    let mut batch = Vec::with_capacity(entries.len());
    for entry in entries {
        let target = entry.target();
        if !pane.contains(Some(&*target)) {
            continue;
        }
        batch.push(SectionObservation {
            section_id: target.id(),
            top: entry.bounding_client_rect().top(),
            intersecting: entry.is_intersecting(),
        });
        targets.push(target);
    }

    let links = nav_links(container);
    let link_targets = link_target_ids(&links);
    let snapshot = PaneSnapshot {
        owner_active: owner_active(ctx),
        scroll_top: f64::from(pane.scroll_top()),
        link_targets: &link_targets,
    };

    let mut update = None;
    ctx.view
        .update_untracked(|v| update = Some(v.active_link.observe(&batch, snapshot)));
    let Some(update) = update.filter(|u| u.is_applied()) else {
        // Callbacks can still arrive after the user switched away
        return;
    };

    for (target, observation) in targets.iter().zip(&batch) {
        if observation.intersecting
            && (dom::has_class(target, "fade-in-section")
                || dom::has_class(target, "api-section-content"))
        {
            dom::add_class(target, dom::VISIBLE_CLASS);
        }
    }
    if let Some(section_id) = update.highlight() {
        highlight_link(&links, section_id);
    }
}

/// Highlight the first link if the pane opens at its top with nothing selected
fn schedule_initial_highlight(ctx: SiteContext, container: Element, pane: Element) {
    spawn_local(async move {
        TimeoutFuture::new(INITIAL_HIGHLIGHT_DELAY_MS).await;
        if !pane.is_connected() {
            return;
        }

        let links = nav_links(&container);
        let link_targets = link_target_ids(&links);
        let snapshot = PaneSnapshot {
            owner_active: owner_active(ctx),
            scroll_top: f64::from(pane.scroll_top()),
            link_targets: &link_targets,
        };
        let mut update = None;
        ctx.view
            .update_untracked(|v| update = v.active_link.settle_initial(snapshot));
        if let Some(section_id) = update {
            highlight_link(&links, &section_id);
        }

        // Nudge the pane so the observer reports its initial state
        pane.set_scroll_top(pane.scroll_top() + 1);
        pane.set_scroll_top(pane.scroll_top() - 1);
    });
}

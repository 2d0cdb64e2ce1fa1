//! Tab content loader.
//!
//! Fetches a tab's fragment, swaps it into the content region and wires the
//! components that tab needs. Each load carries a ticket from the view
//! state; a response that is no longer the latest request is dropped.

pub mod mount;

pub use mount::ContentMount;

use crate::layout::global_context::SiteContext;
use crate::shared::{api_utils, dom, mathjax};
use contracts::site::TabBehavior;
use contracts::view_state::LoadOutcome;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::Element;

/// Activate `tab_id` and load its fragment.
///
/// `reset_scroll` re-measures the sticky header and jumps to the page top
/// once the load settled, as a user-initiated switch does.
pub fn load_tab(ctx: SiteContext, tab_id: &str, reset_scroll: bool) {
    let Some(tab) = ctx.tab(tab_id) else {
        log::warn!("Unknown tab '{}'", tab_id);
        return;
    };
    let Some(ticket) = ctx.view.try_update(|v| v.select_tab(&tab.id)) else {
        return;
    };
    log::debug!("Loading tab '{}' from {}", tab.id, tab.source);

    spawn_local(async move {
        let result = api_utils::fetch_fragment(&tab.source).await;
        let outcome = ctx.view.with_untracked(|v| v.resolve_load(&ticket, result));
        let Some(container) = dom::content_container() else {
            log::warn!("Content container #{} not found", dom::CONTENT_CONTAINER_ID);
            return;
        };

        if reset_scroll && outcome != LoadOutcome::Stale {
            ctx.refresh_header_height();
        }
        match outcome {
            LoadOutcome::Stale => {
                log::debug!("Discarding stale response for tab '{}'", ticket.tab_id());
                return;
            }
            LoadOutcome::Mount { behavior, html } => {
                mount_fragment(ctx, &container, ticket.tab_id(), behavior, &html)
            }
            LoadOutcome::Failed { message } => {
                log::error!("Error loading tab content from {}: {}", tab.source, message);
                ctx.replace_mount(None);
                dom::set_body_scroll_locked(false);
                dom::render_error(&container, &message);
            }
        }

        if reset_scroll {
            dom::scroll_window_to(0.0, false);
        }
    });
}

fn mount_fragment(
    ctx: SiteContext,
    container: &Element,
    tab_id: &str,
    behavior: TabBehavior,
    html: &str,
) {
    // Disconnect the previous wiring before its elements are discarded
    ctx.replace_mount(None);
    container.set_inner_html(html);
    dom::set_body_scroll_locked(false);
    mathjax::typeset(container);

    let mount = ContentMount::build(ctx, container, tab_id, behavior);
    ctx.replace_mount(Some(mount));
}

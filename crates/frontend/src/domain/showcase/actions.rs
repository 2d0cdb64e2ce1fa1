use crate::layout::global_context::SiteContext;
use crate::shared::dom;
use contracts::view_state::{Direction, FramePlan, KeyOutcome, FRAME_SETTLE_MS};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub fn open_by_id(ctx: SiteContext, id: &str) {
    let plan = ctx.view.try_update(|v| v.showcase.open_by_id(id)).flatten();
    match plan {
        Some(plan) => start_frame(ctx, plan),
        None => log::debug!("No catalog entry for card '{}'", id),
    }
}

pub fn navigate(ctx: SiteContext, direction: Direction) {
    if let Some(plan) = ctx.view.try_update(|v| v.showcase.navigate(direction)).flatten() {
        start_frame(ctx, plan);
    }
}

pub fn close(ctx: SiteContext) {
    if !ctx.view.with_untracked(|v| v.showcase.is_open()) {
        return;
    }
    ctx.view.update(|v| {
        v.showcase.close();
    });
    dom::set_body_scroll_locked(false);
}

pub fn handle_key(ctx: SiteContext, key: &str) {
    if !ctx.view.with_untracked(|v| v.showcase.is_open()) {
        return;
    }
    match ctx.view.try_update(|v| v.showcase.handle_key(key)) {
        Some(KeyOutcome::Closed) => dom::set_body_scroll_locked(false),
        Some(KeyOutcome::Navigated(plan)) => start_frame(ctx, plan),
        _ => {}
    }
}

pub fn frame_loaded(ctx: SiteContext) {
    ctx.view.update(|v| {
        v.showcase.frame_loaded();
    });
}

pub fn frame_failed(ctx: SiteContext) {
    let failed = ctx.view.try_update(|v| v.showcase.frame_failed()).unwrap_or(false);
    if failed {
        log::warn!("Showcase frame failed to load");
    }
}

/// The frame was just cleared; point it at the entry after the settle delay
/// so the blank page is applied before the next load starts.
fn start_frame(ctx: SiteContext, plan: FramePlan) {
    dom::set_body_scroll_locked(true);
    let FramePlan::Settle { generation } = plan else {
        return;
    };
    spawn_local(async move {
        TimeoutFuture::new(FRAME_SETTLE_MS).await;
        if ctx.view.with_untracked(|v| v.showcase.is_current(generation)) {
            ctx.view.update(|v| {
                v.showcase.settle(generation);
            });
        }
    });
}

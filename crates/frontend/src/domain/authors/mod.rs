//! Authors info box: the playground fragment carries the `#authorsBox`
//! trigger, the shell renders the overlay it opens.

use crate::layout::global_context::SiteContext;
use crate::shared::dom;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use gloo_events::EventListener;
use leptos::prelude::window_event_listener;
use leptos::prelude::*;
use web_sys::Element;

const INFO_BOX_SELECTOR: &str = "#authorsBox";

pub fn open(ctx: SiteContext) {
    if ctx.view.try_update(|v| v.open_authors()).unwrap_or(false) {
        dom::set_body_scroll_locked(true);
    }
}

pub fn close(ctx: SiteContext) {
    if ctx.view.try_update(|v| v.close_authors()).unwrap_or(false) {
        dom::set_body_scroll_locked(false);
    }
}

/// Wire the info box of a freshly injected fragment.
///
/// Returns no listeners when the fragment carries no info box.
pub fn wire(ctx: SiteContext, container: &Element) -> Vec<EventListener> {
    let Some(info_box) = container.query_selector(INFO_BOX_SELECTOR).ok().flatten() else {
        log::debug!("No {} in fragment", INFO_BOX_SELECTOR);
        return Vec::new();
    };
    vec![EventListener::new(&info_box, "click", move |_| open(ctx))]
}

#[component]
pub fn AuthorsModal() -> impl IntoView {
    let ctx = use_context::<SiteContext>().expect("SiteContext not provided");
    let is_open = Memo::new(move |_| ctx.view.with(|v| v.authors_open()));

    let _ = window_event_listener(leptos::ev::keydown, move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" && ctx.view.with_untracked(|v| v.authors_open()) {
            close(ctx);
        }
    });

    view! {
        <ModalFrame
            id="authorsModal"
            open=is_open
            on_close=Callback::new(move |_| close(ctx))
            modal_class="authors-modal".to_string()
        >
            <div class="modal-header">
                <h2 class="modal-title">"Authors"</h2>
                <button
                    id="closeModal"
                    class="button button--icon modal__close"
                    on:click=move |_| close(ctx)
                >
                    {icon("x")}
                </button>
            </div>
            <ul class="modal-body authors-list">
                {ctx
                    .authors()
                    .into_iter()
                    .map(|name| view! { <li>{name}</li> })
                    .collect_view()}
            </ul>
        </ModalFrame>
    }
}

use super::actions;
use crate::layout::global_context::SiteContext;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::view_state::{Direction, FrameState};
use leptos::prelude::*;
use leptos::prelude::window_event_listener;

/// Showcase modal: header with the open entry, prev/next navigation and the
/// embedded demo frame with its loading and placeholder states.
#[component]
pub fn ShowcaseModal() -> impl IntoView {
    let ctx = use_context::<SiteContext>().expect("SiteContext not provided");
    let view = ctx.view;

    let is_open = Memo::new(move |_| view.with(|v| v.showcase.is_open()));
    let frame_state = Memo::new(move |_| view.with(|v| v.showcase.frame_state()));
    let frame_src = Memo::new(move |_| view.with(|v| v.showcase.frame_source().to_string()));
    let prev_disabled = Memo::new(move |_| view.with(|v| v.showcase.prev_disabled()));
    let next_disabled = Memo::new(move |_| view.with(|v| v.showcase.next_disabled()));

    let title = move || {
        view.with(|v| v.showcase.current().map(|e| e.title.clone()).unwrap_or_default())
    };
    let subtitle = move || {
        view.with(|v| v.showcase.current().map(|e| e.subtitle.clone()).unwrap_or_default())
    };
    let icon_class = move || {
        view.with(|v| v.showcase.current().map(|e| e.icon.clone()).unwrap_or_default())
    };

    // Keyboard contract while open: Escape closes, arrows navigate
    let _ = window_event_listener(leptos::ev::keydown, move |ev: leptos::ev::KeyboardEvent| {
        actions::handle_key(ctx, &ev.key());
    });

    view! {
        <ModalFrame
            id="componentModal"
            open=is_open
            on_close=Callback::new(move |_| actions::close(ctx))
            modal_class="component-modal".to_string()
        >
            <div class="modal-header">
                <div class="modal-component-icon">
                    <i class=icon_class></i>
                </div>
                <div class="modal-heading">
                    <h2 id="modalTitle" class="modal-title">{title}</h2>
                    <p id="modalSubtitle" class="modal-subtitle">{subtitle}</p>
                </div>
                <div class="modal-header-actions">
                    <button
                        id="prevComponent"
                        class="button button--icon"
                        title="Previous component"
                        disabled=move || prev_disabled.get()
                        on:click=move |_| actions::navigate(ctx, Direction::Previous)
                    >
                        {icon("chevron-left")}
                    </button>
                    <button
                        id="nextComponent"
                        class="button button--icon"
                        title="Next component"
                        disabled=move || next_disabled.get()
                        on:click=move |_| actions::navigate(ctx, Direction::Next)
                    >
                        {icon("chevron-right")}
                    </button>
                    <button
                        id="closeComponentModal"
                        class="button button--icon modal__close"
                        on:click=move |_| actions::close(ctx)
                    >
                        {icon("x")}
                    </button>
                </div>
            </div>
            <div class="modal-body">
                <div
                    id="iframeLoading"
                    class="iframe-loading"
                    style:display=move || {
                        if frame_state.get() == Some(FrameState::Loading) { "flex" } else { "none" }
                    }
                >
                    <div class="spinner"></div>
                    <p>"Loading component..."</p>
                </div>
                <div
                    id="iframeComingSoon"
                    class="iframe-coming-soon"
                    class:hidden=move || frame_state.get() != Some(FrameState::Failed)
                >
                    <i class="fas fa-tools"></i>
                    <h3>"Coming Soon"</h3>
                    <p>"This interactive component is not available yet."</p>
                </div>
                <iframe
                    id="componentIframe"
                    class="component-iframe"
                    src=move || frame_src.get()
                    style:display=move || {
                        if frame_state.get() == Some(FrameState::Ready) { "block" } else { "none" }
                    }
                    on:load=move |_| actions::frame_loaded(ctx)
                    on:error=move |_| actions::frame_failed(ctx)
                ></iframe>
            </div>
        </ModalFrame>
    }
}

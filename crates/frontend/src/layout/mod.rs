pub mod center;
pub mod global_context;
pub mod scroll_top;
pub mod top_header;

use crate::domain::authors::AuthorsModal;
use crate::domain::showcase::ShowcaseModal;
use crate::shared::dom;
use center::Center;
use global_context::SiteContext;
use leptos::prelude::window_event_listener;
use leptos::prelude::*;
use scroll_top::ScrollToTopButton;
use top_header::TopHeader;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |   TopHeader (sticky, primary tabs)       |
/// +------------------------------------------+
/// |   Center (#mainContentContainer)         |
/// +------------------------------------------+
///     ShowcaseModal, AuthorsModal, ScrollToTopButton (overlays)
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = leptos::context::use_context::<SiteContext>().expect("SiteContext not found");

    let _ = window_event_listener(leptos::ev::resize, move |_ev: leptos::ev::UiEvent| {
        ctx.handle_resize();
    });

    // Hero call-to-action buttons inside fragments switch tabs
    let _ = window_event_listener(leptos::ev::click, move |ev: leptos::ev::MouseEvent| {
        if let Some(tab_id) = dom::cta_target(&ev) {
            ev.prevent_default();
            ctx.select_tab(&tab_id);
        }
    });

    // The content container exists once the shell is mounted
    Effect::new(move |_| ctx.load_initial());

    view! {
        <div class="site-layout">
            <TopHeader />
            <Center />
            <ShowcaseModal />
            <AuthorsModal />
            <ScrollToTopButton />
        </div>
    }
}

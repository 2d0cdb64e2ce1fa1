use crate::shared::{dom, icons::icon};
use contracts::viewport::scroll_top_button_visible;
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::window_event_listener;
use leptos::prelude::*;
use leptos::task::spawn_local;

const FADE_OUT_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonChange {
    FadeIn,
    FadeOut,
    Keep,
}

/// Transition for the button given the page offset and its current opacity
fn button_change(page_y_offset: f64, opaque: bool) -> ButtonChange {
    match (scroll_top_button_visible(page_y_offset), opaque) {
        (true, false) => ButtonChange::FadeIn,
        (false, true) => ButtonChange::FadeOut,
        _ => ButtonChange::Keep,
    }
}

/// Floating button that appears once the page is scrolled down.
#[component]
pub fn ScrollToTopButton() -> impl IntoView {
    let shown = RwSignal::new(false);
    let opaque = RwSignal::new(false);

    // Dropping a pending frame cancels it
    let fade_in: StoredValue<Option<AnimationFrame>, LocalStorage> = StoredValue::new_local(None);

    let _ = window_event_listener(leptos::ev::scroll, move |_ev: leptos::ev::Event| {
        match button_change(dom::page_y_offset(), opaque.get_untracked()) {
            ButtonChange::FadeIn => {
                shown.set(true);
                let frame = request_animation_frame(move |_| opaque.set(true));
                fade_in.set_value(Some(frame));
            }
            ButtonChange::FadeOut => {
                fade_in.set_value(None);
                opaque.set(false);
                spawn_local(async move {
                    TimeoutFuture::new(FADE_OUT_MS).await;
                    if !opaque.get_untracked() {
                        shown.set(false);
                    }
                });
            }
            ButtonChange::Keep => {}
        }
    });

    view! {
        <button
            id="scrollToTopBtn"
            class="scroll-to-top"
            title="Back to top"
            style:display=move || if shown.get() { "flex" } else { "none" }
            style:opacity=move || if opaque.get() { "1" } else { "0" }
            on:click=move |_| dom::scroll_window_to(0.0, true)
        >
            {icon("arrow-up")}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fades_in_past_threshold() {
        assert_eq!(button_change(240.0, false), ButtonChange::FadeIn);
        assert_eq!(button_change(240.0, true), ButtonChange::Keep);
    }

    #[test]
    fn test_fades_out_near_top() {
        assert_eq!(button_change(40.0, true), ButtonChange::FadeOut);
        assert_eq!(button_change(40.0, false), ButtonChange::Keep);
    }
}

use crate::shared::dom::CONTENT_CONTAINER_ID;
use leptos::prelude::*;

/// Content region. Its children are owned by the tab loader, which replaces
/// them wholesale on every load; nothing reactive renders inside it.
#[component]
pub fn Center() -> impl IntoView {
    view! {
        <main id=CONTENT_CONTAINER_ID class="main-content-container">
            <p class="content-placeholder">"Loading..."</p>
        </main>
    }
}

//! TopHeader component - sticky site header with the primary tab bar.

use crate::layout::global_context::SiteContext;
use contracts::site::TabDescriptor;
use leptos::prelude::*;

/// TopHeader component - sticky header; its height offsets scroll targets.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<SiteContext>().expect("SiteContext not found");

    let tabs = ctx
        .tabs()
        .into_iter()
        .map(|tab| view! { <TabButton tab=tab /> })
        .collect_view();

    view! {
        <header class="sticky-header">
            <div class="sticky-header__brand">
                <span class="sticky-header__title">{ctx.title()}</span>
            </div>
            <nav id="primaryTabsNav" class="tabs-nav">
                {tabs}
            </nav>
        </header>
    }
}

#[component]
fn TabButton(tab: TabDescriptor) -> impl IntoView {
    let ctx =
        leptos::context::use_context::<SiteContext>().expect("SiteContext not found");

    let id_for_active = tab.id.clone();
    let is_active = Memo::new(move |_| ctx.is_active_tab(&id_for_active));

    let id_for_click = tab.id.clone();
    let on_click = move |_| ctx.select_tab(&id_for_click);

    view! {
        <button
            class="tab-button"
            class:active=move || is_active.get()
            data-tab=tab.id
            data-source=tab.source
            on:click=on_click
        >
            {tab.label}
        </button>
    }
}

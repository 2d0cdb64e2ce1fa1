use crate::layout::global_context::SiteContext;
use crate::layout::Shell;
use contracts::site::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    match SiteConfig::builtin() {
        Ok(config) => {
            // Provide the site controller to the whole app via context.
            provide_context(SiteContext::new(config));
            view! { <Shell /> }.into_any()
        }
        Err(err) => {
            log::error!("Site configuration rejected: {}", err);
            view! {
                <p class="text-red-500 text-center">
                    {format!("Site configuration error: {}", err)}
                </p>
            }
            .into_any()
        }
    }
}

use super::actions;
use crate::layout::global_context::SiteContext;
use crate::shared::dom;
use gloo_events::EventListener;
use web_sys::Element;

const CARD_SELECTOR: &str = ".component-card";
const DEMO_BUTTON_SELECTOR: &str = ".demo-button";

/// A card opens the showcase only when its demo button exists and is enabled
fn is_enabled(card: &Element) -> bool {
    match card.query_selector(DEMO_BUTTON_SELECTOR) {
        Ok(Some(button)) => !button.has_attribute("disabled"),
        _ => false,
    }
}

pub fn wire_cards(ctx: SiteContext, container: &Element) -> Vec<EventListener> {
    dom::query_all(container, CARD_SELECTOR)
        .into_iter()
        .filter(is_enabled)
        .filter_map(|card| {
            let id = card.get_attribute("data-component")?;
            Some(EventListener::new(&card, "click", move |_| {
                actions::open_by_id(ctx, &id)
            }))
        })
        .collect()
}

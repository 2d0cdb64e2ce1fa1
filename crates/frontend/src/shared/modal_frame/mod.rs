use leptos::ev;
use leptos::prelude::*;

/// Modal frame container (overlay + positioned surface).
///
/// The overlay stays in the DOM and is shown through the `show` class, so
/// closing never removes the element that dispatched the click.
#[component]
pub fn ModalFrame(
    /// DOM id of the overlay element.
    #[prop(into)]
    id: String,
    /// Whether the overlay is shown.
    #[prop(into)]
    open: Signal<bool>,
    /// Called when the modal should close (overlay click).
    on_close: Callback<()>,
    /// Extra class for the modal surface (`div.modal-content`).
    #[prop(optional)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only if both press and release happened on the overlay itself,
    // so a text selection dragged outside the panel keeps the modal open.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            on_close.run(());
        }
    };

    let surface_class = match modal_class {
        Some(cls) => format!("modal-content {cls}"),
        None => "modal-content".to_string(),
    };

    view! {
        <div
            id=id
            class="modal"
            class:show=move || open.get()
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=surface_class>
                {children()}
            </div>
        </div>
    }
}

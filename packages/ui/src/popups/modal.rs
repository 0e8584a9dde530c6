use dioxus::prelude::*;

/// A full-screen backdrop that centers its children in a popup window.
/// Clicking the backdrop, but not the window, triggers `on_close`.
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    #[props(default)] id: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "popup-backdrop",
            id: "{id}",
            onclick: move |_| on_close.call(()),
            div {
                class: "window",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

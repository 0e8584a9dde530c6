use dioxus::prelude::*;

use crate::session::use_app_state;

/// The self-dismissing alert banner.
#[component]
pub fn AlertBanner() -> Element {
    let state = use_app_state();
    let alert = state.read().popups().alert().cloned();
    rsx! {
        if let Some(alert) = alert {
            p { key: "{alert.id}", class: "alert", role: "alert", "{alert.message}" }
        }
    }
}

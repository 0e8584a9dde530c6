use dioxus::prelude::*;
use ui::{AccountPopups, AlertBanner, Header};

use crate::Route;

/// Header and popups around whichever page is routed.
#[component]
pub fn Shell() -> Element {
    rsx! {
        Header {}
        AlertBanner {}
        main {
            id: "content",
            Outlet::<Route> {}
        }
        AccountPopups {}
    }
}

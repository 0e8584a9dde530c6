use dioxus::prelude::*;

use crate::session::PageContent;

/// Server-rendered error page shown in place of the page body.
#[component]
pub fn PageError(body: String) -> Element {
    rsx! {
        div { class: "page-error", dangerous_inner_html: "{body}" }
    }
}

/// The page data once it has loaded, or what to show until then.
pub(crate) fn ready<T>(content: PageContent<T>) -> Result<T, Element> {
    match content {
        PageContent::Ready(data) => Ok(data),
        PageContent::Loading => Err(rsx! { p { class: "loading", "Loading..." } }),
        PageContent::Blocked => Err(rsx! {}),
        PageContent::Error(body) => Err(rsx! { PageError { body } }),
    }
}

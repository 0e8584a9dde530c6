use dioxus::prelude::*;
use store::{NavLink, Page, Popup};

use crate::session::{sign_out, use_api, use_app_state, use_config, use_search_text};

/// Site header: account controls, page links and the search box.
#[component]
pub fn Header() -> Element {
    let mut state = use_app_state();
    let api = use_api();
    let config = use_config();
    let mut search_text = use_search_text();
    let nav = use_navigator();

    let signed_in = state.read().is_signed_in();
    let active = state.read().active_link();

    let on_search = move |evt: FormEvent| {
        evt.prevent_default();
        let query = search_text();
        nav.push(Page::Search { query }.path());
    };

    rsx! {
        header {
            nav {
                class: "top",
                h1 { class: "logo", Link { to: "/", "Bookshelf" } }
                ul {
                    if signed_in {
                        li {
                            class: "account-exit",
                            a {
                                id: "sign-out-button",
                                href: "#",
                                onclick: move |evt: Event<MouseData>| {
                                    evt.prevent_default();
                                    sign_out(state, api.clone(), &config);
                                },
                                "Sign out"
                            }
                        }
                    } else {
                        li {
                            class: "account-enter",
                            a {
                                id: "sign-in-button",
                                href: "#",
                                onclick: move |evt: Event<MouseData>| {
                                    evt.prevent_default();
                                    state.write().popups_mut().show_sign_in(false);
                                },
                                "Sign in"
                            }
                        }
                        li {
                            class: "account-enter",
                            a {
                                id: "sign-up-button",
                                href: "#",
                                onclick: move |evt: Event<MouseData>| {
                                    evt.prevent_default();
                                    state.write().popups_mut().show(Popup::SignUp);
                                },
                                "Sign up"
                            }
                        }
                    }
                }
            }
            nav {
                class: "bottom",
                ul {
                    for link in NavLink::ALL {
                        li {
                            key: "{link.label()}",
                            Link {
                                class: if active == Some(link) { "active" } else { "" },
                                to: link.page().path(),
                                "{link.label()}"
                            }
                        }
                    }
                }
                form {
                    class: "search",
                    onsubmit: on_search,
                    input {
                        r#type: "search",
                        placeholder: "Search books, authors and genres",
                        value: search_text(),
                        oninput: move |evt| search_text.set(evt.value()),
                    }
                }
            }
        }
    }
}

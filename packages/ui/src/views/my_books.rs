use api::models::{ListEntry, MoveEntryRequest};
use dioxus::prelude::*;
use store::controller::{self, MyBooksPage};
use store::navigation::list_fragment;
use store::render::move_button;
use store::Page;

use super::page_error::ready;
use crate::session::{
    report_error, use_api, use_app_state, use_config, use_page_data, use_page_enter, use_session,
    PageContent,
};
use crate::stars::RatingSummary;

/// The user's reading lists. `list` is the bookmark from the URL fragment.
#[component]
pub fn MyBooksView(#[props(default)] list: String) -> Element {
    use_page_enter(Page::MyBooks);
    let state = use_app_state();
    let api = use_api();
    let config = use_config();
    let session = use_session();
    let nav = use_navigator();
    let mut new_list = use_signal(String::new);

    // Follows the open list so a reload reopens it rather than the mount-time bookmark.
    let mut bookmark = use_signal(|| list.clone());
    let mut content = use_page_data(move |api, session| {
        let bookmark = bookmark.peek().clone();
        async move { controller::load_my_books(&api, session.as_deref(), Some(&bookmark)).await }
    });

    // Fetch the entries of list `index` and show them.
    let open_list = {
        let api = api.clone();
        let config = config.clone();
        move |index: usize| {
            let Some(token) = session() else { return };
            let Some(list) = content.with(|c| match c {
                PageContent::Ready(page) => page.lists.get(index).cloned(),
                _ => None,
            }) else {
                return;
            };
            nav.replace(format!("{}#{}", Page::MyBooks.path(), list_fragment(&list.name)));
            let api = api.clone();
            let config = config.clone();
            spawn(async move {
                match api.list_entries(&token, list.id).await {
                    Ok(entries) => {
                        let opened = content.with_mut(|c| match c {
                            PageContent::Ready(page) => {
                                page.selected = Some(index);
                                page.entries = entries;
                                page.bookmark()
                            }
                            _ => None,
                        });
                        if let Some(opened) = opened {
                            bookmark.set(opened);
                        }
                    }
                    Err(e) => report_error(state, &config, &e),
                }
            });
        }
    };

    let data = match ready(content()) {
        Ok(data) => data,
        Err(view) => return view,
    };
    let MyBooksPage {
        lists,
        selected,
        entries,
    } = data;
    let current = selected.and_then(|i| lists.get(i).cloned());
    let move_action = move_button(&entries);

    let on_create = {
        let api = api.clone();
        let config = config.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let name = new_list().trim().to_string();
            let Some(token) = session() else { return };
            if name.is_empty() {
                return;
            }
            let api = api.clone();
            let config = config.clone();
            let mut state = state;
            spawn(async move {
                match api.create_list(&token, &name).await {
                    Ok(()) => {
                        new_list.set(String::new());
                        state.write().request_reload();
                    }
                    Err(e) => report_error(state, &config, &e),
                }
            });
        }
    };

    rsx! {
        div {
            class: "my-books",
            aside {
                class: "list-names",
                ul {
                    for (index, list) in lists.iter().cloned().enumerate() {
                        li {
                            key: "{list.id}",
                            class: if selected == Some(index) { "active" } else { "" },
                            a {
                                href: "#",
                                onclick: {
                                    let open_list = open_list.clone();
                                    move |evt: Event<MouseData>| {
                                        evt.prevent_default();
                                        open_list(index);
                                    }
                                },
                                "{list.name}"
                            }
                            if !config.is_permanent_list(&list.name) {
                                DeleteListButton { list_id: list.id }
                            }
                        }
                    }
                }
                form {
                    class: "new-list",
                    onsubmit: on_create,
                    input {
                        name: "list-name",
                        placeholder: "New list",
                        value: new_list(),
                        oninput: move |evt| new_list.set(evt.value()),
                    }
                    button { r#type: "submit", "Create" }
                }
            }
            section {
                class: "list-entries",
                if let Some(list) = current {
                    h2 { "{list.name}" }
                    if entries.books.is_empty() {
                        if let Some(meta) = &entries.meta {
                            p { class: "meta", "{meta}" }
                        }
                    }
                    for entry in entries.books.iter().cloned() {
                        ListEntryRow {
                            key: "{entry.id}",
                            entry,
                            list_id: list.id,
                            move_label: move_action.as_ref().map(|m| m.label.clone()),
                            move_target: move_action.as_ref().map(|m| m.target_list_id),
                            on_changed: {
                                let open_list = open_list.clone();
                                move |_| open_list(selected.unwrap_or_default())
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DeleteListButton(list_id: u64) -> Element {
    let mut state = use_app_state();
    let api = use_api();
    let config = use_config();
    let session = use_session();

    rsx! {
        button {
            class: "delete-list",
            title: "Delete list",
            onclick: move |_| {
                let Some(token) = session() else { return };
                let api = api.clone();
                let config = config.clone();
                spawn(async move {
                    match api.remove_list(&token, list_id).await {
                        Ok(()) => state.write().request_reload(),
                        Err(e) => report_error(state, &config, &e),
                    }
                });
            },
            "×"
        }
    }
}

#[component]
fn ListEntryRow(
    entry: ListEntry,
    list_id: u64,
    move_label: Option<String>,
    move_target: Option<u64>,
    on_changed: EventHandler<()>,
) -> Element {
    let state = use_app_state();
    let api = use_api();
    let config = use_config();
    let session = use_session();
    let book_id = entry.id;

    let on_remove = {
        let api = api.clone();
        let config = config.clone();
        move |_| {
            let Some(token) = session() else { return };
            let api = api.clone();
            let config = config.clone();
            spawn(async move {
                match api.remove_list_entry(&token, list_id, book_id).await {
                    Ok(()) => on_changed.call(()),
                    Err(e) => report_error(state, &config, &e),
                }
            });
        }
    };

    let on_move = move |_| {
        let (Some(token), Some(target_list_id)) = (session(), move_target) else {
            return;
        };
        let request = MoveEntryRequest {
            session_id: token,
            list_id,
            book_id,
            target_list_id,
        };
        let api = api.clone();
        let config = config.clone();
        spawn(async move {
            match api.move_list_entry(&request).await {
                Ok(()) => on_changed.call(()),
                Err(e) => report_error(state, &config, &e),
            }
        });
    };

    rsx! {
        article {
            class: "list-entry",
            if let Some(cover) = &entry.cover {
                Link {
                    to: Page::Book { id: book_id.to_string() }.path(),
                    img { class: "cover", src: "{cover}", alt: "{entry.title}" }
                }
            }
            div {
                class: "details",
                Link { class: "title", to: Page::Book { id: book_id.to_string() }.path(), "{entry.title}" }
                Link { class: "author", to: Page::Author { id: entry.author_id.to_string() }.path(), "{entry.author}" }
                RatingSummary { average: entry.average_rating, count: entry.num_reviews }
                ul {
                    class: "genres",
                    for genre in entry.genres.iter().cloned() {
                        li {
                            key: "{genre}",
                            Link { to: Page::Genre { name: genre.clone() }.path(), "{genre}" }
                        }
                    }
                }
                div { class: "synopsis", dangerous_inner_html: "{entry.synopsis}" }
                p { class: "date-added", "Added {entry.date_added}" }
            }
            div {
                class: "entry-actions",
                if let Some(label) = move_label {
                    button { class: "move", onclick: on_move, "{label}" }
                }
                button { class: "remove", onclick: on_remove, "Remove" }
            }
        }
    }
}

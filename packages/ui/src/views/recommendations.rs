use api::models::{AuthorChoice, Recommendation, Recommendations};
use dioxus::prelude::*;
use store::controller;
use store::layout::three_columns;
use store::render::{added_on, match_strength};
use store::Page;

use super::page_error::ready;
use crate::session::{
    report_error, use_api, use_app_state, use_config, use_page_data, use_page_enter, use_session,
};
use crate::stars::RatingSummary;

#[component]
pub fn RecommendationsView() -> Element {
    use_page_enter(Page::Recommendations);
    let content = use_page_data(|api, session| async move {
        controller::load_recommendations(&api, session.as_deref()).await
    });

    let data = match ready(content()) {
        Ok(data) => data,
        Err(view) => return view,
    };

    match data {
        Recommendations::NewUser { authors } => rsx! { PreferenceForm { authors } },
        Recommendations::Ranked {
            items,
            want_to_read_list,
        } => rsx! { RankedList { items, want_to_read_list } },
    }
}

/// First visit: pick favourite authors so there is something to rank on.
#[component]
fn PreferenceForm(authors: Vec<AuthorChoice>) -> Element {
    let mut state = use_app_state();
    let api = use_api();
    let config = use_config();
    let session = use_session();
    let mut chosen = use_signal(Vec::<u64>::new);
    let mut submitting = use_signal(|| false);
    let columns = three_columns(&authors);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(token) = session() else { return };
        if submitting() {
            return;
        }
        submitting.set(true);
        let ids = chosen();
        let api = api.clone();
        let config = config.clone();
        spawn(async move {
            let result = api.set_preferences(&token, &ids).await;
            submitting.set(false);
            match result {
                Ok(()) => state.write().request_reload(),
                Err(e) => report_error(state, &config, &e),
            }
        });
    };

    rsx! {
        div {
            class: "recommendations new-user",
            h2 { "Tell us which authors you like" }
            form {
                onsubmit: on_submit,
                div {
                    class: "author-columns",
                    for (i, column) in columns.into_iter().enumerate() {
                        ul {
                            key: "{i}",
                            class: "author-column",
                            for author in column {
                                li {
                                    key: "{author.id}",
                                    label {
                                        input {
                                            r#type: "checkbox",
                                            name: "author",
                                            value: "{author.id}",
                                            checked: chosen.read().contains(&author.id),
                                            onchange: move |evt| {
                                                let mut ids = chosen.write();
                                                ids.retain(|id| *id != author.id);
                                                if evt.checked() {
                                                    ids.push(author.id);
                                                }
                                            },
                                        }
                                        "{author.name}"
                                    }
                                }
                            }
                        }
                    }
                }
                button { r#type: "submit", class: "primary", disabled: submitting(), "Get recommendations" }
            }
        }
    }
}

#[component]
fn RankedList(items: Vec<Recommendation>, want_to_read_list: Option<u64>) -> Element {
    let hidden = use_signal(Vec::<u64>::new);
    let visible: Vec<Recommendation> = items
        .into_iter()
        .filter(|item| !hidden.read().contains(&item.book_id))
        .collect();

    rsx! {
        div {
            class: "recommendations",
            h2 { "Recommended for you" }
            if visible.is_empty() {
                p { class: "meta", "No recommendations yet. Add some books to your lists." }
            }
            for item in visible {
                RecommendationCard { key: "{item.book_id}", item, want_to_read_list, hidden }
            }
        }
    }
}

#[component]
fn RecommendationCard(item: Recommendation, want_to_read_list: Option<u64>, hidden: Signal<Vec<u64>>) -> Element {
    let state = use_app_state();
    let api = use_api();
    let config = use_config();
    let session = use_session();
    let book_id = item.book_id;
    let mut hidden = hidden;

    let on_remove = {
        let api = api.clone();
        let config = config.clone();
        move |_| {
            let Some(token) = session() else { return };
            let api = api.clone();
            let config = config.clone();
            spawn(async move {
                match api.remove_recommendation(&token, book_id).await {
                    Ok(()) => hidden.write().push(book_id),
                    Err(e) => report_error(state, &config, &e),
                }
            });
        }
    };

    let on_accept = move |_| {
        let (Some(token), Some(list_id)) = (session(), want_to_read_list) else {
            return;
        };
        let api = api.clone();
        let config = config.clone();
        spawn(async move {
            match api.accept_recommendation(&token, book_id, list_id).await {
                Ok(()) => hidden.write().push(book_id),
                Err(e) => report_error(state, &config, &e),
            }
        });
    };

    let book_path = Page::Book { id: book_id.to_string() }.path();
    let strength = match_strength(item.certainty);
    let added = added_on(&item.date_added);

    rsx! {
        article {
            class: "recommendation",
            if let Some(cover) = &item.cover_image {
                Link { to: book_path.clone(), img { class: "cover", src: "{cover}", alt: "{item.title}" } }
            }
            div {
                class: "details",
                Link { class: "title", to: book_path, "{item.title}" }
                Link { class: "author", to: Page::Author { id: item.author_id.to_string() }.path(), "{item.author_name}" }
                RatingSummary { average: item.average_rating, count: item.number_ratings }
                ul {
                    class: "genres",
                    for genre in item.genres.iter().cloned() {
                        li {
                            key: "{genre}",
                            Link { to: Page::Genre { name: genre.clone() }.path(), "{genre}" }
                        }
                    }
                }
                div { class: "synopsis", dangerous_inner_html: "{item.synopsis}" }
                p { class: "match-strength", "{strength}" }
                if let Some(added) = added {
                    p { class: "date-added", "{added}" }
                }
            }
            div {
                class: "entry-actions",
                if want_to_read_list.is_some() {
                    button { class: "accept", onclick: on_accept, "Want to read" }
                }
                button { class: "remove", onclick: on_remove, "Not interested" }
            }
        }
    }
}

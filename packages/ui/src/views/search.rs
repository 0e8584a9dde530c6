use api::models::SearchResult;
use dioxus::prelude::*;
use store::controller;
use store::render::match_strength;
use store::{Page, SearchPlan};

use super::page_error::ready;
use crate::session::{
    use_api, use_page_enter, use_search_sequencer, use_search_text, PageContent,
};

/// Results for `query`. Only the most recent query may fill the page.
#[component]
pub fn SearchView(query: String) -> Element {
    use_page_enter(Page::Search { query: query.clone() });
    let api = use_api();
    let mut sequencer = use_search_sequencer();
    let mut search_text = use_search_text();
    let mut results = use_signal(|| PageContent::<controller::SearchView>::Loading);

    use_effect(use_reactive((&query,), move |(query,)| {
        search_text.set(query.clone());
        let plan = sequencer.write().submit(&query);
        let api = api.clone();
        spawn(async move {
            let outcome = controller::run_search(&api, &plan).await;
            if let SearchPlan::Fetch { ticket, .. } = &plan {
                if !sequencer.read().is_current(*ticket) {
                    tracing::debug!("dropping stale results for {query:?}");
                    return;
                }
            }
            results.set(match outcome {
                Ok(view) => PageContent::Ready(view),
                Err(e) => PageContent::Error(e.page_body()),
            });
        });
    }));

    let rows = match ready(results()) {
        Ok(controller::SearchView::Results(rows)) => rows,
        Ok(controller::SearchView::NoResults) => {
            return rsx! {
                div { class: "search-results", p { class: "no-results", "No results found" } }
            }
        }
        Err(view) => return view,
    };

    rsx! {
        div {
            class: "search-results",
            for (i, row) in rows.into_iter().enumerate() {
                SearchRow { key: "{i}", row }
            }
        }
    }
}

#[component]
fn SearchRow(row: SearchResult) -> Element {
    let strength = match_strength(row.certainty());
    match row {
        SearchResult::Author { name, author_id, .. } => rsx! {
            div {
                class: "search-row author-row",
                span { class: "kind", "Author" }
                Link { to: Page::Author { id: author_id.to_string() }.path(), "{name}" }
                p { class: "match-strength", "{strength}" }
            }
        },
        SearchResult::Book {
            book_id,
            title,
            author,
            cover,
            ..
        } => rsx! {
            div {
                class: "search-row book-row",
                if let Some(cover) = cover {
                    img { class: "cover", src: "{cover}", alt: "{title}" }
                }
                Link { to: Page::Book { id: book_id.to_string() }.path(), "{title}" }
                span { class: "author", "{author}" }
                p { class: "match-strength", "{strength}" }
            }
        },
        SearchResult::Genre { name, .. } => rsx! {
            div {
                class: "search-row genre-row",
                span { class: "kind", "Genre" }
                Link { to: Page::Genre { name: name.clone() }.path(), "{name}" }
                p { class: "match-strength", "{strength}" }
            }
        },
    }
}

use dioxus::prelude::*;
use store::controller;
use store::render::visible_row;
use store::Page;

use super::page_error::ready;
use crate::book_card::SummaryRow;
use crate::session::{use_page_data, use_page_enter};

#[component]
pub fn BrowseView() -> Element {
    use_page_enter(Page::Browse);
    let content = use_page_data(|api, session| async move {
        controller::load_browse(&api, session.as_deref()).await
    });

    let data = match ready(content()) {
        Ok(data) => data,
        Err(view) => return view,
    };
    let because_added_title = data
        .because_added_title
        .clone()
        .unwrap_or_else(|| "Because you added".to_string());
    let because_read_title = data
        .because_read_title
        .clone()
        .unwrap_or_else(|| "Because you read".to_string());

    rsx! {
        div {
            class: "browse",
            SummaryRow { title: "Trending", books: data.trending }
            SummaryRow { title: "Newest Additions", books: data.newest_additions }
            SummaryRow { title: "Highly Rated", books: data.highly_rated }
            if let Some(books) = visible_row(data.because_added.as_ref()) {
                SummaryRow { title: because_added_title, books: books.to_vec() }
            }
            if let Some(books) = visible_row(data.because_read.as_ref()) {
                SummaryRow { title: because_read_title, books: books.to_vec() }
            }
            if let Some(books) = visible_row(data.favourite_authors.as_ref()) {
                SummaryRow { title: "From Your Favourite Authors", books: books.to_vec() }
            }
        }
    }
}

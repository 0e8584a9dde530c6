use dioxus::prelude::*;
use store::controller;
use store::render::visible_row;
use store::Page;

use super::page_error::ready;
use crate::book_card::SummaryRow;
use crate::session::{use_page_data, use_page_enter};

#[component]
pub fn HomeView() -> Element {
    use_page_enter(Page::Home);
    let content = use_page_data(|api, session| async move {
        controller::load_home(&api, session.as_deref()).await
    });

    let data = match ready(content()) {
        Ok(data) => data,
        Err(view) => return view,
    };

    rsx! {
        div {
            class: "home",
            if let Some(books) = visible_row(data.currently_reading.as_ref()) {
                SummaryRow { title: "Currently Reading", books: books.to_vec() }
            }
            if let Some(books) = visible_row(data.want_read.as_ref()) {
                SummaryRow { title: "Want to Read", books: books.to_vec() }
            }
            if let Some(books) = visible_row(data.recommended.as_ref()) {
                SummaryRow { title: "Recommended for You", books: books.to_vec() }
            }
            SummaryRow { title: "Trending", books: data.trending }
            SummaryRow { title: "Newest Additions", books: data.newest_additions }
        }
    }
}

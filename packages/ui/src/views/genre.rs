use dioxus::prelude::*;
use store::controller;
use store::Page;

use super::page_error::ready;
use crate::book_card::BookCard;
use crate::session::{use_page_data, use_page_enter};

#[component]
pub fn GenreView(name: String) -> Element {
    use_page_enter(Page::Genre { name: name.clone() });
    let content = use_page_data(move |api, _session| {
        let name = name.clone();
        async move { controller::load_genre(&api, &name).await }
    });

    let genre = match ready(content()) {
        Ok(genre) => genre,
        Err(view) => return view,
    };

    rsx! {
        div {
            class: "genre",
            h1 { "{genre.name}" }
            div { class: "about", dangerous_inner_html: "{genre.about}" }
            div {
                class: "books",
                for book in genre.books {
                    BookCard { key: "{book.book_id}", book }
                }
            }
        }
    }
}

use std::time::Duration;

use api::models::BookSummary;
use dioxus::prelude::*;
use store::layout::visible_per_row;
use store::Page;

use crate::session::use_config;
use crate::timer::sleep;

/// Cover, title and author of one book, linking to its page.
#[component]
pub fn BookCard(book: BookSummary) -> Element {
    let to = Page::Book {
        id: book.book_id.to_string(),
    }
    .path();
    rsx! {
        Link {
            class: "book-summary",
            to,
            if let Some(cover) = &book.cover {
                img { class: "cover", src: "{cover}", alt: "{book.title}" }
            }
            p { class: "title", "{book.title}" }
            if let Some(author) = &book.author {
                p { class: "author", "{author}" }
            }
        }
    }
}

/// Width of the element carrying the returned handler, updated at most once
/// per debounce interval while the window is being resized. The first
/// measurement is applied immediately.
pub fn use_debounced_width() -> (Signal<f64>, impl FnMut(Event<ResizeData>) + Clone) {
    let debounce_ms = use_config().ui.resize_debounce_ms;
    let mut width = use_signal(|| 0.0_f64);
    let mut generation = use_signal(|| 0_u64);

    let on_resize = move |evt: Event<ResizeData>| {
        let Ok(size) = evt.get_content_box_size() else {
            return;
        };
        if width() == 0.0 {
            width.set(size.width);
            return;
        }
        let ticket = generation() + 1;
        generation.set(ticket);
        spawn(async move {
            sleep(Duration::from_millis(u64::from(debounce_ms))).await;
            if generation() == ticket {
                width.set(size.width);
            }
        });
    };
    (width, on_resize)
}

/// A titled row of book cards trimmed to what fits in one line.
#[component]
pub fn SummaryRow(title: String, books: Vec<BookSummary>) -> Element {
    let card_width = use_config().ui.summary_card_width;
    let (width, on_resize) = use_debounced_width();
    let visible = visible_per_row(width(), card_width);

    rsx! {
        section {
            class: "row",
            h2 { "{title}" }
            div {
                class: "books",
                onresize: on_resize,
                for book in books.into_iter().take(visible) {
                    BookCard { key: "{book.book_id}", book }
                }
            }
        }
    }
}

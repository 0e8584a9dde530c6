use dioxus::prelude::*;
use store::controller;
use store::render::author_books;
use store::Page;

use super::page_error::ready;
use crate::book_card::BookCard;
use crate::follow::FollowControl;
use crate::session::{use_page_data, use_page_enter};
use crate::stars::RatingSummary;

#[component]
pub fn AuthorView(id: String) -> Element {
    use_page_enter(Page::Author { id: id.clone() });
    let content = use_page_data(move |api, _session| {
        let id = id.clone();
        async move { controller::load_author(&api, &id).await }
    });

    let author = match ready(content()) {
        Ok(author) => author,
        Err(view) => return view,
    };
    let books = author_books(&author);

    rsx! {
        div {
            class: "author",
            section {
                class: "author-header",
                h1 { "{author.name}" }
                RatingSummary { average: author.average_rating, count: author.num_ratings }
                // The author endpoint carries no session, so the toggle starts unfollowed.
                FollowControl { author_id: author.author_id, following: false, followers: author.num_followers }
                ul {
                    class: "genres",
                    for genre in author.genres.iter().cloned() {
                        li {
                            key: "{genre}",
                            Link { to: Page::Genre { name: genre.clone() }.path(), "{genre}" }
                        }
                    }
                }
                div { class: "about", dangerous_inner_html: "{author.about}" }
            }
            section {
                class: "author-books",
                h2 { "Books" }
                div {
                    class: "books",
                    for book in books {
                        BookCard { key: "{book.book_id}", book }
                    }
                }
            }
        }
    }
}

//! Route targets. Each keys its page on the route parameters so a change of
//! book, author, genre or query mounts a fresh page and fetches again.

use dioxus::prelude::*;
use store::Page;
use ui::views::{
    AuthorView, BookView, BrowseView, DiaryView, GenreView, HomeView, MyBooksView,
    RecommendationsView, SearchView,
};

mod shell;
pub use shell::Shell;

#[component]
pub fn Home() -> Element {
    rsx! { HomeView {} }
}

#[component]
pub fn Browse() -> Element {
    rsx! { BrowseView {} }
}

/// The bookmark only picks the list opened first; selecting another list
/// rewrites it without remounting the page.
#[component]
pub fn MyBooks(list: String) -> Element {
    let initial = use_hook(|| list.clone());
    rsx! { MyBooksView { list: initial } }
}

#[component]
pub fn Diary() -> Element {
    rsx! { DiaryView {} }
}

#[component]
pub fn Recommendations() -> Element {
    rsx! { RecommendationsView {} }
}

#[component]
pub fn Search(query: String) -> Element {
    rsx! { SearchView { key: "{query}", query } }
}

#[component]
pub fn Book(id: String) -> Element {
    rsx! { BookView { key: "{id}", id } }
}

#[component]
pub fn Author(id: String) -> Element {
    rsx! { AuthorView { key: "{id}", id } }
}

#[component]
pub fn Genre(name: String) -> Element {
    rsx! { GenreView { key: "{name}", name } }
}

/// Unmatched paths. Misspelt static slugs such as `/My-Books` or `/home`
/// resolve through [`Page::from_path`] and are replaced by the canonical path.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    let path = format!("/{}", segments.join("/"));
    let canonical = canonical_path(&path);

    use_effect(use_reactive((&canonical,), move |(canonical,)| {
        if let Some(to) = canonical {
            nav.replace(to);
        }
    }));

    if canonical.is_some() {
        return rsx! {};
    }
    tracing::warn!("no page at {path}");
    rsx! {
        div {
            class: "page-error",
            h1 { "404 Not Found" }
            p { "There is nothing at {path}." }
            Link { to: "/", "Back to the home page" }
        }
    }
}

/// Canonical path for `path` when it names a page under another spelling.
pub(crate) fn canonical_path(path: &str) -> Option<String> {
    Page::from_path(path)
        .map(|page| page.path())
        .filter(|canonical| canonical != path)
}

use api::models::{BookAbout, BookSummary, Review, UserReview};
use dioxus::prelude::*;
use store::controller::{self, BookPage};
use store::layout::similar_books_visible;
use store::render::{distribution_bars, reader_stats, ReviewView};
use store::{Page, Popup};

use super::page_error::ready;
use crate::book_card::{use_debounced_width, BookCard};
use crate::follow::FollowControl;
use crate::icons::FaCheck;
use crate::popups::ModalOverlay;
use crate::review_fields::{use_review_inputs, ReviewFields};
use crate::session::{
    expire_session, report_error, report_submit_error, show_alert, use_api, use_app_state,
    use_config, use_page_data, use_page_enter, use_session, PageContent,
};
use crate::stars::{RatingSummary, StarIcons};
use crate::Icon;

#[component]
pub fn BookView(id: String) -> Element {
    use_page_enter(Page::Book { id: id.clone() });
    let state = use_app_state();
    let book_id: Option<u64> = id.parse().ok();

    let fetch_id = id.clone();
    let mut content = use_page_data(move |api, session| {
        let id = fetch_id.clone();
        async move { controller::load_book(&api, &id, session.as_deref()).await }
    });

    let BookPage {
        about,
        list_targets,
    } = match ready(content()) {
        Ok(data) => data,
        Err(view) => return view,
    };
    let list_popup_open = book_id
        .is_some_and(|book_id| state.read().popups().is_open(&Popup::ListSelection { book_id }));
    let own_review = about.current_user_review.clone();
    let can_review = state.read().is_signed_in() && own_review.is_none();

    rsx! {
        div {
            class: "book",
            BookHeader { about: about.clone(), book_id }
            AuthorPanel {
                author_id: about.author_id,
                name: about.author.clone(),
                about: about.author_about.clone(),
                following: about.author_following,
                followers: about.author_number_followers,
            }
            if let Some(similar) = about.similar_books.clone().filter(|books| !books.is_empty()) {
                SimilarBooks { books: similar }
            }
            section {
                class: "reviews",
                h2 { "Reviews" }
                if let Some(review) = own_review {
                    CurrentUserReview { review }
                }
                if let (true, Some(book_id)) = (can_review, book_id) {
                    LeaveReview { book_id }
                }
                if about.reviews.is_empty() {
                    p { class: "meta", "No one has reviewed this book yet." }
                }
                for review in about.reviews.iter().cloned() {
                    ReviewCard { key: "{review.id}", review }
                }
            }
            if let (true, Some(book_id)) = (list_popup_open, book_id) {
                ListSelection {
                    book_id,
                    targets: list_targets,
                    on_added: move |list_id: u64| {
                        content.with_mut(|c| {
                            if let PageContent::Ready(page) = c {
                                for target in page.list_targets.iter_mut().filter(|t| t.id == list_id) {
                                    target.has_book = true;
                                }
                            }
                        });
                    },
                }
            }
        }
    }
}

#[component]
fn BookHeader(about: BookAbout, book_id: Option<u64>) -> Element {
    let mut state = use_app_state();
    let stats = reader_stats(&about);
    let bars = distribution_bars(&about);

    let on_add_to_list = move |_| {
        let mut state = state.write();
        if !state.is_signed_in() {
            state.popups_mut().show_sign_in(false);
        } else if let Some(book_id) = book_id {
            state.popups_mut().show(Popup::ListSelection { book_id });
        }
    };

    rsx! {
        section {
            class: "book-header",
            if let Some(cover) = &about.cover_image {
                img { class: "cover", src: "{cover}", alt: "{about.title}" }
            }
            div {
                class: "book-info",
                h1 { class: "title", "{about.title}" }
                Link { class: "author", to: Page::Author { id: about.author_id.to_string() }.path(), "{about.author}" }
                RatingSummary { average: about.average_rating, count: about.num_ratings }
                ul {
                    class: "genres",
                    for genre in about.genres.iter().cloned() {
                        li {
                            key: "{genre}",
                            Link { to: Page::Genre { name: genre.clone() }.path(), "{genre}" }
                        }
                    }
                }
                div { class: "synopsis", dangerous_inner_html: "{about.synopsis}" }
                dl {
                    class: "metadata",
                    if let Some(date) = &about.release_date {
                        dt { "Released" }
                        dd { "{date}" }
                    }
                    if let Some(isbn) = &about.isbn {
                        dt { "ISBN" }
                        dd { "{isbn}" }
                    }
                }
                div {
                    class: "book-actions",
                    button { class: "primary", onclick: on_add_to_list, "Add to list" }
                    if let Some(link) = &about.purchase_link {
                        a { class: "purchase", href: "{link}", target: "_blank", rel: "noopener", "Buy" }
                    }
                }
            }
            ul {
                class: "reader-stats",
                for stat in stats {
                    li {
                        key: "{stat.caption}",
                        span { class: "count", "{stat.count}" }
                        " {stat.qualifier} {stat.caption}"
                    }
                }
            }
            div {
                class: "rating-distribution",
                for bar in bars {
                    div {
                        key: "{bar.stars}",
                        class: "bar-row",
                        span { class: "bar-stars", "{bar.stars} star" }
                        div {
                            class: "bar",
                            div { class: "bar-fill", style: "width: {bar.percentage}%" }
                        }
                        span { class: "bar-percentage", "{bar.label()}%" }
                        span { class: "bar-count", "({bar.count})" }
                    }
                }
            }
        }
    }
}

/// Author blurb with a follow toggle and live follower count.
#[component]
fn AuthorPanel(author_id: u64, name: String, about: String, following: bool, followers: u64) -> Element {
    rsx! {
        section {
            class: "author-panel",
            h2 {
                Link { to: Page::Author { id: author_id.to_string() }.path(), "{name}" }
            }
            FollowControl { author_id, following, followers }
            div { class: "about", dangerous_inner_html: "{about}" }
        }
    }
}

#[component]
fn SimilarBooks(books: Vec<BookSummary>) -> Element {
    let card_width = use_config().ui.summary_card_width;
    let (width, on_resize) = use_debounced_width();
    let visible = similar_books_visible(width(), card_width);

    rsx! {
        section {
            class: "similar-books",
            h2 { "Similar books" }
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

#[component]
fn ReviewBody(view: ReviewView) -> Element {
    rsx! {
        for line in view.ratings {
            div {
                key: "{line.label}",
                class: "user-rating",
                span { "{line.label}" }
                StarIcons { icons: line.stars }
            }
        }
        if let Some(summary) = view.summary {
            h3 { class: "summary", "{summary}" }
        }
        if let Some(body) = view.body {
            p { class: "review-body", "{body}" }
        }
    }
}

#[component]
fn ReviewCard(review: Review) -> Element {
    let view = ReviewView::from(&review);
    rsx! {
        article {
            class: "review",
            p { class: "reviewer", "{review.username}" span { class: "date", " {review.date_added}" } }
            ReviewBody { view }
        }
    }
}

#[component]
fn CurrentUserReview(review: UserReview) -> Element {
    let mut state = use_app_state();
    let api = use_api();
    let config = use_config();
    let session = use_session();
    let review_id = review.review_id;
    let view = ReviewView::from(&review);

    let on_delete = move |_| {
        let Some(token) = session() else { return };
        let api = api.clone();
        let config = config.clone();
        spawn(async move {
            match api.delete_review(&token, review_id).await {
                Ok(()) => state.write().request_reload(),
                Err(e) => report_error(state, &config, &e),
            }
        });
    };

    rsx! {
        article {
            class: "review own-review",
            h3 { "Your review" }
            ReviewBody { view }
            button { class: "delete-review", onclick: on_delete, "Delete review" }
        }
    }
}

#[component]
fn LeaveReview(book_id: u64) -> Element {
    let mut state = use_app_state();
    let api = use_api();
    let config = use_config();
    let session = use_session();
    let mut inputs = use_review_inputs();
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(token) = session() else { return };
        let form = inputs.form();
        if let Err(e) = form.validate(&token, book_id) {
            show_alert(state, &config, e.to_string());
            return;
        }
        if submitting() {
            return;
        }
        submitting.set(true);
        let api = api.clone();
        let config = config.clone();
        spawn(async move {
            let result = controller::submit_review(&api, &token, book_id, &form).await;
            submitting.set(false);
            match result {
                Ok(()) => {
                    inputs.clear();
                    state.write().request_reload();
                }
                Err(e) => report_submit_error(state, &config, e),
            }
        });
    };

    rsx! {
        form {
            class: "leave-review",
            onsubmit: on_submit,
            h3 { "Leave a review" }
            ReviewFields { inputs }
            button { r#type: "submit", class: "primary", disabled: submitting(), "Submit review" }
        }
    }
}

/// Popup listing the user's reading lists. Lists that already hold the book
/// are marked and cannot be chosen again.
#[component]
fn ListSelection(book_id: u64, targets: Vec<api::models::ListTarget>, on_added: EventHandler<u64>) -> Element {
    let mut state = use_app_state();
    let api = use_api();
    let config = use_config();
    let session = use_session();

    let mut close = move || {
        state.write().dismiss_popups();
    };

    rsx! {
        ModalOverlay {
            id: "list-selection",
            on_close: move |_| close(),
            h2 { "Add to list" }
            ul {
                class: "list-targets",
                for target in targets {
                    li {
                        key: "{target.id}",
                        button {
                            class: if target.has_book { "list-target inactive" } else { "list-target" },
                            disabled: target.has_book,
                            onclick: {
                                let api = api.clone();
                                let config = config.clone();
                                move |_| {
                                    let Some(token) = session() else { return };
                                    if !state.write().popups_mut().begin_submit() {
                                        return;
                                    }
                                    let api = api.clone();
                                    let config = config.clone();
                                    let list_id = target.id;
                                    spawn(async move {
                                        let result = api.add_list_entry(&token, list_id, book_id).await;
                                        state.write().popups_mut().finish_submit();
                                        match result {
                                            Ok(()) => {
                                                on_added.call(list_id);
                                                state.write().dismiss_popups();
                                            }
                                            Err(e) if e.is_session_expired() => expire_session(state, &config),
                                            Err(_) => show_alert(state, &config, controller::GENERIC_FAILURE),
                                        }
                                    });
                                }
                            },
                            "{target.list_name}"
                            if target.has_book {
                                Icon { icon: FaCheck, width: 12, height: 12 }
                            }
                        }
                    }
                }
            }
            button { r#type: "button", class: "cancel-button", onclick: move |_| close(), "Cancel" }
        }
    }
}

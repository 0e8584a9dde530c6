use api::models::{BookSummary, DiaryEntry};
use dioxus::prelude::*;
use store::controller;
use store::render::entry_ratings;
use store::validation::DiaryEntryForm;
use store::{Page, Popup};

use super::page_error::ready;
use crate::popups::ModalOverlay;
use crate::review_fields::{use_review_inputs, ReviewFields};
use crate::session::{
    report_error, report_submit_error, show_alert, use_api, use_app_state, use_config,
    use_page_data, use_page_enter, use_session,
};
use crate::stars::{RatingSummary, StarIcons};

#[component]
pub fn DiaryView() -> Element {
    use_page_enter(Page::Diary);
    let mut state = use_app_state();
    let content = use_page_data(|api, session| async move {
        controller::load_diary(&api, session.as_deref()).await
    });

    let data = match ready(content()) {
        Ok(data) => data,
        Err(view) => return view,
    };
    let popup_open = state.read().popups().is_open(&Popup::DiaryEntry);

    rsx! {
        div {
            class: "diary",
            div {
                class: "diary-header",
                h2 { "Diary" }
                button {
                    class: "primary",
                    onclick: move |_| state.write().popups_mut().show(Popup::DiaryEntry),
                    "New entry"
                }
            }
            if data.entries.is_empty() {
                p { class: "meta", "You have no diary entries yet." }
            }
            for entry in data.entries {
                DiaryEntryCard { key: "{entry.entry_id}", entry }
            }
            if popup_open {
                NewDiaryEntry { books: data.books }
            }
        }
    }
}

#[component]
fn DiaryEntryCard(entry: DiaryEntry) -> Element {
    let mut state = use_app_state();
    let api = use_api();
    let config = use_config();
    let session = use_session();
    let entry_id = entry.entry_id;
    let ratings = entry_ratings(entry.overall_rating, entry.plot_rating, entry.character_rating);

    let on_delete = move |_| {
        let Some(token) = session() else { return };
        let api = api.clone();
        let config = config.clone();
        spawn(async move {
            match api.delete_diary_entry(&token, entry_id).await {
                Ok(()) => state.write().request_reload(),
                Err(e) => report_error(state, &config, &e),
            }
        });
    };

    rsx! {
        article {
            class: "diary-entry",
            if let Some(cover) = &entry.cover_image {
                Link {
                    to: Page::Book { id: entry.book_id.to_string() }.path(),
                    img { class: "cover", src: "{cover}", alt: "{entry.title}" }
                }
            }
            div {
                class: "details",
                Link { class: "title", to: Page::Book { id: entry.book_id.to_string() }.path(), "{entry.title}" }
                Link { class: "author", to: Page::Author { id: entry.author_id.to_string() }.path(), "{entry.author_name}" }
                RatingSummary { average: entry.average_rating, count: entry.number_ratings }
                p { class: "date-added", "{entry.date_added}" }
                p { class: "pages-read", "Pages read: {entry.pages_read}" }
                for line in ratings {
                    div {
                        key: "{line.label}",
                        class: "user-rating",
                        span { "{line.label}" }
                        StarIcons { icons: line.stars }
                    }
                }
                if let Some(summary) = &entry.summary {
                    h3 { class: "summary", "{summary}" }
                }
                if let Some(thoughts) = &entry.thoughts {
                    p { class: "thoughts", "{thoughts}" }
                }
            }
            button { class: "delete-entry", onclick: on_delete, "Delete" }
        }
    }
}

/// Popup for logging progress on a book being read.
#[component]
fn NewDiaryEntry(books: Vec<BookSummary>) -> Element {
    let mut state = use_app_state();
    let api = use_api();
    let config = use_config();
    let session = use_session();
    let mut inputs = use_review_inputs();
    let mut form = use_signal(DiaryEntryForm::default);

    let mut close = move || {
        state.write().dismiss_popups();
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(token) = session() else { return };
        let mut entry = form();
        entry.review = inputs.form();
        if let Err(e) = entry.validate(&token) {
            show_alert(state, &config, e.to_string());
            return;
        }
        if !state.write().popups_mut().begin_submit() {
            return;
        }
        let api = api.clone();
        let config = config.clone();
        spawn(async move {
            let result = controller::submit_diary_entry(&api, &token, &entry).await;
            state.write().popups_mut().finish_submit();
            match result {
                Ok(()) => {
                    inputs.clear();
                    form.set(DiaryEntryForm::default());
                    state.write().dismiss_popups();
                    state.write().request_reload();
                }
                Err(e) => report_submit_error(state, &config, e),
            }
        });
    };

    let completed = form.read().completed();
    let as_review = form.read().as_review();

    rsx! {
        ModalOverlay {
            id: "diary-entry",
            on_close: move |_| close(),
            h2 { "New diary entry" }
            form {
                onsubmit: on_submit,
                label { "Book"
                    select {
                        name: "book",
                        onchange: move |evt| form.write().book_id = evt.value().parse().ok(),
                        option { value: "", "Select a book" }
                        for book in books {
                            option { key: "{book.book_id}", value: "{book.book_id}", "{book.title}" }
                        }
                    }
                }
                label { "Pages read"
                    input {
                        name: "pages-read",
                        r#type: "number",
                        min: "0",
                        value: form.read().pages_read.clone(),
                        oninput: move |evt| form.write().pages_read = evt.value(),
                    }
                }
                ReviewFields { inputs }
                label { class: "checkbox",
                    input {
                        name: "completed",
                        r#type: "checkbox",
                        checked: completed,
                        onchange: move |evt| form.write().set_completed(evt.checked()),
                    }
                    "I have finished this book"
                }
                if completed {
                    label { class: "checkbox",
                        input {
                            name: "as-review",
                            r#type: "checkbox",
                            checked: as_review,
                            onchange: move |evt| form.write().set_as_review(evt.checked()),
                        }
                        "Publish as a review"
                    }
                }
                div {
                    class: "form-actions",
                    button { r#type: "submit", class: "primary", "Add entry" }
                    button { r#type: "button", class: "cancel-button", onclick: move |_| close(), "Cancel" }
                }
            }
        }
    }
}

//! # Page controllers: fetch sequencing and outcome classification
//!
//! Each page's data load and each popup submission is a plain `async fn` over
//! an [`ApiClient`], so the decision of whether a request is sent at all, and
//! what the page shows afterwards, is tested against [`api::MemoryTransport`]
//! without a browser. Views call these and apply the result to [`AppState`].
//!
//! [`AppState`]: crate::AppState

use api::models::{
    AuthorAbout, BookAbout, BrowseData, DiaryData, GenreAbout, HomeData, ListEntries,
    ListTarget, ReadingListName, Recommendations, SearchResult, SignInRequest,
};
use api::{ApiClient, ApiError, Transport};
use thiserror::Error;

use crate::navigation::list_fragment;
use crate::render::initial_list;
use crate::search::SearchPlan;
use crate::validation::{DiaryEntryForm, ReviewForm, SignUpForm, ValidationError};

/// Shown when a request fails for any reason other than an expired session.
pub const GENERIC_FAILURE: &str = "Something went wrong";

/// Result of a page-level load.
#[derive(Clone, Debug, PartialEq)]
pub enum Loaded<T> {
    Ready(T),
    /// Anonymous visitor on a sign-in-only page; nothing was fetched.
    SignInRequired,
    /// The server answered 403.
    SessionExpired,
    /// Any other failure. Holds the markup for the main content region.
    Failed(String),
}

impl<T> Loaded<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Loaded::Ready(value),
            Err(ApiError::SessionExpired) => Loaded::SessionExpired,
            Err(e) => Loaded::Failed(e.page_body()),
        }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, Loaded::SessionExpired)
    }
}

async fn authenticated<T, F, Fut>(session: Option<&str>, fetch: F) -> Loaded<T>
where
    F: FnOnce(String) -> Fut,
    Fut: std::future::Future<Output = Result<T, ApiError>>,
{
    match session {
        Some(token) => Loaded::from_result(fetch(token.to_string()).await),
        None => Loaded::SignInRequired,
    }
}

pub async fn load_home<T: Transport>(api: &ApiClient<T>, session: Option<&str>) -> Loaded<HomeData> {
    Loaded::from_result(api.home(session).await)
}

pub async fn load_browse<T: Transport>(api: &ApiClient<T>, session: Option<&str>) -> Loaded<BrowseData> {
    Loaded::from_result(api.browse(session).await)
}

/// Book page data plus, for a signed-in user, the lists the book can be
/// added to. A failure of the second request leaves the list popup empty.
#[derive(Clone, Debug, PartialEq)]
pub struct BookPage {
    pub about: BookAbout,
    pub list_targets: Vec<ListTarget>,
}

pub async fn load_book<T: Transport>(
    api: &ApiClient<T>,
    book_id: &str,
    session: Option<&str>,
) -> Loaded<BookPage> {
    let about = match api.book_about(book_id, session).await {
        Ok(about) => about,
        Err(e) => return Loaded::from_result(Err(e)),
    };
    let list_targets = match session {
        Some(token) => match api.list_targets(token, book_id).await {
            Ok(targets) => targets,
            Err(ApiError::SessionExpired) => return Loaded::SessionExpired,
            Err(_) => Vec::new(),
        },
        None => Vec::new(),
    };
    Loaded::Ready(BookPage {
        about,
        list_targets,
    })
}

pub async fn load_author<T: Transport>(api: &ApiClient<T>, author_id: &str) -> Loaded<AuthorAbout> {
    Loaded::from_result(api.author_about(author_id).await)
}

pub async fn load_genre<T: Transport>(api: &ApiClient<T>, genre_name: &str) -> Loaded<GenreAbout> {
    Loaded::from_result(api.genre_about(genre_name).await)
}

#[derive(Clone, Debug, PartialEq)]
pub struct MyBooksPage {
    pub lists: Vec<ReadingListName>,
    /// Index into `lists` of the open list.
    pub selected: Option<usize>,
    pub entries: ListEntries,
}

impl MyBooksPage {
    /// Bookmark of the open list, for reopening it after the lists reload.
    pub fn bookmark(&self) -> Option<String> {
        self.selected
            .and_then(|i| self.lists.get(i))
            .map(|list| list_fragment(&list.name))
    }
}

/// Fetch the user's lists, then the entries of the bookmarked (or first) list.
pub async fn load_my_books<T: Transport>(
    api: &ApiClient<T>,
    session: Option<&str>,
    fragment: Option<&str>,
) -> Loaded<MyBooksPage> {
    authenticated(session, |token| async move {
        let lists = api.reading_lists(&token).await?;
        let selected = initial_list(&lists, fragment);
        let entries = match selected.and_then(|i| lists.get(i)) {
            Some(list) => api.list_entries(&token, list.id).await?,
            None => ListEntries::default(),
        };
        Ok::<_, ApiError>(MyBooksPage {
            lists,
            selected,
            entries,
        })
    })
    .await
}

pub async fn load_diary<T: Transport>(api: &ApiClient<T>, session: Option<&str>) -> Loaded<DiaryData> {
    authenticated(session, |token| async move { api.diary(&token).await }).await
}

pub async fn load_recommendations<T: Transport>(
    api: &ApiClient<T>,
    session: Option<&str>,
) -> Loaded<Recommendations> {
    authenticated(session, |token| async move { api.recommendations(&token).await }).await
}

/// Search results, or the "no results" notice.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchView {
    NoResults,
    Results(Vec<SearchResult>),
}

/// Run a planned search. A blank query never reaches the server.
pub async fn run_search<T: Transport>(api: &ApiClient<T>, plan: &SearchPlan) -> Result<SearchView, ApiError> {
    match plan {
        SearchPlan::NoResults => Ok(SearchView::NoResults),
        SearchPlan::Fetch { query, .. } => {
            let results = api.search(query).await?;
            Ok(if results.is_empty() {
                SearchView::NoResults
            } else {
                SearchView::Results(results)
            })
        }
    }
}

/// Why a popup form submission did not go through.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SubmitError {
    #[error("{0}")]
    Invalid(#[from] ValidationError),
    /// The server's own explanation, e.g. "Username taken".
    #[error("{0}")]
    Rejected(String),
    #[error("session expired")]
    SessionExpired,
    #[error("Something went wrong")]
    Failed,
}

impl SubmitError {
    fn from_api(e: ApiError) -> Self {
        match e {
            ApiError::SessionExpired => SubmitError::SessionExpired,
            _ => SubmitError::Failed,
        }
    }
}

fn account_token(
    reply: Result<api::models::AccountResponse, ApiError>,
) -> Result<String, SubmitError> {
    let reply = reply.map_err(SubmitError::from_api)?;
    match reply.token() {
        Some(token) => Ok(token.to_string()),
        None => Err(SubmitError::Rejected(
            reply.message.unwrap_or_else(|| GENERIC_FAILURE.to_string()),
        )),
    }
}

/// Validate and submit the sign-up form. Returns the new session token.
pub async fn sign_up<T: Transport>(api: &ApiClient<T>, form: &SignUpForm) -> Result<String, SubmitError> {
    let request = form.validate()?;
    account_token(api.sign_up(&request).await)
}

pub async fn sign_in<T: Transport>(api: &ApiClient<T>, request: &SignInRequest) -> Result<String, SubmitError> {
    account_token(api.sign_in(request).await)
}

pub async fn submit_review<T: Transport>(
    api: &ApiClient<T>,
    session: &str,
    book_id: u64,
    form: &ReviewForm,
) -> Result<(), SubmitError> {
    let review = form.validate(session, book_id)?;
    api.add_review(&review).await.map_err(SubmitError::from_api)
}

pub async fn submit_diary_entry<T: Transport>(
    api: &ApiClient<T>,
    session: &str,
    form: &DiaryEntryForm,
) -> Result<(), SubmitError> {
    let entry = form.validate(session)?;
    api.add_diary_entry(&entry).await.map_err(SubmitError::from_api)
}

/// Follow an author the user does not follow, or unfollow one they do.
/// Returns the new following state and the server's follower count.
pub async fn toggle_follow<T: Transport>(
    api: &ApiClient<T>,
    session: &str,
    author_id: u64,
    following: bool,
) -> Result<(bool, u64), ApiError> {
    let count = if following {
        api.unfollow_author(session, author_id).await?
    } else {
        api.follow_author(session, author_id).await?
    };
    Ok((!following, count))
}

#[cfg(test)]
mod tests {
    use api::endpoints::*;
    use api::{HttpResponse, MemoryTransport};
    use serde_json::json;

    use super::*;
    use crate::search::SearchSequencer;

    fn api() -> (ApiClient<MemoryTransport>, MemoryTransport) {
        let transport = MemoryTransport::new();
        (ApiClient::new(transport.clone()), transport)
    }

    #[tokio::test]
    async fn anonymous_diary_sends_nothing() {
        let (api, transport) = api();
        assert_eq!(load_diary(&api, None).await, Loaded::SignInRequired);
        assert_eq!(load_my_books(&api, None, None).await, Loaded::SignInRequired);
        assert_eq!(load_recommendations(&api, None).await, Loaded::SignInRequired);
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn expired_diary_session() {
        let (api, transport) = api();
        transport.respond(DIARY_ENTRIES, HttpResponse::with_status(403, ""));
        assert!(load_diary(&api, Some("old")).await.is_session_expired());
    }

    #[tokio::test]
    async fn missing_genre_shows_server_page() {
        let (api, _transport) = api();
        assert_eq!(
            load_genre(&api, "Nonexistent").await,
            Loaded::Failed("<h1>404 Not Found</h1>".to_string())
        );
    }

    #[tokio::test]
    async fn password_mismatch_sends_nothing() {
        let (api, transport) = api();
        let form = SignUpForm {
            password: "abc".into(),
            password_repeat: "xyz".into(),
            ..Default::default()
        };
        let err = sign_up(&api, &form).await.unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match");
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn review_without_overall_rating_sends_nothing() {
        let (api, transport) = api();
        let form = ReviewForm {
            summary: "Fine".into(),
            ..Default::default()
        };
        let err = submit_review(&api, "abc", 3, &form).await.unwrap_err();
        assert_eq!(err.to_string(), "Overall rating cannot be blank.");
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn empty_search_sends_nothing() {
        let (api, transport) = api();
        let mut seq = SearchSequencer::default();
        let plan = seq.submit("");
        assert_eq!(run_search(&api, &plan).await, Ok(SearchView::NoResults));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn search_with_no_hits_shows_notice() {
        let (api, transport) = api();
        transport.respond_json(SEARCH, json!({}));
        let mut seq = SearchSequencer::default();
        let plan = seq.submit("zzz");
        assert_eq!(run_search(&api, &plan).await, Ok(SearchView::NoResults));
        assert_eq!(transport.requests()[0].query_param("query").as_deref(), Some("zzz"));
    }

    #[tokio::test]
    async fn sign_in_returns_token() {
        let (api, transport) = api();
        transport.respond_json(SIGN_IN, json!({"session_id": "abc123"}));
        let token = sign_in(
            &api,
            &SignInRequest {
                username: "ada".into(),
                password: "pw".into(),
            },
        )
        .await;
        assert_eq!(token, Ok("abc123".to_string()));
    }

    #[tokio::test]
    async fn sign_in_rejection_carries_message() {
        let (api, transport) = api();
        transport.respond_json(SIGN_IN, json!({"message": "Invalid password"}));
        let err = sign_in(
            &api,
            &SignInRequest {
                username: "ada".into(),
                password: "nope".into(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid password");
    }

    #[tokio::test]
    async fn sign_up_server_error_is_generic() {
        let (api, transport) = api();
        transport.respond(SIGN_UP, HttpResponse::with_status(500, "boom"));
        let form = SignUpForm {
            password: "pw".into(),
            password_repeat: "pw".into(),
            ..Default::default()
        };
        let err = sign_up(&api, &form).await.unwrap_err();
        assert_eq!(err.to_string(), "Something went wrong");
    }

    #[tokio::test]
    async fn my_books_opens_bookmarked_list() {
        let (api, transport) = api();
        transport.respond_json(
            GET_LISTS,
            json!({"0": {"id": 1, "name": "Currently Reading"}, "1": {"id": 2, "name": "Want to Read"}}),
        );
        transport.respond_json(
            GET_LIST_ENTRIES,
            json!({"books": {}, "button": "Mark as reading", "move_target_id": 1}),
        );

        let page = match load_my_books(&api, Some("abc"), Some("#WantToRead")).await {
            Loaded::Ready(page) => page,
            other => panic!("unexpected {other:?}"),
        };
        assert_eq!(page.selected, Some(1));
        let entries_request = &transport.requests()[1];
        assert_eq!(entries_request.query_param("list_id").as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn reload_reopens_the_open_list() {
        let (api, transport) = api();
        transport.respond_json(
            GET_LISTS,
            json!({"0": {"id": 1, "name": "Currently Reading"}, "1": {"id": 2, "name": "Want to Read"}}),
        );
        transport.respond_json(GET_LIST_ENTRIES, json!({"books": {}}));
        let first = match load_my_books(&api, Some("abc"), Some("#WantToRead")).await {
            Loaded::Ready(page) => page,
            other => panic!("unexpected {other:?}"),
        };
        let bookmark = first.bookmark();
        assert_eq!(bookmark.as_deref(), Some("WantToRead"));

        // A new list sorts in ahead of the open one.
        transport.respond_json(
            GET_LISTS,
            json!({"0": {"id": 1, "name": "Currently Reading"}, "1": {"id": 5, "name": "Holiday"},
                   "2": {"id": 2, "name": "Want to Read"}}),
        );
        let reloaded = match load_my_books(&api, Some("abc"), bookmark.as_deref()).await {
            Loaded::Ready(page) => page,
            other => panic!("unexpected {other:?}"),
        };
        assert_eq!(reloaded.selected, Some(2));
        let entries_request = &transport.requests()[3];
        assert_eq!(entries_request.query_param("list_id").as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn follow_toggle_picks_endpoint_from_state() {
        let (api, transport) = api();
        transport.respond(FOLLOW_AUTHOR, HttpResponse::ok("11"));
        transport.respond(UNFOLLOW_AUTHOR, HttpResponse::ok("10"));

        assert_eq!(toggle_follow(&api, "abc", 4, false).await, Ok((true, 11)));
        assert_eq!(toggle_follow(&api, "abc", 4, true).await, Ok((false, 10)));
        let paths: Vec<String> = transport.requests().iter().map(|r| r.path().to_string()).collect();
        assert_eq!(paths, vec![FOLLOW_AUTHOR, UNFOLLOW_AUTHOR]);
    }

    #[tokio::test]
    async fn expired_session_fails_follow() {
        let (api, transport) = api();
        transport.respond(FOLLOW_AUTHOR, HttpResponse::with_status(403, ""));
        assert_eq!(toggle_follow(&api, "old", 4, false).await, Err(ApiError::SessionExpired));
    }

    #[tokio::test]
    async fn anonymous_book_skips_list_targets() {
        let (api, transport) = api();
        transport.respond_json(
            BOOK_ABOUT,
            json!({"title": "Emma", "synopsis": "", "author": "Jane Austen", "author_id": 1}),
        );
        let page = load_book(&api, "5", None).await;
        assert!(matches!(page, Loaded::Ready(BookPage { ref list_targets, .. }) if list_targets.is_empty()));
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn diary_entry_posts_after_validation() {
        let (api, transport) = api();
        transport.respond(ADD_DIARY_ENTRY, HttpResponse::ok("true"));
        let mut form = DiaryEntryForm::default();
        form.review.overall_rating = Some(5);
        form.pages_read = "40".into();
        form.book_id = Some(12);
        form.set_completed(true);
        form.set_as_review(true);

        submit_diary_entry(&api, "abc", &form).await.unwrap();
        let body = transport.requests()[0].json_body().unwrap();
        assert_eq!(body["book_completed"], json!(true));
        assert_eq!(body["as_review"], json!(true));
        assert_eq!(body["pages_read"], json!(40));
    }
}

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::*;
use crate::query::with_parameters;
use crate::transport::{HttpResponse, Transport};
use crate::ApiError;

/// Endpoint paths, relative to the API origin.
pub mod endpoints {
    pub const SIGN_UP: &str = "/cgi-bin/account/sign_up";
    pub const SIGN_IN: &str = "/cgi-bin/account/sign_in";
    pub const SIGN_OUT: &str = "/cgi-bin/account/sign_out";

    pub const BOOK_ABOUT: &str = "/cgi-bin/books/about_data";
    pub const ADD_REVIEW: &str = "/cgi-bin/books/add_review";
    pub const DELETE_REVIEW: &str = "/cgi-bin/books/delete_review";

    pub const AUTHOR_ABOUT: &str = "/cgi-bin/authors/about_data";
    pub const FOLLOW_AUTHOR: &str = "/cgi-bin/authors/follow_author";
    pub const UNFOLLOW_AUTHOR: &str = "/cgi-bin/authors/unfollow_author";

    pub const GENRE_ABOUT: &str = "/cgi-bin/genres/about_data";

    pub const GET_LISTS: &str = "/cgi-bin/my_books/get_lists";
    pub const GET_LIST_ENTRIES: &str = "/cgi-bin/my_books/get_list_entries";
    pub const GET_LISTS_BOOK_TARGET: &str = "/cgi-bin/my_books/get_lists_book_target";
    pub const CREATE_LIST: &str = "/cgi-bin/my_books/create_list";
    pub const REMOVE_LIST: &str = "/cgi-bin/my_books/remove_list";
    pub const ADD_LIST_ENTRY: &str = "/cgi-bin/my_books/add_list_entry";
    pub const REMOVE_LIST_ENTRY: &str = "/cgi-bin/my_books/remove_list_entry";
    pub const MOVE_LIST_ENTRY: &str = "/cgi-bin/my_books/move_list_entry";

    pub const DIARY_ENTRIES: &str = "/cgi-bin/diary/get_entries";
    pub const ADD_DIARY_ENTRY: &str = "/cgi-bin/diary/add_entry";
    pub const DELETE_DIARY_ENTRY: &str = "/cgi-bin/diary/delete_entry";

    pub const GET_RECOMMENDATIONS: &str = "/cgi-bin/recommendations/get_recommendations";
    pub const REMOVE_RECOMMENDATION: &str = "/cgi-bin/recommendations/remove_recommendation";
    pub const ACCEPT_RECOMMENDATION: &str = "/cgi-bin/recommendations/add_list_entry";
    pub const SET_PREFERENCES: &str = "/cgi-bin/recommendations/set_user_preferences";

    pub const SEARCH: &str = "/cgi-bin/search/search";
    pub const BROWSE_DATA: &str = "/cgi-bin/search/get_browse_data";
    pub const HOME_DATA: &str = "/cgi-bin/home/get_data";
}

use endpoints::*;

/// The server reads `session_id` unconditionally, so anonymous requests send
/// the same placeholder a missing token serialises to.
const ANONYMOUS_SESSION: &str = "null";

/// Typed access to every API endpoint over a [`Transport`].
#[derive(Clone, Debug, Default)]
pub struct ApiClient<T: Transport> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn get_raw(&self, path: &str, params: &[(&str, &str)]) -> Result<HttpResponse, ApiError> {
        let url = with_parameters(path, params);
        let response = self.transport.get(&url).await?;
        check(path, response)
    }

    async fn get_json<R: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<R, ApiError> {
        let response = self.get_raw(path, params).await?;
        decode(path, &response.body)
    }

    async fn post_raw(&self, path: &str, body: String) -> Result<HttpResponse, ApiError> {
        let response = self.transport.post(path, body).await?;
        check(path, response)
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<HttpResponse, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.post_raw(path, body).await
    }

    // ---- account ---------------------------------------------------------

    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<AccountResponse, ApiError> {
        let response = self.post_json(SIGN_UP, request).await?;
        decode(SIGN_UP, &response.body)
    }

    pub async fn sign_in(&self, request: &SignInRequest) -> Result<AccountResponse, ApiError> {
        let response = self.post_json(SIGN_IN, request).await?;
        decode(SIGN_IN, &response.body)
    }

    /// Close the session on the server. The body is the bare token.
    pub async fn sign_out(&self, session: &str) -> Result<(), ApiError> {
        self.post_raw(SIGN_OUT, session.to_string()).await.map(|_| ())
    }

    // ---- books -----------------------------------------------------------

    /// `book_id` is the raw route segment, passed through unchanged.
    pub async fn book_about(&self, book_id: &str, session: Option<&str>) -> Result<BookAbout, ApiError> {
        self.get_json(
            BOOK_ABOUT,
            &[("book_id", book_id), ("session_id", session_param(session))],
        )
        .await
    }

    pub async fn add_review(&self, review: &NewReview) -> Result<(), ApiError> {
        self.post_json(ADD_REVIEW, review).await.map(|_| ())
    }

    pub async fn delete_review(&self, session: &str, review_id: u64) -> Result<(), ApiError> {
        let body = DeleteReviewRequest {
            session_id: session.to_string(),
            review_id,
        };
        self.post_json(DELETE_REVIEW, &body).await.map(|_| ())
    }

    // ---- authors ---------------------------------------------------------

    pub async fn author_about(&self, author_id: &str) -> Result<AuthorAbout, ApiError> {
        self.get_json(AUTHOR_ABOUT, &[("author_id", author_id)]).await
    }

    /// Follow an author; returns the new follower count.
    pub async fn follow_author(&self, session: &str, author_id: u64) -> Result<u64, ApiError> {
        self.follow_request(FOLLOW_AUTHOR, session, author_id).await
    }

    /// Unfollow an author; returns the new follower count.
    pub async fn unfollow_author(&self, session: &str, author_id: u64) -> Result<u64, ApiError> {
        self.follow_request(UNFOLLOW_AUTHOR, session, author_id).await
    }

    async fn follow_request(&self, path: &str, session: &str, author_id: u64) -> Result<u64, ApiError> {
        let body = FollowRequest {
            session_id: session.to_string(),
            author_id,
        };
        let response = self.post_json(path, &body).await?;
        response
            .body
            .trim()
            .parse()
            .map_err(|e: std::num::ParseIntError| ApiError::Decode(e.to_string()))
    }

    // ---- genres ----------------------------------------------------------

    pub async fn genre_about(&self, genre_name: &str) -> Result<GenreAbout, ApiError> {
        self.get_json(GENRE_ABOUT, &[("genre_name", genre_name)]).await
    }

    // ---- reading lists ---------------------------------------------------

    pub async fn reading_lists(&self, session: &str) -> Result<Vec<ReadingListName>, ApiError> {
        self.get_json::<Indexed<ReadingListName>>(GET_LISTS, &[("session_id", session)])
            .await
            .map(Indexed::into_vec)
    }

    pub async fn list_entries(&self, session: &str, list_id: u64) -> Result<ListEntries, ApiError> {
        let list_id = list_id.to_string();
        self.get_json(
            GET_LIST_ENTRIES,
            &[("session_id", session), ("list_id", &list_id)],
        )
        .await
    }

    /// The user's lists, each flagged with whether it already holds `book_id`.
    pub async fn list_targets(&self, session: &str, book_id: &str) -> Result<Vec<ListTarget>, ApiError> {
        self.get_json::<Indexed<ListTarget>>(
            GET_LISTS_BOOK_TARGET,
            &[("session_id", session), ("book_id", book_id)],
        )
        .await
        .map(Indexed::into_vec)
    }

    pub async fn create_list(&self, session: &str, list_name: &str) -> Result<(), ApiError> {
        let body = CreateListRequest {
            session_id: session.to_string(),
            list_name: list_name.to_string(),
        };
        self.post_json(CREATE_LIST, &body).await.map(|_| ())
    }

    pub async fn remove_list(&self, session: &str, list_id: u64) -> Result<(), ApiError> {
        let body = RemoveListRequest {
            session_id: session.to_string(),
            list_id,
        };
        self.post_json(REMOVE_LIST, &body).await.map(|_| ())
    }

    pub async fn add_list_entry(&self, session: &str, list_id: u64, book_id: u64) -> Result<(), ApiError> {
        let body = ListEntryRequest {
            session_id: session.to_string(),
            list_id,
            book_id,
        };
        self.post_json(ADD_LIST_ENTRY, &body).await.map(|_| ())
    }

    pub async fn remove_list_entry(&self, session: &str, list_id: u64, book_id: u64) -> Result<(), ApiError> {
        let body = ListEntryRequest {
            session_id: session.to_string(),
            list_id,
            book_id,
        };
        self.post_json(REMOVE_LIST_ENTRY, &body).await.map(|_| ())
    }

    pub async fn move_list_entry(&self, request: &MoveEntryRequest) -> Result<(), ApiError> {
        self.post_json(MOVE_LIST_ENTRY, request).await.map(|_| ())
    }

    // ---- diary -----------------------------------------------------------

    pub async fn diary(&self, session: &str) -> Result<DiaryData, ApiError> {
        self.get_json(DIARY_ENTRIES, &[("session_id", session)]).await
    }

    pub async fn add_diary_entry(&self, entry: &NewDiaryEntry) -> Result<(), ApiError> {
        self.post_json(ADD_DIARY_ENTRY, entry).await.map(|_| ())
    }

    pub async fn delete_diary_entry(&self, session: &str, entry_id: u64) -> Result<(), ApiError> {
        let body = DeleteDiaryEntryRequest {
            session_id: session.to_string(),
            entry_id,
        };
        self.post_json(DELETE_DIARY_ENTRY, &body).await.map(|_| ())
    }

    // ---- recommendations -------------------------------------------------

    pub async fn recommendations(&self, session: &str) -> Result<Recommendations, ApiError> {
        let raw: RecommendationsResponse = self
            .get_json(GET_RECOMMENDATIONS, &[("session_id", session)])
            .await?;
        raw.into_mode().map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn remove_recommendation(&self, session: &str, book_id: u64) -> Result<(), ApiError> {
        let body = RemoveRecommendationRequest {
            session_id: session.to_string(),
            book_id,
        };
        self.post_json(REMOVE_RECOMMENDATION, &body).await.map(|_| ())
    }

    pub async fn accept_recommendation(&self, session: &str, book_id: u64, list_id: u64) -> Result<(), ApiError> {
        let body = AcceptRecommendationRequest {
            session_id: session.to_string(),
            book_id,
            list_id,
        };
        self.post_json(ACCEPT_RECOMMENDATION, &body).await.map(|_| ())
    }

    /// Store the new user's favourite authors. Resolves only once the server
    /// has generated the first recommendations.
    pub async fn set_preferences(&self, session: &str, author_ids: &[u64]) -> Result<(), ApiError> {
        let body = SetPreferencesRequest {
            session_id: session.to_string(),
            authors: author_ids.iter().map(u64::to_string).collect(),
        };
        self.post_json(SET_PREFERENCES, &body).await.map(|_| ())
    }

    // ---- search, browse, home -------------------------------------------

    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ApiError> {
        self.get_json::<Indexed<SearchResult>>(SEARCH, &[("query", query)])
            .await
            .map(Indexed::into_vec)
    }

    pub async fn browse(&self, session: Option<&str>) -> Result<BrowseData, ApiError> {
        self.get_json(BROWSE_DATA, &[("session_id", session_param(session))])
            .await
    }

    pub async fn home(&self, session: Option<&str>) -> Result<HomeData, ApiError> {
        self.get_json(HOME_DATA, &[("session_id", session_param(session))])
            .await
    }
}

fn session_param(session: Option<&str>) -> &str {
    session.unwrap_or(ANONYMOUS_SESSION)
}

fn check(path: &str, response: HttpResponse) -> Result<HttpResponse, ApiError> {
    if response.status == 403 {
        tracing::info!("{path}: session rejected");
        return Err(ApiError::SessionExpired);
    }
    if !response.is_success() {
        tracing::error!("{path}: {} {}", response.status, response.body);
        return Err(ApiError::Server {
            status: response.status,
            body: response.body,
        });
    }
    Ok(response)
}

fn decode<R: DeserializeOwned>(path: &str, body: &str) -> Result<R, ApiError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::error!("{path}: undecodable response: {e}");
        ApiError::Decode(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{HttpMethod, MemoryTransport};

    fn client() -> (ApiClient<MemoryTransport>, MemoryTransport) {
        let transport = MemoryTransport::new();
        (ApiClient::new(transport.clone()), transport)
    }

    #[tokio::test]
    async fn forbidden_is_session_expiry_on_every_endpoint_kind() {
        let (api, transport) = client();
        transport.respond(GET_LISTS, HttpResponse::with_status(403, "false"));
        transport.respond(REMOVE_LIST_ENTRY, HttpResponse::with_status(403, "false"));
        transport.respond(FOLLOW_AUTHOR, HttpResponse::with_status(403, "false"));

        assert_eq!(api.reading_lists("abc").await, Err(ApiError::SessionExpired));
        assert_eq!(
            api.remove_list_entry("abc", 1, 2).await,
            Err(ApiError::SessionExpired)
        );
        assert_eq!(api.follow_author("abc", 9).await, Err(ApiError::SessionExpired));
    }

    #[tokio::test]
    async fn not_found_keeps_server_body() {
        let (api, _transport) = client();
        let err = api.genre_about("Nonexistent").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 404,
                body: "<h1>404 Not Found</h1>".to_string()
            }
        );
    }

    #[tokio::test]
    async fn sign_in_posts_json_credentials() {
        let (api, transport) = client();
        transport.respond_json(SIGN_IN, json!({"message": "Signed in successfully", "session_id": "abc123"}));

        let response = api
            .sign_in(&SignInRequest {
                username: "reader".into(),
                password: "hunter2".into(),
            })
            .await
            .unwrap();

        assert_eq!(response.token(), Some("abc123"));
        let request = &transport.requests()[0];
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(
            request.json_body(),
            Some(json!({"username": "reader", "password": "hunter2"}))
        );
    }

    #[tokio::test]
    async fn sign_out_sends_bare_token() {
        let (api, transport) = client();
        transport.respond(SIGN_OUT, HttpResponse::ok("true"));
        api.sign_out("abc123").await.unwrap();
        assert_eq!(transport.requests()[0].body.as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn anonymous_home_sends_placeholder_session() {
        let (api, transport) = client();
        transport.respond_json(
            HOME_DATA,
            json!({"trending": [], "newest_additions": [], "currently_reading": null, "want_read": null, "recommended": null}),
        );
        api.home(None).await.unwrap();
        assert_eq!(
            transport.requests()[0].query_param("session_id").as_deref(),
            Some("null")
        );
    }

    #[tokio::test]
    async fn book_query_carries_id_then_session() {
        let (api, transport) = client();
        let _ = api.book_about("12", Some("abc")).await;
        assert_eq!(
            transport.requests()[0].url,
            "/cgi-bin/books/about_data?book_id=12&session_id=abc"
        );
    }

    #[tokio::test]
    async fn follow_returns_follower_count() {
        let (api, transport) = client();
        transport.respond(FOLLOW_AUTHOR, HttpResponse::ok("42"));
        assert_eq!(api.follow_author("abc", 3).await, Ok(42));
        assert_eq!(
            transport.requests()[0].json_body(),
            Some(json!({"session_id": "abc", "author_id": 3}))
        );
    }

    #[tokio::test]
    async fn keyed_reading_lists_decode_in_order() {
        let (api, transport) = client();
        transport.respond_json(
            GET_LISTS,
            json!({"1": {"id": 11, "name": "Want to Read"}, "0": {"id": 10, "name": "Currently Reading"}}),
        );
        let lists = api.reading_lists("abc").await.unwrap();
        assert_eq!(lists[0].name, "Currently Reading");
        assert_eq!(lists[1].id, 11);
    }

    #[tokio::test]
    async fn preferences_send_author_ids_as_strings() {
        let (api, transport) = client();
        transport.respond(SET_PREFERENCES, HttpResponse::ok("true"));
        api.set_preferences("abc", &[4, 8]).await.unwrap();
        assert_eq!(
            transport.requests()[0].json_body(),
            Some(json!({"session_id": "abc", "authors": ["4", "8"]}))
        );
    }
}

//! Application context and hooks for the UI.
//!
//! [`SessionProvider`] owns the [`AppState`] signal, the API client and the
//! configuration, and makes them available to every component below it.

use std::future::Future;

use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use store::controller::{Loaded, SubmitError};
use store::{AppState, ClientConfig, Page, SearchSequencer, SessionChange};

use crate::client::{make_client, make_cookies, AppTransport};
use crate::timer::sleep_secs;

pub type Api = ApiClient<AppTransport>;

/// Text of the header search box. Cleared by every navigation except search.
#[derive(Clone, Copy)]
pub struct SearchText(pub Signal<String>);

/// Get the application state.
/// Returns a signal that updates on sign-in, sign-out, navigation and popups.
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

pub fn use_api() -> Api {
    use_context::<Api>()
}

pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

pub fn use_search_text() -> Signal<String> {
    use_context::<SearchText>().0
}

pub fn use_search_sequencer() -> Signal<SearchSequencer> {
    use_context::<Signal<SearchSequencer>>()
}

/// Session token, re-evaluated only when it changes.
pub fn use_session() -> Memo<Option<String>> {
    let state = use_app_state();
    use_memo(move || state.read().session().map(String::from))
}

/// Changes whenever the current page must re-fetch its data.
pub fn use_reload() -> Memo<u64> {
    let state = use_app_state();
    use_memo(move || state.read().reload_generation())
}

/// Provider component that restores the session from its cookie and shares
/// the client state. Wrap the router with this component.
#[component]
pub fn SessionProvider(config: ClientConfig, children: Element) -> Element {
    let restore_config = config.clone();
    let state = use_signal(move || AppState::restore(&make_cookies(), &restore_config.session));
    let search_text = use_signal(String::new);
    let sequencer = use_signal(SearchSequencer::default);
    let client_config = config.clone();

    use_context_provider(|| state);
    use_context_provider(|| SearchText(search_text));
    use_context_provider(|| sequencer);
    use_context_provider(move || make_client(&client_config));
    use_context_provider(move || config);

    rsx! {
        {children}
    }
}

/// Write or clear the session cookie as a transition requires.
pub fn apply_session_change(change: &SessionChange, config: &ClientConfig) {
    change.cookie.apply(&make_cookies(), &config.session);
}

/// The server answered 403: drop the session everywhere.
pub fn expire_session(mut state: Signal<AppState>, config: &ClientConfig) {
    let change = state.write().expire();
    apply_session_change(&change, config);
}

/// Handle a failed background action. The client has already logged it;
/// only an expired session changes what is on screen.
pub fn report_error(state: Signal<AppState>, config: &ClientConfig, err: &ApiError) {
    if err.is_session_expired() {
        expire_session(state, config);
    }
}

/// Show `message` in the alert banner for the configured time.
pub fn show_alert(mut state: Signal<AppState>, config: &ClientConfig, message: impl Into<String>) {
    let id = state.write().popups_mut().show_alert(message);
    let seconds = config.ui.alert_seconds;
    spawn(async move {
        sleep_secs(seconds).await;
        state.write().popups_mut().expire_alert(id);
    });
}

/// A popup submission failed: an expired session signs the user out,
/// anything else is explained in the alert banner.
pub fn report_submit_error(state: Signal<AppState>, config: &ClientConfig, err: SubmitError) {
    match err {
        SubmitError::SessionExpired => expire_session(state, config),
        other => show_alert(state, config, other.to_string()),
    }
}

/// Enter the Authenticated state after sign-in or sign-up.
pub fn complete_sign_in(mut state: Signal<AppState>, config: &ClientConfig, token: String, remember: bool) {
    let change = state.write().sign_in(token, remember);
    apply_session_change(&change, config);
}

/// Sign out locally at once; the server is told best-effort.
pub fn sign_out(mut state: Signal<AppState>, api: Api, config: &ClientConfig) {
    let (token, change) = state.write().sign_out();
    apply_session_change(&change, config);
    if let Some(token) = token {
        spawn(async move {
            if let Err(e) = api.sign_out(&token).await {
                tracing::warn!("sign out not recorded by server: {e}");
            }
        });
    }
}

/// What a page body shows for its main data.
#[derive(Clone, Debug, PartialEq)]
pub enum PageContent<T> {
    Loading,
    Ready(T),
    /// Server-rendered error markup for the main region.
    Error(String),
    /// Nothing to show: the sign-in popup has taken over.
    Blocked,
}

/// Apply the session side effects of a page load and keep what to render.
pub fn settle<T>(loaded: Loaded<T>, state: Signal<AppState>, config: &ClientConfig) -> PageContent<T> {
    match loaded {
        Loaded::Ready(value) => PageContent::Ready(value),
        Loaded::SignInRequired => PageContent::Blocked,
        Loaded::SessionExpired => {
            expire_session(state, config);
            PageContent::Blocked
        }
        Loaded::Failed(body) => PageContent::Error(body),
    }
}

/// Load a page's main data, again whenever the session changes or a reload
/// is requested. `load` receives the client and the current session token.
pub fn use_page_data<T, F, Fut>(load: F) -> Signal<PageContent<T>>
where
    T: 'static,
    F: Fn(Api, Option<String>) -> Fut + 'static,
    Fut: Future<Output = Loaded<T>> + 'static,
{
    let state = use_app_state();
    let api = use_api();
    let config = use_config();
    let session = use_session();
    let reload = use_reload();
    let mut content = use_signal(|| PageContent::Loading);

    let _loader = use_resource(move || {
        let _generation = reload();
        let pending = load(api.clone(), session());
        let config = config.clone();
        async move {
            let loaded = pending.await;
            content.set(settle(loaded, state, &config));
        }
    });
    content
}

/// Record that `page` is now showing: highlight its link, reset the scroll
/// position and clear the search box when leaving search.
pub fn use_page_enter(page: Page) {
    let mut state = use_app_state();
    let mut search_text = use_search_text();
    use_effect(use_reactive((&page,), move |(page,)| {
        let outcome = state.write().navigate(page);
        if outcome.clear_search {
            search_text.set(String::new());
        }
        if outcome.scroll_to_top {
            scroll_to_top();
        }
    }));
}

fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

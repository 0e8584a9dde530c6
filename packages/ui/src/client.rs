//! Platform-specific API transport and cookie jar.

use api::ApiClient;
use store::ClientConfig;

#[cfg(target_arch = "wasm32")]
pub type AppTransport = api::FetchTransport;
#[cfg(not(target_arch = "wasm32"))]
pub type AppTransport = api::MemoryTransport;

/// Build the API client for this platform.
pub fn make_client(config: &ClientConfig) -> ApiClient<AppTransport> {
    #[cfg(target_arch = "wasm32")]
    {
        ApiClient::new(api::FetchTransport::new(config.api.base_url.as_str()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!(
            "no browser transport; API calls to {:?} answer from memory",
            config.api.base_url
        );
        ApiClient::new(api::MemoryTransport::new())
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn make_cookies() -> impl store::CookieJar {
    store::BrowserCookies
}

/// Without a browser the jar lives for the whole process.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn make_cookies() -> impl store::CookieJar {
    static JAR: std::sync::OnceLock<store::MemoryCookies> = std::sync::OnceLock::new();
    JAR.get_or_init(store::MemoryCookies::new).clone()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use store::{AppState, CookieJar};

    use super::*;

    #[test]
    fn remembered_session_survives_restart() {
        let config = ClientConfig::default();
        let mut state = AppState::new();
        let change = state.sign_in("tok-remember".into(), true);
        change.cookie.apply(&make_cookies(), &config.session);

        let restored = AppState::restore(&make_cookies(), &config.session);
        assert_eq!(restored.session(), Some("tok-remember"));

        make_cookies().remove(&config.session.cookie_name);
    }

    #[test]
    fn native_client_answers_from_memory() {
        let client = make_client(&ClientConfig::default());
        assert_eq!(client.transport().request_count(), 0);
    }
}

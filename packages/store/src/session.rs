//! # Application state: session token, current page and popups
//!
//! [`AppState`] is the single owner of the client's mutable state. Every
//! transition returns a small outcome struct describing the side effects the
//! caller must perform (write the cookie, re-fetch the page, go Home); the
//! state itself never touches the DOM or the network, so the transitions are
//! unit-tested directly.
//!
//! ```text
//!               sign_in / sign_up (token)
//!   Anonymous ─────────────────────────────▶ Authenticated
//!       ▲                                         │
//!       └──────── sign_out / expire (403) ────────┘
//! ```

use crate::config::SessionConfig;
use crate::cookies::CookieJar;
use crate::navigation::{NavLink, NavigationOutcome, NavigationState, Page};
use crate::popups::{Dismissal, Popup, PopupState};

/// What to do with the session cookie after a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CookieAction {
    None,
    Persist(String),
    Clear,
}

impl CookieAction {
    pub fn apply(&self, jar: &impl CookieJar, config: &SessionConfig) {
        match self {
            CookieAction::None => {}
            CookieAction::Persist(token) => {
                jar.set(&config.cookie_name, token, config.remember_days)
            }
            CookieAction::Clear => jar.remove(&config.cookie_name),
        }
    }
}

/// Side effects of a session transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionChange {
    pub cookie: CookieAction,
    /// The current page must re-fetch its data.
    pub reload: bool,
    /// The sign-in popup (with notice) is now showing because the current
    /// page cannot be viewed anonymously.
    pub show_sign_in: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DismissOutcome {
    pub dismissal: Dismissal,
    /// The dismissed popup was guarding a sign-in-only page.
    pub redirect_home: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    session: Option<String>,
    navigation: NavigationState,
    popups: PopupState,
    reload_generation: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start in the Authenticated state if the jar holds a session cookie.
    pub fn restore(jar: &impl CookieJar, config: &SessionConfig) -> Self {
        let session = jar.get(&config.cookie_name);
        if session.is_some() {
            tracing::info!("restored session from cookie");
        }
        Self {
            session,
            ..Self::default()
        }
    }

    pub fn session(&self) -> Option<&str> {
        self.session.as_deref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.navigation.current()
    }

    pub fn active_link(&self) -> Option<NavLink> {
        self.navigation.active_link()
    }

    pub fn popups(&self) -> &PopupState {
        &self.popups
    }

    pub fn popups_mut(&mut self) -> &mut PopupState {
        &mut self.popups
    }

    /// Bumped whenever the current page must re-fetch; views key their data
    /// loads on it.
    pub fn reload_generation(&self) -> u64 {
        self.reload_generation
    }

    pub fn request_reload(&mut self) {
        self.reload_generation += 1;
    }

    /// Record a completed navigation. An anonymous visit to a sign-in-only
    /// page opens the sign-in popup with its notice.
    pub fn navigate(&mut self, page: Page) -> NavigationOutcome {
        let outcome = self.navigation.navigate(page, self.is_signed_in());
        if outcome.requires_sign_in {
            self.popups.show_sign_in(true);
        }
        outcome
    }

    /// Enter the Authenticated state with a token from sign-in or sign-up.
    pub fn sign_in(&mut self, token: String, remember: bool) -> SessionChange {
        self.popups.finish_submit();
        self.popups.dismiss();
        self.request_reload();
        let cookie = if remember {
            CookieAction::Persist(token.clone())
        } else {
            CookieAction::None
        };
        self.session = Some(token);
        tracing::info!("signed in");
        SessionChange {
            cookie,
            reload: true,
            show_sign_in: false,
        }
    }

    /// Leave the Authenticated state at the user's request. Returns the token
    /// that should be revoked on the server, if there was one.
    pub fn sign_out(&mut self) -> (Option<String>, SessionChange) {
        let token = self.session.take();
        self.request_reload();
        let show_sign_in = self.guard_current_page();
        (
            token,
            SessionChange {
                cookie: CookieAction::Clear,
                reload: true,
                show_sign_in,
            },
        )
    }

    /// The server rejected the token (HTTP 403).
    pub fn expire(&mut self) -> SessionChange {
        if self.session.take().is_some() {
            tracing::warn!("session expired");
        }
        self.popups.finish_submit();
        // A sign-in-only page stays put behind the sign-in popup; cancelling
        // it is what sends the user Home (see `dismiss_popups`).
        let show_sign_in = self.guard_current_page();
        SessionChange {
            cookie: CookieAction::Clear,
            reload: false,
            show_sign_in,
        }
    }

    fn guard_current_page(&mut self) -> bool {
        let guarded = self
            .current_page()
            .is_some_and(|page| page.requires_sign_in());
        if guarded {
            self.popups.show_sign_in(true);
        }
        guarded
    }

    /// Cancel button or backdrop click. Leaving the sign-in popup of a
    /// sign-in-only page while anonymous sends the user Home.
    pub fn dismiss_popups(&mut self) -> DismissOutcome {
        let was_open = self.popups.open().cloned();
        let dismissal = self.popups.dismiss();
        // The Home redirect for an expired session on a guarded page happens here.
        let redirect_home = dismissal == Dismissal::Closed
            && matches!(was_open, Some(Popup::SignIn | Popup::SignUp))
            && !self.is_signed_in()
            && self
                .current_page()
                .is_some_and(|page| page.requires_sign_in());
        DismissOutcome {
            dismissal,
            redirect_home,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::cookies::MemoryCookies;

    fn config() -> SessionConfig {
        ClientConfig::default().session
    }

    #[test]
    fn sign_in_with_remember_persists_cookie_and_reloads() {
        let jar = MemoryCookies::new();
        let mut state = AppState::new();
        state.navigate(Page::Home);
        state.popups_mut().show(Popup::SignIn);
        assert!(state.popups_mut().begin_submit());
        let generation = state.reload_generation();

        let change = state.sign_in("abc123".to_string(), true);
        change.cookie.apply(&jar, &config());

        assert_eq!(state.session(), Some("abc123"));
        assert_eq!(jar.get("sessionID").as_deref(), Some("abc123"));
        assert_eq!(jar.max_age_days("sessionID"), Some(50));
        assert!(state.popups().open().is_none());
        assert!(!state.popups().in_flight());
        assert!(change.reload);
        assert!(state.reload_generation() > generation);
    }

    #[test]
    fn sign_in_without_remember_leaves_cookie_alone() {
        let jar = MemoryCookies::new();
        let mut state = AppState::new();
        state.sign_in("abc".to_string(), false).cookie.apply(&jar, &config());
        assert_eq!(jar.get("sessionID"), None);
        assert!(state.is_signed_in());
    }

    #[test]
    fn expiry_on_sign_in_only_page_shows_popup() {
        let jar = MemoryCookies::new();
        jar.set("sessionID", "abc", 50);
        let mut state = AppState::restore(&jar, &config());
        state.navigate(Page::Diary);

        let change = state.expire();
        change.cookie.apply(&jar, &config());

        assert_eq!(state.session(), None);
        assert_eq!(jar.get("sessionID"), None);
        assert!(change.show_sign_in);
        assert!(state.popups().is_open(&Popup::SignIn));
        assert!(state.popups().sign_in_notice());

        let dismissed = state.dismiss_popups();
        assert!(dismissed.redirect_home);
    }

    #[test]
    fn expiry_on_public_page_stays_put() {
        let mut state = AppState::new();
        state.sign_in("abc".to_string(), false);
        state.navigate(Page::Book { id: "3".into() });

        let change = state.expire();
        assert_eq!(change.cookie, CookieAction::Clear);
        assert!(!change.show_sign_in);
        assert!(state.popups().open().is_none());
        assert!(!state.dismiss_popups().redirect_home);
    }

    #[test]
    fn anonymous_diary_opens_sign_in_with_notice() {
        let mut state = AppState::new();
        let outcome = state.navigate(Page::Diary);
        assert!(outcome.requires_sign_in);
        assert!(state.popups().is_open(&Popup::SignIn));
        assert!(state.popups().sign_in_notice());
        assert_eq!(state.active_link(), Some(NavLink::Diary));
    }

    #[test]
    fn blocked_dismissal_does_not_redirect() {
        let mut state = AppState::new();
        state.navigate(Page::MyBooks);
        state.popups_mut().begin_submit();
        let outcome = state.dismiss_popups();
        assert_eq!(outcome.dismissal, Dismissal::Blocked);
        assert!(!outcome.redirect_home);
    }

    #[test]
    fn second_dismissal_is_noop() {
        let mut state = AppState::new();
        state.navigate(Page::Recommendations);
        assert!(state.dismiss_popups().redirect_home);
        let snapshot = state.clone();
        let again = state.dismiss_popups();
        assert_eq!(again.dismissal, Dismissal::NothingOpen);
        assert!(!again.redirect_home);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn sign_out_returns_token_and_clears_cookie() {
        let jar = MemoryCookies::new();
        let mut state = AppState::new();
        state.sign_in("abc".to_string(), true).cookie.apply(&jar, &config());
        state.navigate(Page::MyBooks);

        let (token, change) = state.sign_out();
        change.cookie.apply(&jar, &config());

        assert_eq!(token.as_deref(), Some("abc"));
        assert!(!state.is_signed_in());
        assert_eq!(jar.get("sessionID"), None);
        assert!(change.reload);
        assert!(change.show_sign_in);
    }

    #[test]
    fn restore_without_cookie_is_anonymous() {
        let state = AppState::restore(&MemoryCookies::new(), &config());
        assert!(!state.is_signed_in());
    }
}

//! Session cookie persistence.
//!
//! [`CookieJar`] abstracts `document.cookie` so session handling can be tested
//! natively with [`MemoryCookies`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Read and write named cookies.
pub trait CookieJar {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&self, name: &str, value: &str, max_age_days: u32);
    fn remove(&self, name: &str);
}

/// Find `name` in a `document.cookie` style string (`a=1; b=2`).
pub fn parse_cookie(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name && !value.is_empty()).then(|| value.to_string())
    })
}

/// `Set-Cookie` style assignment for `document.cookie`, scoped to the whole
/// site. A zero age deletes the cookie.
pub fn cookie_assignment(name: &str, value: &str, max_age_days: u32) -> String {
    let max_age = u64::from(max_age_days) * 24 * 60 * 60;
    format!("{name}={value}; max-age={max_age}; path=/; SameSite=Lax")
}

/// In-memory cookie jar for tests and native builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryCookies {
    cookies: Arc<Mutex<HashMap<String, (String, u32)>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MemoryCookies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lifetime in days the cookie was written with.
    pub fn max_age_days(&self, name: &str) -> Option<u32> {
        lock(&self.cookies).get(name).map(|(_, days)| *days)
    }
}

impl CookieJar for MemoryCookies {
    fn get(&self, name: &str) -> Option<String> {
        lock(&self.cookies).get(name).map(|(value, _)| value.clone())
    }

    fn set(&self, name: &str, value: &str, max_age_days: u32) {
        lock(&self.cookies).insert(name.to_string(), (value.to_string(), max_age_days));
    }

    fn remove(&self, name: &str) {
        lock(&self.cookies).remove(name);
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::BrowserCookies;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlDocument;

    use super::{cookie_assignment, parse_cookie, CookieJar};

    /// `document.cookie` of the current page.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserCookies;

    fn document() -> Option<HtmlDocument> {
        web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
    }

    fn write(assignment: &str) {
        let Some(doc) = document() else {
            tracing::warn!("no document; cookie not written");
            return;
        };
        if let Err(e) = doc.set_cookie(assignment) {
            tracing::error!("failed to write cookie: {e:?}");
        }
    }

    impl CookieJar for BrowserCookies {
        fn get(&self, name: &str) -> Option<String> {
            let header = document()?.cookie().ok()?;
            parse_cookie(&header, name)
        }

        fn set(&self, name: &str, value: &str, max_age_days: u32) {
            write(&cookie_assignment(name, value, max_age_days));
        }

        fn remove(&self, name: &str) {
            write(&cookie_assignment(name, "", 0));
        }
    }
}

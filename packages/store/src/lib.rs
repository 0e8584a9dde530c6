//! # Store crate: client state and presentation rules
//!
//! Everything the web client decides without touching the DOM: which page is
//! showing, who is signed in, which popup is open, how ratings and rows are
//! rendered and whether a form may be submitted. The `ui` crate owns an
//! [`AppState`] inside a signal and asks this crate what to draw.

pub mod config;
pub mod controller;
pub mod cookies;
pub mod layout;
pub mod navigation;
pub mod popups;
pub mod rating;
pub mod render;
pub mod search;
pub mod session;
pub mod validation;

pub use config::{ClientConfig, ConfigError};
pub use cookies::{CookieJar, MemoryCookies};
pub use navigation::{NavLink, NavigationOutcome, Page};
pub use popups::{Dismissal, Popup, PopupState};
pub use rating::{render_stars, StarEntry, StarIcon};
pub use search::{SearchPlan, SearchSequencer, SearchTicket};
pub use session::{AppState, CookieAction, DismissOutcome, SessionChange};
pub use validation::ValidationError;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use cookies::BrowserCookies;

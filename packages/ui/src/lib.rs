//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{make_client, make_cookies, AppTransport};

mod session;
pub use session::{
    use_api, use_app_state, use_config, use_session, Api, PageContent, SessionProvider,
};

mod timer;

mod stars;
pub use stars::{RatingSummary, StarEntryInput, StarIcons, Stars};

mod book_card;
pub use book_card::{BookCard, SummaryRow};

mod review_fields;

mod follow;

mod header;
pub use header::Header;

pub mod popups;
pub use popups::{AccountPopups, AlertBanner};

pub mod views;

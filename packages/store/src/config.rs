//! # Client configuration: `bookshelf.toml`
//!
//! Tunables of the web client that would otherwise be scattered constants.
//! The web entry point embeds the file at build time and parses it once at
//! startup; a missing table or key falls back to the default below.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = ""               # empty = same origin
//!
//! [session]
//! cookie_name = "sessionID"
//! remember_days = 50
//!
//! [ui]
//! alert_seconds = 8
//! summary_card_width = 250
//! resize_debounce_ms = 300
//! permanent_lists = ["Currently Reading", "Want to Read", "Have Read"]
//! sign_in_notice = "..."
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with TOML parsing and validation. |
//! | [`ApiConfig`] | Where requests are sent. |
//! | [`SessionConfig`] | Name and lifetime of the remember-me cookie. |
//! | [`UiConfig`] | Alert timing, row layout and list rules. |

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid bookshelf.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid bookshelf.toml: {0}")]
    Invalid(String),
}

/// Top-level configuration stored in `bookshelf.toml`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ApiConfig {
    /// Origin prefixed to every `/cgi-bin/...` path. Empty means the page's
    /// own origin.
    #[serde(default)]
    pub base_url: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Lifetime of the cookie written when "remember me" is ticked.
    #[serde(default = "default_remember_days")]
    pub remember_days: u32,
}

fn default_cookie_name() -> String {
    "sessionID".to_string()
}

fn default_remember_days() -> u32 {
    50
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            remember_days: default_remember_days(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_alert_seconds")]
    pub alert_seconds: u32,
    /// Width in pixels of one book card in a summary row.
    #[serde(default = "default_summary_card_width")]
    pub summary_card_width: u32,
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u32,
    /// Reading lists that can never be deleted.
    #[serde(default = "default_permanent_lists")]
    pub permanent_lists: Vec<String>,
    /// Shown above the sign-in form when a page needs an account.
    #[serde(default = "default_sign_in_notice")]
    pub sign_in_notice: String,
}

fn default_alert_seconds() -> u32 {
    8
}

fn default_summary_card_width() -> u32 {
    250
}

fn default_resize_debounce_ms() -> u32 {
    300
}

fn default_permanent_lists() -> Vec<String> {
    ["Currently Reading", "Want to Read", "Have Read"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_sign_in_notice() -> String {
    "You need to sign in to view this page. Cancelling will take you back to the home page."
        .to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            alert_seconds: default_alert_seconds(),
            summary_card_width: default_summary_card_width(),
            resize_debounce_ms: default_resize_debounce_ms(),
            permanent_lists: default_permanent_lists(),
            sign_in_notice: default_sign_in_notice(),
        }
    }
}

impl ClientConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse `s`, logging and falling back to the defaults when it is invalid.
    pub fn from_toml_or_default(s: &str) -> Self {
        match Self::from_toml(s) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{e}; using default configuration");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.summary_card_width == 0 {
            return Err(ConfigError::Invalid(
                "ui.summary_card_width must be positive".to_string(),
            ));
        }
        if self.session.cookie_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "session.cookie_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_permanent_list(&self, name: &str) -> bool {
        self.ui.permanent_lists.iter().any(|l| l == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.session.cookie_name, "sessionID");
        assert_eq!(config.session.remember_days, 50);
        assert_eq!(config.ui.alert_seconds, 8);
        assert_eq!(config.ui.summary_card_width, 250);
        assert_eq!(config.ui.resize_debounce_ms, 300);
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "https://books.example"

            [ui]
            alert_seconds = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://books.example");
        assert_eq!(config.ui.alert_seconds, 4);
        assert_eq!(config.ui.summary_card_width, 250);
        assert!(config.is_permanent_list("Have Read"));
    }

    #[test]
    fn zero_card_width_is_rejected() {
        let err = ClientConfig::from_toml("[ui]\nsummary_card_width = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn invalid_file_falls_back_to_default() {
        let config = ClientConfig::from_toml_or_default("[session\ncookie_name = ");
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn custom_lists_are_not_permanent() {
        let config = ClientConfig::default();
        assert!(config.is_permanent_list("Want to Read"));
        assert!(!config.is_permanent_list("Holiday"));
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SignUpRequest {
    pub first_name: String,
    pub surname: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

/// Answer to both sign-in and sign-up. Success is signalled by a session id;
/// on failure `message` is meant for the user.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct AccountResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

impl AccountResponse {
    /// The issued token, ignoring empty strings.
    pub fn token(&self) -> Option<&str> {
        self.session_id.as_deref().filter(|s| !s.is_empty())
    }
}

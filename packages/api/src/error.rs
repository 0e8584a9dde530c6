use thiserror::Error;

/// Failure of a single API request. Every failure is terminal for that
/// request; nothing is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server answered 403: the session token is missing, invalid or expired.
    #[error("session expired")]
    SessionExpired,

    /// Any other non-2xx answer. `body` is the raw response text, which for
    /// page-level requests is a server-rendered error page.
    #[error("{status} {body}")]
    Server { status: u16, body: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// A 2xx answer whose body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }

    /// Markup to substitute into the main content region when a page-level
    /// fetch fails.
    pub fn page_body(&self) -> String {
        match self {
            ApiError::Server { body, .. } => body.clone(),
            other => format!("<h1>Something went wrong</h1><p>{other}</p>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_displays_status_and_body() {
        let err = ApiError::Server {
            status: 404,
            body: "<h1>404 Not Found</h1>".to_string(),
        };
        assert_eq!(err.to_string(), "404 <h1>404 Not Found</h1>");
        assert_eq!(err.page_body(), "<h1>404 Not Found</h1>");
    }

    #[test]
    fn only_forbidden_is_session_expiry() {
        assert!(ApiError::SessionExpired.is_session_expired());
        assert!(!ApiError::Network("offline".into()).is_session_expired());
    }
}

use crate::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Status and body of a completed request, before any interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Async interface for issuing HTTP requests.
///
/// `Err` is reserved for requests that never produced a response; any status
/// code the server returns comes back as `Ok`.
pub trait Transport {
    fn get(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<HttpResponse, ApiError>>;
    fn post(
        &self,
        url: &str,
        body: String,
    ) -> impl std::future::Future<Output = Result<HttpResponse, ApiError>>;
}

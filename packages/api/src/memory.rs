use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::transport::{HttpMethod, HttpResponse, Transport};
use crate::ApiError;

/// A request seen by [`MemoryTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: HttpMethod,
    /// Full URL including the query string.
    pub url: String,
    pub body: Option<String>,
}

impl RecordedRequest {
    /// URL without the query string.
    pub fn path(&self) -> &str {
        self.url.split('?').next().unwrap_or(&self.url)
    }

    /// Decoded value of a query parameter, if present.
    pub fn query_param(&self, name: &str) -> Option<String> {
        let (_, query) = self.url.split_once('?')?;
        query.split('&').find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            let key = urlencoding::decode(key).ok()?;
            if key == name {
                urlencoding::decode(value).ok().map(|v| v.into_owned())
            } else {
                None
            }
        })
    }

    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body.as_deref().and_then(|b| serde_json::from_str(b).ok())
    }
}

/// Scripted in-memory transport for tests and offline previews.
///
/// Responses are keyed by path (query string ignored). Unscripted paths answer
/// 404 with a small error page, matching the server's fallback handler.
#[derive(Clone, Debug, Default)]
pub struct MemoryTransport {
    responses: Arc<Mutex<HashMap<String, HttpResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the response for `path`, replacing any previous one.
    pub fn respond(&self, path: &str, response: HttpResponse) {
        lock(&self.responses).insert(path.to_string(), response);
    }

    /// Script a 200 response with a JSON body.
    pub fn respond_json(&self, path: &str, body: serde_json::Value) {
        self.respond(path, HttpResponse::ok(body.to_string()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    fn answer(&self, request: RecordedRequest) -> HttpResponse {
        let response = lock(&self.responses)
            .get(request.path())
            .cloned()
            .unwrap_or_else(|| HttpResponse::with_status(404, "<h1>404 Not Found</h1>"));
        lock(&self.requests).push(request);
        response
    }
}

impl Transport for MemoryTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, ApiError> {
        Ok(self.answer(RecordedRequest {
            method: HttpMethod::Get,
            url: url.to_string(),
            body: None,
        }))
    }

    async fn post(&self, url: &str, body: String) -> Result<HttpResponse, ApiError> {
        Ok(self.answer(RecordedRequest {
            method: HttpMethod::Post,
            url: url.to_string(),
            body: Some(body),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unscripted_path_is_not_found() {
        let transport = MemoryTransport::new();
        let response = transport.get("/cgi-bin/nope?x=1").await.unwrap();
        assert_eq!(response.status, 404);
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn scripted_response_ignores_query() {
        let transport = MemoryTransport::new();
        transport.respond("/cgi-bin/search/search", HttpResponse::ok("[]"));
        let response = transport
            .get("/cgi-bin/search/search?query=dune")
            .await
            .unwrap();
        assert_eq!(response.body, "[]");
        let requests = transport.requests();
        assert_eq!(requests[0].query_param("query").as_deref(), Some("dune"));
    }
}

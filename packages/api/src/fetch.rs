//! Browser transport built on `fetch` via [`gloo_net`].

use gloo_net::http::{Request, Response};

use crate::transport::{HttpResponse, Transport};
use crate::ApiError;

/// [`Transport`] backed by the browser's `fetch`.
///
/// URLs are resolved against `base_url`, which is empty when the API is
/// served from the same origin as the client.
#[derive(Clone, Debug, Default)]
pub struct FetchTransport {
    base_url: String,
}

impl FetchTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn resolve(&self, url: &str) -> String {
        format!("{}{url}", self.base_url)
    }
}

fn map_network_error(error: gloo_net::Error) -> ApiError {
    ApiError::Network(error.to_string())
}

async fn into_response(response: Response) -> Result<HttpResponse, ApiError> {
    let status = response.status();
    let body = response.text().await.map_err(map_network_error)?;
    Ok(HttpResponse { status, body })
}

impl Transport for FetchTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, ApiError> {
        let response = Request::get(&self.resolve(url))
            .send()
            .await
            .map_err(map_network_error)?;
        into_response(response).await
    }

    async fn post(&self, url: &str, body: String) -> Result<HttpResponse, ApiError> {
        let response = Request::post(&self.resolve(url))
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(map_network_error)?
            .send()
            .await
            .map_err(map_network_error)?;
        into_response(response).await
    }
}

//! # API crate: typed client for the Bookshelf JSON endpoints
//!
//! Every page of the web client talks to the server through [`ApiClient`]. The
//! client owns a [`Transport`] and turns each `/cgi-bin/...` endpoint into a
//! typed `async fn`, so views never build URLs or parse JSON themselves.
//!
//! ## Modules
//!
//! | Module | Target | Purpose |
//! |--------|--------|---------|
//! | [`models`] | all | Serde models for request bodies and response payloads |
//! | [`query`] | all | GET query-string builder (`?a=1&b=2`, URL-encoded) |
//! | `client` | all | [`ApiClient`] with one method per endpoint |
//! | `transport` | all | [`Transport`] trait and the raw [`HttpResponse`] |
//! | `memory` | all | [`MemoryTransport`], a scripted transport for tests |
//! | `fetch` | `wasm32` | [`FetchTransport`], the browser `fetch` implementation |
//!
//! ## Error convention
//!
//! HTTP 403 always means "session invalid or expired" and surfaces as
//! [`ApiError::SessionExpired`]. Every other non-2xx status keeps its body in
//! [`ApiError::Server`] so page-level failures can display the server-rendered
//! error page in place.

mod client;
mod error;
mod memory;
pub mod models;
pub mod query;
mod transport;

#[cfg(target_arch = "wasm32")]
mod fetch;
#[cfg(target_arch = "wasm32")]
pub use fetch::FetchTransport;

pub use client::{endpoints, ApiClient};
pub use error::ApiError;
pub use memory::{MemoryTransport, RecordedRequest};
pub use transport::{HttpMethod, HttpResponse, Transport};

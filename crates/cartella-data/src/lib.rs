//! HTTP client and remote catalog service access for Cartella.
//!
//! Provides a small builder API over `reqwest` with automatic JSON handling,
//! plus the [`CatalogApi`] seam the catalog store is built against.
//!
//! # Example
//!
//! ```rust,ignore
//! use cartella_data::{CatalogApi, FetchClient, HttpCatalogApi};
//!
//! let client = FetchClient::new().with_base_url("http://localhost:8000");
//! let api = HttpCatalogApi::new(client);
//!
//! let records = api.list_products().await?;
//! let hits = api.search_products("running shoes").await?;
//! ```

mod api;
mod error;
mod memory;
mod request;
mod response;

pub use api::{CatalogApi, HttpCatalogApi};
pub use error::FetchError;
pub use memory::InMemoryCatalogApi;
pub use request::{Method, RequestBuilder};
pub use response::Response;

use std::collections::HashMap;
use std::time::Duration;

/// HTTP client for making outbound requests.
#[derive(Debug, Clone)]
pub struct FetchClient {
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
    timeout: Option<Duration>,
    inner: reqwest::Client,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            base_url: None,
            default_headers: HashMap::new(),
            timeout: None,
            inner: reqwest::Client::new(),
        }
    }

    /// Create a client with a base URL that will be prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Fail requests that take longer than `timeout`. No timeout by default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The configured base URL, if any.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder<'_> {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder<'_> {
        self.request(Method::Post, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder<'_> {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) => {
                if url.starts_with("http://") || url.starts_with("https://") {
                    url
                } else {
                    format!("{}{}", base.trim_end_matches('/'), url)
                }
            }
            None => url,
        };

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder {
            client: self,
            builder,
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder<'a> {
    client: &'a FetchClient,
    builder: RequestBuilder,
}

impl ClientRequestBuilder<'_> {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Append a percent-encoded query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.query(key, value);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// The request as it will be sent.
    pub fn build(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Send the request and buffer the response.
    pub async fn send(self) -> Result<Response, FetchError> {
        let url = self.builder.full_url();
        let mut request = self
            .client
            .inner
            .request(self.builder.method.into(), &url);

        for (key, value) in &self.builder.headers {
            request = request.header(key.as_str(), value.as_str());
        }
        if let Some(body) = self.builder.body {
            request = request.body(body);
        }
        if let Some(timeout) = self.client.timeout {
            request = request.timeout(timeout);
        }

        tracing::trace!(method = self.builder.method.as_str(), %url, "sending request");
        let response = request.send().await?;
        Response::from_reqwest(response).await
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CatalogApi, FetchClient, FetchError, HttpCatalogApi, Method, Response};
}

//! Portico API client
//!
//! Session continuity is carried by the server-set session cookie (the
//! browser fetch backend sends it on same-origin requests); the client's
//! only credential handling is echoing the anti-forgery cookie on
//! state-changing calls.

pub mod cookie;
pub mod error;
pub mod session;

use error::ClientError;
use reqwest::{Client, ClientBuilder, Method};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

/// Client for the Portico REST API
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    /// Explicit anti-forgery token; when unset, the browser cookie jar
    /// is consulted per request.
    csrf_token: Option<String>,
}

impl ApiClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder, echoing the anti-forgery token on
    /// state-changing methods.
    pub fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let needs_csrf = requires_csrf(&method);
        let mut request = self.client.request(method, url);

        if needs_csrf {
            let token = self.csrf_token.clone().or_else(cookie::csrf_token);
            if let Some(token) = token {
                request = request.header(cookie::CSRF_HEADER, token);
            }
        }

        request
    }

    /// Execute a request and decode a JSON response body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_else(|_| status.to_string());
            tracing::debug!(status = status.as_u16(), "request rejected by server");
            Err(ClientError::from_response(status.as_u16(), &body))
        }
    }

    /// Execute a request whose response body is irrelevant
    pub async fn execute_unit(&self, request: reqwest::RequestBuilder) -> Result<(), ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_else(|_| status.to_string());
            tracing::debug!(status = status.as_u16(), "request rejected by server");
            Err(ClientError::from_response(status.as_u16(), &body))
        }
    }
}

/// Whether a method mutates server state and therefore needs the
/// anti-forgery header.
fn requires_csrf(method: &Method) -> bool {
    !(method == Method::GET
        || method == Method::HEAD
        || method == Method::OPTIONS
        || method == Method::TRACE)
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    #[cfg(not(target_arch = "wasm32"))]
    timeout: Option<Duration>,
    user_agent: Option<String>,
    csrf_token: Option<String>,
}

impl ApiClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout (not supported on wasm)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Supply the anti-forgery token explicitly instead of reading the
    /// browser cookie jar (native callers and tests).
    pub fn csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;
        let base_url = base_url.trim_end_matches('/').to_string();

        #[allow(unused_mut)]
        let mut client_builder = ClientBuilder::new().user_agent(
            self.user_agent
                .unwrap_or_else(|| "portico-client/0.1.0".to_string()),
        );

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder.build()?;

        Ok(ApiClient {
            client,
            base_url,
            csrf_token: self.csrf_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_methods_skip_csrf() {
        assert!(!requires_csrf(&Method::GET));
        assert!(!requires_csrf(&Method::HEAD));
        assert!(!requires_csrf(&Method::OPTIONS));
    }

    #[test]
    fn mutating_methods_require_csrf() {
        assert!(requires_csrf(&Method::POST));
        assert!(requires_csrf(&Method::PUT));
        assert!(requires_csrf(&Method::DELETE));
        assert!(requires_csrf(&Method::PATCH));
    }

    #[test]
    fn builder_trims_trailing_slash() {
        let client = ApiClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn builder_requires_base_url() {
        let result = ApiClient::builder().build();
        assert!(matches!(result, Err(ClientError::Configuration(_))));
    }
}

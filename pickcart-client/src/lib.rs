pub mod accounts;
pub mod catalog;
pub mod orders;
pub mod routes;
mod wire;

/// HTTP client for the warehouse storefront API.
///
/// One instance per session; it holds no state beyond the connection pool,
/// so every call is independently re-invocable. All classification of
/// responses into domain results happens here, at the wire boundary.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(base_url, reqwest::Client::new())
    }

    /// Build against a preconfigured [`reqwest::Client`] (custom TLS,
    /// proxies, timeouts).
    pub fn with_http(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http, base_url }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

//! Client SDK for the mock cloud
//!
//! Scrapes the server's logs for resource references and reports which of
//! them are healthy.
//!
//! # Example
//! ```no_run
//! use cloud_log_sdk::sdk::CloudSdk;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let sdk = CloudSdk::new(Some("http://localhost:8000/"))?;
//! for line in sdk.discover_resources().await? {
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```

use std::{env, time::Duration};

use reqwest::Client;
use url::Url;

use crate::errors::SdkError;

pub mod client;
pub mod reconcile;

pub use client::{CloudApi, HttpCloudApi};
pub use reconcile::discover_resources;

/// Where a locally loaded SDK talks to.
pub const LOCAL_BASE_URL: &str = "http://localhost:8000";

/// Picks the root URL every request is relative to.
///
/// An explicit, non-empty `base_url` wins and loses its trailing slashes.
/// Otherwise the `origin` the SDK was loaded from decides: a `file:` origin
/// (or none at all) maps to [`LOCAL_BASE_URL`], a network origin is reused as
/// `scheme://host[:port]`.
pub fn resolve_base_url(base_url: Option<&str>, origin: Option<&Url>) -> Result<String, SdkError> {
    if let Some(explicit) = base_url.filter(|value| !value.is_empty()) {
        let trimmed = explicit.trim_end_matches('/');
        Url::parse(trimmed)?;
        return Ok(trimmed.to_string());
    }

    let Some(origin) = origin else {
        return Ok(LOCAL_BASE_URL.to_string());
    };

    if origin.scheme() == "file" {
        return Ok(LOCAL_BASE_URL.to_string());
    }

    let host = origin.host_str().ok_or(url::ParseError::EmptyHost)?;
    Ok(match origin.port() {
        Some(port) => format!("{}://{host}:{port}", origin.scheme()),
        None => format!("{}://{host}", origin.scheme()),
    })
}

/// The executable this SDK runs in, as a `file:` URL.
fn loading_context() -> Option<Url> {
    env::current_exe()
        .ok()
        .and_then(|path| Url::from_file_path(path).ok())
}

#[derive(Debug, Clone)]
pub struct CloudSdk {
    api: HttpCloudApi,
}

impl CloudSdk {
    /// Create an SDK for `base_url`, or for the loading context when `None`.
    pub fn new(base_url: Option<&str>) -> Result<Self, SdkError> {
        let base_url = resolve_base_url(base_url, loading_context().as_ref())?;
        Ok(Self::from_resolved(base_url, Client::new()))
    }

    /// Create an SDK as if it had been loaded from `origin`.
    pub fn from_origin(origin: &str) -> Result<Self, SdkError> {
        let origin = Url::parse(origin)?;
        let base_url = resolve_base_url(None, Some(&origin))?;
        Ok(Self::from_resolved(base_url, Client::new()))
    }

    fn from_resolved(base_url: String, client: Client) -> Self {
        Self {
            api: HttpCloudApi::new(base_url, client),
        }
    }

    /// Use a custom HTTP client
    pub fn with_client(self, client: Client) -> Self {
        Self::from_resolved(self.api.base_url().to_string(), client)
    }

    /// Bound every request by `timeout`
    pub fn with_timeout(self, timeout: Duration) -> Result<Self, SdkError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(self.with_client(client))
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    pub async fn discover_resources(&self) -> Result<Vec<String>, SdkError> {
        discover_resources(&self.api).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(value: &str) -> Url {
        Url::parse(value).expect("valid url")
    }

    #[test]
    fn trailing_slashes_are_stripped() {
        for base in ["http://x", "http://x/", "http://x///"] {
            let sdk = CloudSdk::new(Some(base)).expect("sdk builds");
            assert_eq!(sdk.base_url(), "http://x");
        }
    }

    #[test]
    fn explicit_base_keeps_its_path() {
        let resolved = resolve_base_url(Some("https://cloud.example/api/v1/"), None)
            .expect("resolves");
        assert_eq!(resolved, "https://cloud.example/api/v1");
    }

    #[test]
    fn explicit_base_wins_over_origin() {
        let resolved = resolve_base_url(Some("http://a:9000/"), Some(&url("https://b.example/sdk.ts")))
            .expect("resolves");
        assert_eq!(resolved, "http://a:9000");
    }

    #[test]
    fn invalid_explicit_base_is_rejected() {
        let err = CloudSdk::new(Some("not a url/")).expect_err("expected invalid url");
        assert!(matches!(err, SdkError::InvalidUrl(_)));
    }

    #[test]
    fn file_origin_uses_local_endpoint() {
        let resolved = resolve_base_url(None, Some(&url("file:///srv/app/sdk.ts"))).expect("resolves");
        assert_eq!(resolved, LOCAL_BASE_URL);
    }

    #[test]
    fn empty_base_falls_back_to_origin() {
        let resolved = resolve_base_url(Some(""), Some(&url("http://example.com/sdk.ts")))
            .expect("resolves");
        assert_eq!(resolved, "http://example.com");
    }

    #[test]
    fn network_origin_reuses_scheme_and_host() {
        let sdk = CloudSdk::from_origin("https://cloud.example:8443/sdk.ts?v=1").expect("sdk builds");
        assert_eq!(sdk.base_url(), "https://cloud.example:8443");

        let sdk = CloudSdk::from_origin("http://cloud.example:80/sdk.ts").expect("sdk builds");
        assert_eq!(sdk.base_url(), "http://cloud.example");
    }

    #[test]
    fn default_loading_context_is_local() {
        let sdk = CloudSdk::new(None).expect("sdk builds");
        assert_eq!(sdk.base_url(), LOCAL_BASE_URL);
    }

    #[test]
    fn timeout_keeps_base_url() {
        let sdk = CloudSdk::new(Some("http://x/"))
            .expect("sdk builds")
            .with_timeout(Duration::from_secs(5))
            .expect("client builds");
        assert_eq!(sdk.base_url(), "http://x");
    }
}

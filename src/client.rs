// src/client.rs
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// HTTP client for the crt.sh certificate search endpoint
pub struct CrtShClient {
    base_uri: Url,
    http_client: reqwest::Client,
}

impl CrtShClient {
    /// Create a new crt.sh client.
    ///
    /// A zero timeout leaves the client without a request timeout.
    pub fn new(base_uri: Url, timeout: Duration) -> Result<Self> {
        let mut builder = reqwest::Client::builder().gzip(true);
        if !timeout.is_zero() {
            builder = builder.timeout(timeout);
        }

        let http_client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            base_uri,
            http_client,
        })
    }

    /// Query certificates for a domain pattern.
    /// Endpoint: GET {base_uri}?output=json&q={domain}
    ///
    /// Returns the open response on HTTP 200; the body is left unread so the
    /// caller decides how to consume it. Any other status is an error carrying
    /// the numeric code. Exactly one request is issued, with no retry.
    pub async fn fetch_cert_stream(&self, domain: &str) -> Result<reqwest::Response> {
        let mut url = self.base_uri.clone();
        url.query_pairs_mut()
            .append_pair("output", "json")
            .append_pair("q", domain);

        debug!("Requesting: {}", url);

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .context("error retrieving cert stream")?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            anyhow::bail!(
                "server returned {} http status code ({})",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown")
            );
        }

        Ok(response)
    }
}

//! HTTP reachability check for movie links.
//!
//! Drive links only stream when the file is shared with "Anyone with the link". A HEAD request
//! against the direct-download URL tells the bot whether that is the case before it sends
//! everyone to a login page.

use std::time::Duration;

use reqwest::StatusCode;

/// How long a probe may take before the link is reported unreachable.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for probing whether a movie URL serves content.
///
/// Wraps a `reqwest::Client`, which is reference-counted internally, so cloning is cheap.
#[derive(Clone)]
pub struct LinkProbe {
    http_client: reqwest::Client,
}

impl LinkProbe {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    /// Sends a HEAD request and reports whether the URL serves content.
    ///
    /// Redirects are followed by the client. Timeouts, DNS failures and every other transport
    /// error count as unreachable.
    ///
    /// # Arguments
    /// - `url` - Direct URL to probe
    ///
    /// # Returns
    /// - `true` - Final response was 200 OK or 206 Partial Content
    /// - `false` - Any other status, or the request failed
    pub async fn reachable(&self, url: &str) -> bool {
        match self
            .http_client
            .head(url)
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => {
                let status = response.status();
                if !serves_content(status) {
                    tracing::debug!("Probe of {} returned {}", url, status);
                }
                serves_content(status)
            }
            Err(e) => {
                tracing::debug!("Probe of {} failed: {}", url, e);
                false
            }
        }
    }
}

/// Whether a response status means the movie bytes are available.
pub fn serves_content(status: StatusCode) -> bool {
    matches!(status, StatusCode::OK | StatusCode::PARTIAL_CONTENT)
}

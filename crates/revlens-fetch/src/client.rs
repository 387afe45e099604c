use std::time::Duration;

use reqwest::header::USER_AGENT;
use reqwest::{Client, StatusCode};

use crate::error::FetchError;
use crate::retry::retry_with_backoff;
use crate::types::RawDocument;

/// User-Agent pool rotated per request when no fixed agent is configured.
/// Product pages routinely vary their markup by client; a desktop browser
/// agent keeps the review markup in the served HTML.
const USER_AGENT_POOL: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/118.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 Version/15.1 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/119.0.0.0 Safari/537.36",
];

/// HTTP client for retrieving product pages as raw HTML.
///
/// Maps 404 and other non-2xx responses to typed errors and rejects empty
/// bodies. Transient errors (5xx, 429, network failures) are automatically
/// retried with exponential backoff up to `max_retries` additional attempts.
pub struct DocumentFetcher {
    client: Client,
    /// Fixed User-Agent; `None` rotates through [`USER_AGENT_POOL`].
    user_agent: Option<String>,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in seconds for exponential backoff: `backoff_base_secs * 2^attempt`.
    backoff_base_secs: u64,
}

impl DocumentFetcher {
    /// Creates a `DocumentFetcher` with configured timeout and retry policy.
    ///
    /// `user_agent` pins a fixed agent string; pass `None` to rotate through
    /// the built-in pool per request. `max_retries` is the number of
    /// additional attempts after the first failure; `0` disables retries.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        timeout_secs: u64,
        user_agent: Option<&str>,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            user_agent: user_agent.map(ToOwned::to_owned),
            max_retries,
            backoff_base_secs,
        })
    }

    /// Fetches `url` and returns the raw HTML document, retrying transient
    /// failures with exponential backoff.
    ///
    /// # Errors
    ///
    /// - [`FetchError::InvalidUrl`] — `url` does not parse (not retried).
    /// - [`FetchError::NotFound`] — HTTP 404 (not retried).
    /// - [`FetchError::UnexpectedStatus`] — other non-2xx status; 5xx and 429
    ///   are retried first.
    /// - [`FetchError::EmptyBody`] — 2xx with a blank body (not retried).
    /// - [`FetchError::Http`] — network or TLS failure after all retries.
    pub async fn fetch(&self, url: &str) -> Result<RawDocument, FetchError> {
        if let Err(e) = reqwest::Url::parse(url) {
            return Err(FetchError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            });
        }

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            self.fetch_once(url)
        })
        .await
    }

    async fn fetch_once(&self, url: &str) -> Result<RawDocument, FetchError> {
        let agent = self.user_agent.as_deref().unwrap_or_else(|| pick_user_agent());

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, agent)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = response.text().await?;
        if html.trim().is_empty() {
            return Err(FetchError::EmptyBody {
                url: url.to_string(),
            });
        }

        tracing::debug!(url, bytes = html.len(), "fetched product page");
        Ok(RawDocument {
            url: url.to_string(),
            html,
        })
    }
}

/// Picks a User-Agent from the pool at random.
///
/// Rotation only affects request headers — never scoring or classification,
/// which must stay deterministic for identical review text.
fn pick_user_agent() -> &'static str {
    USER_AGENT_POOL[rand::random_range(0..USER_AGENT_POOL.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_user_agent_returns_pool_member() {
        for _ in 0..20 {
            let agent = pick_user_agent();
            assert!(USER_AGENT_POOL.contains(&agent));
        }
    }

    #[tokio::test]
    async fn invalid_url_is_rejected_without_network() {
        let fetcher = DocumentFetcher::new(5, None, 0, 0).expect("build fetcher");
        let err = fetcher.fetch("not a url").await.expect_err("should fail");
        assert!(matches!(err, FetchError::InvalidUrl { .. }), "got {err:?}");
    }
}

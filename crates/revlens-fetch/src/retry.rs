//! Retry with exponential back-off and jitter for page fetches.
//!
//! [`retry_with_backoff`] wraps a fallible async operation and retries on
//! transient errors (network failures, 5xx, 429). Deterministic failures —
//! 404, other 4xx, empty bodies, invalid URLs — are returned immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::FetchError;

/// Returns `true` for errors that are worth retrying after a back-off delay.
///
/// **Retriable:**
/// - Network-level failures: timeout, connection reset.
/// - HTTP 5xx and 429: transient server-side conditions.
///
/// **Not retriable (returned immediately):**
/// - [`FetchError::NotFound`] and other 4xx — the page will not appear on retry.
/// - [`FetchError::EmptyBody`] — the server answered; the page has no content.
/// - [`FetchError::InvalidUrl`] — caller input problem.
pub(crate) fn is_retriable(err: &FetchError) -> bool {
    match err {
        FetchError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
        FetchError::UnexpectedStatus { status, .. } => *status >= 500 || *status == 429,
        FetchError::InvalidUrl { .. }
        | FetchError::NotFound { .. }
        | FetchError::EmptyBody { .. } => false,
    }
}

/// Runs `operation` with up to `max_retries` additional attempts on transient errors.
///
/// The wait before the n-th retry is `backoff_base_secs * 2^(n-1)` seconds
/// with ±25 % jitter, capped at 60 s. With `max_retries = 0` the operation
/// runs exactly once.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, FetchError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, FetchError>>,
{
    const MAX_DELAY_MS: u64 = 60_000;
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                let base_ms = backoff_base_secs.saturating_mul(1_000);
                let computed = base_ms.saturating_mul(1u64 << (attempt - 1).min(10));
                let capped = computed.min(MAX_DELAY_MS);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let delay_ms = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
                tracing::warn!(
                    attempt,
                    max_retries,
                    delay_ms,
                    error = %err,
                    "transient fetch error — retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}

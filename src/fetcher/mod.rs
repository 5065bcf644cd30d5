pub mod http_fetcher;

use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::app::Result;

pub use http_fetcher::HttpFetcher;

/// A single HTTP GET returning the response body as text.
///
/// Implementations apply their own per-attempt timeout. Retry is layered on
/// top by [`fetch_with_retry`].
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

/// Bounded-retry policy: fixed delay between attempts, not exponential.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Retries after the first failed attempt, so `max_retries + 1` attempts
    /// in total.
    pub max_retries: u32,
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            retry_delay: Duration::from_secs(2),
        }
    }
}

/// Fetch `url`, retrying on any failure (transport, timeout, or non-success
/// status) up to `policy.max_retries` times with a fixed delay in between.
///
/// The last error is surfaced unchanged once retries are exhausted; callers
/// decide the fallback behavior. Each call is independent — concurrent calls
/// are not coordinated here.
pub async fn fetch_with_retry(
    fetcher: &dyn Fetcher,
    url: &str,
    policy: &RetryPolicy,
) -> Result<String> {
    let mut attempt: u32 = 1;
    loop {
        match fetcher.fetch_text(url).await {
            Ok(body) => return Ok(body),
            Err(err) if attempt <= policy.max_retries => {
                warn!(
                    %url,
                    attempt,
                    delay_ms = policy.retry_delay.as_millis() as u64,
                    error = %err,
                    "fetch failed, retrying"
                );
                tokio::time::sleep(policy.retry_delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

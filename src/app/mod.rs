pub mod error;

pub use error::{NewsError, Result};

use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::domain::{Article, FeedItem};
use crate::extract;
use crate::fetcher::{fetch_with_retry, Fetcher, HttpFetcher, RetryPolicy};

/// Wires the fetcher and the extraction pipeline together.
///
/// One instance lives for the whole process and is shared by the UI loop and
/// every background task.
pub struct AppContext {
    pub config: Config,
    fetcher: Arc<dyn Fetcher>,
    retry: RetryPolicy,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let fetcher: Arc<dyn Fetcher> = Arc::new(HttpFetcher::new(config.fetch_timeout));
        Self::with_fetcher(config, fetcher)
    }

    /// Test seam: inject a fetcher implementation.
    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher>) -> Self {
        let retry = RetryPolicy {
            max_retries: config.max_retries,
            retry_delay: config.retry_delay,
        };
        Self {
            config,
            fetcher,
            retry,
        }
    }

    /// Fetch the feed and extract its item summaries.
    ///
    /// Extraction itself never fails; only the fetch can, after retries are
    /// exhausted. The caller decides what a failed refresh does to the
    /// currently displayed list.
    pub async fn refresh(&self) -> Result<Vec<FeedItem>> {
        let body = fetch_with_retry(self.fetcher.as_ref(), &self.config.feed_url, &self.retry).await?;
        let items = extract::extract_items(&body);
        info!(count = items.len(), "refreshed feed");
        Ok(items)
    }

    /// Load the full article for one item, falling back to its feed summary.
    ///
    /// Infallible: every failure mode resolves into displayable text.
    pub async fn read_article(&self, item: &FeedItem) -> Article {
        let content = extract::extract_article(
            self.fetcher.as_ref(),
            &item.link,
            Some(&item.description),
            &self.retry,
        )
        .await;

        Article {
            title: item.title.clone(),
            content,
        }
    }
}

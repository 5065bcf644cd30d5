//! Runtime constants.
//!
//! Newstray keeps no config files and reads no environment variables; the
//! whole configuration surface is this struct. The CLI may override the feed
//! URL, everything else is fixed.

use std::time::Duration;

pub const DEFAULT_FEED_URL: &str = "https://rss.app/feeds/azpF5IGCTcm2pPdT.xml";

/// Items shown per list page.
pub const ITEMS_PER_PAGE: usize = 10;

/// Maximum feed items retained per refresh.
pub const ITEM_CAP: usize = 50;

#[derive(Debug, Clone)]
pub struct Config {
    pub feed_url: String,
    pub items_per_page: usize,
    /// Per-attempt HTTP timeout.
    pub fetch_timeout: Duration,
    /// Retries after the first failed attempt.
    pub max_retries: u32,
    /// Fixed delay between attempts, not exponential.
    pub retry_delay: Duration,
    /// Period of the background feed refresh.
    pub refresh_period: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            items_per_page: ITEMS_PER_PAGE,
            fetch_timeout: Duration::from_secs(15),
            max_retries: 2,
            retry_delay: Duration::from_secs(2),
            refresh_period: Duration::from_secs(600),
        }
    }
}

use clap::Parser;

/// A compact terminal news reader: one feed, paginated summaries,
/// full articles on demand.
#[derive(Debug, Parser)]
#[command(name = "newstray", version, about)]
pub struct Cli {
    /// Feed URL to read (defaults to the built-in feed)
    pub feed_url: Option<String>,
}

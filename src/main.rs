use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use newstray::app::AppContext;
use newstray::cli::Cli;
use newstray::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = Config::default();
    if let Some(url) = cli.feed_url {
        config.feed_url = url;
    }

    let ctx = AppContext::new(config);
    newstray::tui::run(Arc::new(ctx)).await?;

    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;

use gif_market::cli::{run_once, Cli};
use gif_market::logging::init_tracing;
use gif_market::provider::GiphyClient;
use gif_market::ui;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.resolve_config().context("Failed to load configuration")?;
    let client = GiphyClient::new(&config.provider).context("Failed to create Giphy client")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    if let Some(query) = cli.once.as_deref() {
        let output = runtime
            .block_on(run_once(&client, query, &config.shop))
            .with_context(|| format!("Search for '{}' failed", query))?;
        print!("{}", output);
        return Ok(());
    }

    ui::runtime::run(config, Arc::new(client), runtime.handle().clone(), cli.query)
        .context("Terminal UI failed")?;
    Ok(())
}

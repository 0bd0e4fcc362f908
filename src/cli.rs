//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError, ShopConfig};
use crate::provider::{Gif, GiphyClient, ProviderError};

#[derive(Debug, Parser)]
#[command(name = "gif-market")]
#[command(about = "Search Giphy and fill a shopping cart from the terminal", long_about = None)]
pub struct Cli {
    /// Path to the config file (default: <config dir>/gif-market/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of results per search (overrides provider.limit)
    #[arg(long)]
    pub limit: Option<u32>,

    /// Search to run as soon as the storefront opens
    #[arg(long, short = 'q', conflicts_with = "once")]
    pub query: Option<String>,

    /// Run a single search, print the results and exit
    #[arg(long, value_name = "QUERY")]
    pub once: Option<String>,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;
        if let Some(limit) = self.limit {
            config.provider.limit = limit;
            config.validate()?;
        }
        Ok(config)
    }
}

/// Non-interactive mode: one search, results printed to stdout.
///
/// Unlike the storefront, provider errors are returned so the process can
/// exit non-zero.
pub async fn run_once(
    client: &GiphyClient,
    query: &str,
    shop: &ShopConfig,
) -> Result<String, ProviderError> {
    let gifs = client.search(query, None).await?;
    Ok(format_results(&gifs, shop))
}

/// Render results as a plain-text table, one gif per line.
pub fn format_results(gifs: &[Gif], shop: &ShopConfig) -> String {
    if gifs.is_empty() {
        return "No gifs found.\n".to_string();
    }
    let price = shop.format_price(shop.promotion_price);
    let id_width = gifs.iter().map(|g| g.id.chars().count()).max().unwrap_or(0);
    let title_width = gifs
        .iter()
        .map(|g| g.title.chars().count())
        .max()
        .unwrap_or(0);

    gifs.iter()
        .map(|gif| {
            format!(
                "{:<id_width$}  {:<title_width$}  {}  {}\n",
                gif.id,
                gif.title,
                price,
                gif.url,
                id_width = id_width,
                title_width = title_width,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rust_decimal::Decimal;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from(["gif-market", "--limit", "9", "-q", "cats"]);
        assert_eq!(cli.limit, Some(9));
        assert_eq!(cli.query.as_deref(), Some("cats"));
        assert!(cli.once.is_none());
    }

    #[test]
    fn query_and_once_conflict() {
        let result = Cli::try_parse_from(["gif-market", "-q", "cats", "--once", "dogs"]);
        assert!(result.is_err());
    }

    #[test]
    fn format_results_aligns_columns() {
        let shop = ShopConfig {
            promotion_price: Decimal::new(150, 2),
            currency_symbol: "$".to_string(),
        };
        let gifs = vec![
            Gif::new("a1", "Cat", "https://m/a1.gif"),
            Gif::new("b22", "Sleepy cat", "https://m/b22.gif"),
        ];
        let out = format_results(&gifs, &shop);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "a1   Cat         $1.50  https://m/a1.gif");
        assert_eq!(lines[1], "b22  Sleepy cat  $1.50  https://m/b22.gif");
    }

    #[test]
    fn format_results_empty() {
        assert_eq!(
            format_results(&[], &ShopConfig::default()),
            "No gifs found.\n"
        );
    }
}

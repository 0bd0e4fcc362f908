use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::credentials::ApiKey;

/// Upper bound Giphy accepts for the `limit` query parameter.
pub const MAX_SEARCH_LIMIT: u32 = 50;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub shop: ShopConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Image provider (Giphy) settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Scheme and host of the search API (e.g., "https://api.giphy.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Key sent as the `api_key` query parameter.
    #[serde(default)]
    pub api_key: Option<ApiKey>,
    /// Number of results requested per search (default: 5).
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
}

/// Storefront settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Unit price assigned to every catalog item.
    #[serde(default = "default_promotion_price")]
    pub promotion_price: Decimal,
    /// Symbol printed in front of prices.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

/// Terminal UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_base_url() -> String {
    "https://api.giphy.com".to_string()
}

fn default_limit() -> u32 {
    5
}

fn default_timeout_seconds() -> u32 {
    10
}

fn default_promotion_price() -> Decimal {
    Decimal::new(250, 2)
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            limit: default_limit(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            promotion_price: default_promotion_price(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl ShopConfig {
    /// Format an amount with the configured currency symbol and two decimals.
    pub fn format_price(&self, amount: Decimal) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }
}

//! Configuration loading and validation.
//!
//! Settings live in a TOML file under the user's config directory. A missing
//! file is not an error: every field has a default, and the Giphy API key can
//! be supplied through `GIPHY_API_KEY` instead.

mod credentials;
mod loader;
mod types;

pub use credentials::{ApiKey, API_KEY_ENV_VAR};
pub use loader::ConfigError;
pub use types::{Config, ProviderConfig, ShopConfig, UiConfig, MAX_SEARCH_LIMIT};

//! API key handling.

use serde::{Deserialize, Serialize};

/// Environment variable that overrides `provider.api_key`.
pub const API_KEY_ENV_VAR: &str = "GIPHY_API_KEY";

/// Wrapper for the provider API key that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when building a request URL.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the inner value.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Read the key from `GIPHY_API_KEY`, ignoring empty values.
    pub fn from_env() -> Option<Self> {
        std::env::var(API_KEY_ENV_VAR)
            .ok()
            .map(Self::new)
            .filter(|key| !key.is_blank())
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ApiKey(••••••••)")
    }
}

impl std::fmt::Display for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

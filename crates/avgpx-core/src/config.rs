//! Configuration parsing for the price service.
//!
//! Settings come from a single JSON file. Every field is optional; anything
//! left out falls back to the defaults exposed by the `effective_*` accessors.
//!
//! # Example config
//!
//! ```json
//! {
//!   "interval_sec": 120,
//!   "request_timeout_ms": 10000,
//!   "fetch_mode": "concurrent",
//!   "listen_addr": "0.0.0.0:8080",
//!   "providers": [
//!     { "provider": "bitfinex" },
//!     { "provider": "kraken", "endpoint": "https://api.kraken.com/0/public/Ticker?pair=BTCUSD" },
//!     { "provider": "xt", "enabled": false }
//!   ]
//! }
//! ```
//!
//! Omitting `providers` enables all twelve built-in providers.

use std::net::SocketAddr;
use std::time::Duration;

use ahash::AHashSet;
use anyhow::Context;
use serde::Deserialize;

use crate::error::FeedError;
use crate::types::{FetchMode, Provider};

/// Delay between the end of one cycle and the start of the next.
pub const DEFAULT_INTERVAL_SEC: u64 = 120;

/// Per-request timeout applied to every provider call.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Address the read interface listens on.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Top-level application config, deserialized from a JSON file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Seconds between cycles (default: 120).
    pub interval_sec: Option<u64>,

    /// Per-request timeout in milliseconds (default: 10_000).
    pub request_timeout_ms: Option<u64>,

    /// Concurrent or sequential fan-out (default: concurrent).
    pub fetch_mode: Option<FetchMode>,

    /// HTTP listen address for the read interface (default: `0.0.0.0:8080`).
    pub listen_addr: Option<String>,

    /// Provider list. `None` means every built-in provider with its default endpoint.
    pub providers: Option<Vec<ProviderConfig>>,
}

/// One provider entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderConfig {
    /// Provider identifier (`"bitfinex"`, `"okx"`, ...).
    pub provider: Provider,

    /// Endpoint override; the built-in URL is used when absent.
    pub endpoint: Option<String>,

    /// Set to `false` to keep the entry but skip the provider.
    pub enabled: Option<bool>,
}

impl ProviderConfig {
    /// Entry for `provider` with its built-in endpoint.
    pub fn new(provider: Provider) -> Self {
        Self { provider, endpoint: None, enabled: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

impl AppConfig {
    pub fn effective_interval(&self) -> Duration {
        Duration::from_secs(self.interval_sec.unwrap_or(DEFAULT_INTERVAL_SEC))
    }

    pub fn effective_request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms.unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS))
    }

    pub fn effective_fetch_mode(&self) -> FetchMode {
        self.fetch_mode.unwrap_or_default()
    }

    pub fn effective_listen_addr(&self) -> String {
        self.listen_addr.clone().unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
    }

    /// Returns the enabled provider entries, in config order.
    ///
    /// Without a `providers` list this is every built-in provider.
    pub fn enabled_providers(&self) -> Vec<ProviderConfig> {
        match &self.providers {
            Some(list) => list.iter().filter(|p| p.is_enabled()).cloned().collect(),
            None => Provider::ALL.iter().map(|&p| ProviderConfig::new(p)).collect(),
        }
    }

    /// Reject configurations the service cannot run with.
    pub fn validate(&self) -> Result<(), FeedError> {
        if self.interval_sec == Some(0) {
            return Err(FeedError::Config("interval_sec must be greater than zero".into()));
        }
        if self.request_timeout_ms == Some(0) {
            return Err(FeedError::Config("request_timeout_ms must be greater than zero".into()));
        }

        let addr = self.effective_listen_addr();
        addr.parse::<SocketAddr>()
            .map_err(|e| FeedError::Config(format!("invalid listen_addr {addr:?}: {e}")))?;

        let mut seen = AHashSet::new();
        for entry in self.providers.iter().flatten() {
            if !seen.insert(entry.provider) {
                return Err(FeedError::Config(format!("provider {} listed more than once", entry.provider)));
            }
            if let Some(endpoint) = &entry.endpoint {
                let url = url::Url::parse(endpoint)
                    .map_err(|e| FeedError::Config(format!("invalid endpoint for {}: {e}", entry.provider)))?;
                if !matches!(url.scheme(), "http" | "https") {
                    return Err(FeedError::Config(format!(
                        "endpoint for {} must be http(s), got {}",
                        entry.provider,
                        url.scheme()
                    )));
                }
            }
        }

        if self.enabled_providers().is_empty() {
            return Err(FeedError::Config("no providers enabled".into()));
        }
        Ok(())
    }
}

/// Load, parse, and validate a JSON config file.
pub fn load_config(path: &std::path::Path) -> anyhow::Result<AppConfig> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("failed to read config {}", path.display()))?;
    let config = parse_config(&content).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}

/// Parse and validate config JSON held in memory.
pub fn parse_config(content: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = serde_json::from_str(content)?;
    config.validate()?;
    Ok(config)
}

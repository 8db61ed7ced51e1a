//! Enumerations used throughout the price service.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Provider identifiers
// ---------------------------------------------------------------------------

/// Supported price providers.
///
/// Serialized as lowercase identifiers (`"bitfinex"`, `"cryptocom"`, ...).
/// Deserialization is case-insensitive so config files may use `"OKX"` or
/// `"Kraken"` as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Provider {
    Bitfinex,
    Bitget,
    Bitrue,
    Btse,
    Coinbase,
    CryptoCom,
    Gate,
    Huobi,
    Kraken,
    Kucoin,
    Okx,
    Xt,
}

impl Provider {
    /// Every supported provider, in registry order.
    pub const ALL: [Provider; 12] = [
        Provider::Bitfinex,
        Provider::Bitget,
        Provider::Bitrue,
        Provider::Btse,
        Provider::Coinbase,
        Provider::CryptoCom,
        Provider::Gate,
        Provider::Huobi,
        Provider::Kraken,
        Provider::Kucoin,
        Provider::Okx,
        Provider::Xt,
    ];

    /// Config identifier (lowercase).
    pub fn id(&self) -> &'static str {
        match self {
            Self::Bitfinex => "bitfinex",
            Self::Bitget => "bitget",
            Self::Bitrue => "bitrue",
            Self::Btse => "btse",
            Self::Coinbase => "coinbase",
            Self::CryptoCom => "cryptocom",
            Self::Gate => "gate",
            Self::Huobi => "huobi",
            Self::Kraken => "kraken",
            Self::Kucoin => "kucoin",
            Self::Okx => "okx",
            Self::Xt => "xt",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        // "crypto.com" is how the exchange spells itself.
        let wanted = if wanted == "crypto.com" { "cryptocom".to_string() } else { wanted };
        Provider::ALL
            .iter()
            .copied()
            .find(|p| p.id() == wanted)
            .ok_or_else(|| format!("unknown provider: {s}"))
    }
}

impl TryFrom<String> for Provider {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// Fetch mode
// ---------------------------------------------------------------------------

/// How the adapters of one cycle are invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    /// All adapters in flight at once; the cycle waits for every one of them.
    #[default]
    Concurrent,
    /// One adapter after another, in registry order.
    Sequential,
}

// ---------------------------------------------------------------------------
// Scheduler phase
// ---------------------------------------------------------------------------

/// Lifecycle phase of the periodic scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchedulerPhase {
    #[default]
    Idle,
    Running,
    Sleeping,
    Stopped,
}

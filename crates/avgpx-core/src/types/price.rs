//! Price values flowing through one aggregation cycle.

use serde::Serialize;

/// A single provider's price, already converted to `f64`.
///
/// Produced by an adapter and consumed by validation and the cycle in the
/// same round; never retained.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPrice {
    /// Provider name as reported by the adapter (e.g. `"Kraken"`).
    pub provider: String,
    /// Price in USD. Only finite positive values pass validation.
    pub value: f64,
}

impl NormalizedPrice {
    pub fn new(provider: impl Into<String>, value: f64) -> Self {
        Self { provider: provider.into(), value }
    }
}

/// Outcome of one successful aggregation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CycleResult {
    /// Unweighted arithmetic mean of all validated prices.
    pub consensus_value: f64,
    /// Number of providers whose price went into the mean (always >= 1).
    pub contributing_count: usize,
    /// Wall-clock time the result was computed (ms since Unix epoch).
    pub timestamp_ms: u64,
}

/// Read model served to query clients.
///
/// `average_price` is `None` until the first cycle succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AverageResponse {
    pub average_price: Option<f64>,
}

impl From<Option<CycleResult>> for AverageResponse {
    fn from(result: Option<CycleResult>) -> Self {
        Self { average_price: result.map(|r| r.consensus_value) }
    }
}

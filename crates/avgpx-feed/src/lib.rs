//! # avgpx-feed
//!
//! Multi-source BTC/USD price aggregation engine.
//!
//! ## Architecture
//!
//! Each provider module only supplies a [`ProviderSpec`] (endpoint, path to
//! the price field, string or numeric encoding). The generic
//! [`HttpQuoteAdapter`] handles the request, decoding, and extraction for all
//! of them, so adding a provider never touches shared logic.
//!
//! ```text
//! Scheduler ──► AggregationCycle.run() ──► QuoteAdapter.fetch() × N
//!                                      ──► validation::validate()
//!                                      ──► mean of valid prices
//!           ──► PublishedState.publish()   (skipped when nothing succeeded)
//! ```
//!
//! ## Modules
//!
//! - [`provider_spec`]: `ProviderSpec` + declarative extraction path
//! - [`extract`]: JSON path walking and price decoding helpers
//! - [`adapter`]: `HttpQuoteAdapter`, the `ProviderSpec`-driven adapter
//! - [`providers`]: the twelve built-in provider descriptors
//! - [`registry`]: factory for adapters and cycles from config
//! - [`validation`]: provider-agnostic admission rule
//! - [`cycle`]: one fan-out/aggregate round
//! - [`state`]: the published consensus value
//! - [`scheduler`]: periodic driver with start/stop lifecycle

pub mod adapter;
pub mod cycle;
pub mod extract;
pub mod provider_spec;
pub mod providers;
pub mod registry;
pub mod scheduler;
pub mod state;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

pub use adapter::HttpQuoteAdapter;
pub use cycle::{AggregationCycle, CycleOutcome, ProviderOutcome};
pub use provider_spec::{PathSegment, PriceEncoding, ProviderSpec, ResponseShape};
pub use scheduler::{Scheduler, SchedulerMonitor};
pub use state::PublishedState;

use async_trait::async_trait;
use avgpx_core::{NormalizedPrice, QuoteError};

/// Trait implemented by all quote adapters.
///
/// Adapters are stateless apart from their configuration and are called
/// concurrently and repeatedly, hence `Send + Sync` and `&self`.
#[async_trait]
pub trait QuoteAdapter: Send + Sync {
    /// Provider name, used in logs, errors, and statistics.
    fn name(&self) -> &str;

    /// Fetch one price from the provider.
    ///
    /// Validation is not the adapter's job; the cycle applies it to every
    /// adapter's output.
    async fn fetch(&self) -> Result<NormalizedPrice, QuoteError>;
}

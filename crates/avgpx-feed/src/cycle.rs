//! One aggregation round: query every adapter, validate, average.
//!
//! ```text
//! adapters ──► fetch (concurrent | sequential) ──► validate ──► mean
//!                 │ failure                         │ reject
//!                 └──────────── excluded ◄──────────┘
//! ```
//!
//! A failure only removes that provider from the round. When nothing
//! survives, the round produces no result and the previously published value
//! stays in place.

use std::{sync::Arc, time::Instant};

use avgpx_core::{
    CycleResult, FetchMode, QuoteError,
    stats::FetchStats,
    time_util::{elapsed_ms, now_ms},
};
use futures_util::future::join_all;
use tracing::{debug, info, warn};

use crate::{QuoteAdapter, validation};

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// What happened to one provider in one round.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderOutcome {
    pub provider: String,
    /// Validated price, or the reason the provider was excluded.
    pub result: Result<f64, QuoteError>,
    pub latency_ms: u64,
}

/// Everything a round produced.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleOutcome {
    /// One entry per adapter, in adapter order.
    pub outcomes: Vec<ProviderOutcome>,
    /// `None` when no provider contributed.
    pub result: Option<CycleResult>,
    pub elapsed_ms: u64,
}

impl CycleOutcome {
    pub fn successes(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &QuoteError> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().err())
    }

    /// Fold this round into running statistics.
    pub fn record_into(&self, stats: &mut FetchStats) {
        for o in &self.outcomes {
            match &o.result {
                Ok(_) => stats.record_success(&o.provider, o.latency_ms),
                Err(e) => stats.record_failure(&o.provider, e.kind(), o.latency_ms),
            }
        }
        stats.record_cycle(self.result.is_some());
    }
}

// ---------------------------------------------------------------------------
// AggregationCycle
// ---------------------------------------------------------------------------

pub struct AggregationCycle {
    adapters: Vec<Arc<dyn QuoteAdapter>>,
    mode: FetchMode,
}

impl AggregationCycle {
    pub fn new(adapters: Vec<Arc<dyn QuoteAdapter>>, mode: FetchMode) -> Self {
        Self { adapters, mode }
    }

    pub fn mode(&self) -> FetchMode {
        self.mode
    }

    /// Provider names in query order.
    pub fn provider_names(&self) -> Vec<&str> {
        self.adapters.iter().map(|a| a.name()).collect()
    }

    /// Run one round. Never fails; provider errors are reported in the
    /// returned outcome.
    pub async fn run(&self) -> CycleOutcome {
        let start = Instant::now();

        let outcomes = match self.mode {
            FetchMode::Concurrent => join_all(self.adapters.iter().map(|a| fetch_one(a.as_ref()))).await,
            FetchMode::Sequential => {
                let mut outcomes = Vec::with_capacity(self.adapters.len());
                for adapter in &self.adapters {
                    outcomes.push(fetch_one(adapter.as_ref()).await);
                }
                outcomes
            }
        };

        let prices: Vec<f64> = outcomes.iter().filter_map(|o| o.result.as_ref().ok().copied()).collect();
        let result = mean(&prices).map(|consensus_value| CycleResult {
            consensus_value,
            contributing_count: prices.len(),
            timestamp_ms: now_ms(),
        });

        let outcome = CycleOutcome { outcomes, result, elapsed_ms: elapsed_ms(start) };
        log_outcome(&outcome, self.adapters.len());
        outcome
    }
}

async fn fetch_one(adapter: &dyn QuoteAdapter) -> ProviderOutcome {
    let start = Instant::now();
    let result = adapter.fetch().await.and_then(|price| {
        validation::validate(&price)?;
        Ok(price.value)
    });
    ProviderOutcome { provider: adapter.name().to_string(), result, latency_ms: elapsed_ms(start) }
}

fn log_outcome(outcome: &CycleOutcome, total: usize) {
    for o in &outcome.outcomes {
        match &o.result {
            Ok(v) => debug!("[cycle] {} = {v} ({}ms)", o.provider, o.latency_ms),
            Err(e) => warn!(provider = %o.provider, kind = %e.kind(), "[cycle] {e}"),
        }
    }
    match &outcome.result {
        Some(r) => info!(
            "[cycle] average={:.2} from {}/{} providers in {}ms",
            r.consensus_value, r.contributing_count, total, outcome.elapsed_ms
        ),
        None => warn!("[cycle] no valid prices from {total} providers, keeping previous value"),
    }
}

/// Unweighted arithmetic mean.
///
/// Values are folded in ascending order so the result does not depend on the
/// order providers answered in. The running form stays finite for any finite
/// input, where a plain sum can overflow.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mut m = 0.0;
    for (k, v) in sorted.iter().enumerate() {
        m += (v - m) / (k + 1) as f64;
    }
    Some(m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubAdapter;
    use avgpx_core::FailureKind;
    use std::time::Duration;

    fn cycle(adapters: Vec<Arc<StubAdapter>>, mode: FetchMode) -> AggregationCycle {
        AggregationCycle::new(adapters.into_iter().map(|a| a as Arc<dyn QuoteAdapter>).collect(), mode)
    }

    #[test]
    fn mean_basics() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[5.0]), Some(5.0));
        assert_eq!(mean(&[100.0, 200.0, 300.0]), Some(200.0));
    }

    #[test]
    fn mean_of_huge_prices_stays_finite() {
        assert_eq!(mean(&[1e308, 1e308]), Some(1e308));
        assert_eq!(mean(&[f64::MAX, f64::MAX, f64::MAX]), Some(f64::MAX));
    }

    #[tokio::test]
    async fn huge_prices_publish_a_finite_average() {
        let c = cycle(vec![StubAdapter::ok("A", 1e308), StubAdapter::ok("B", 1e308)], FetchMode::Concurrent);
        let r = c.run().await.result.unwrap();
        assert!(r.consensus_value.is_finite());
        assert_eq!(r.consensus_value, 1e308);
        assert_eq!(r.contributing_count, 2);

        let json = serde_json::to_value(avgpx_core::AverageResponse::from(Some(r))).unwrap();
        assert_eq!(json["average_price"], 1e308);
    }

    #[test]
    fn mean_is_order_independent() {
        let a = [67890.123, 67885.5, 67901.03, 67877.7, 67899.9, 0.1];
        let mut b = a;
        b.reverse();
        let mut c = a;
        c.swap(0, 3);
        assert_eq!(mean(&a).unwrap().to_bits(), mean(&b).unwrap().to_bits());
        assert_eq!(mean(&a).unwrap().to_bits(), mean(&c).unwrap().to_bits());
    }

    #[tokio::test]
    async fn averages_only_successful_providers() {
        for mode in [FetchMode::Concurrent, FetchMode::Sequential] {
            let c = cycle(
                vec![StubAdapter::ok("A", 100.0), StubAdapter::failing("B"), StubAdapter::ok("C", 200.0)],
                mode,
            );
            let out = c.run().await;
            let r = out.result.unwrap();
            assert_eq!(r.consensus_value, 150.0);
            assert_eq!(r.contributing_count, 2);
            assert!(r.timestamp_ms > 0);
            assert_eq!(out.successes(), 2);
            assert_eq!(out.failures().map(|e| e.provider()).collect::<Vec<_>>(), vec!["B"]);
        }
    }

    #[tokio::test]
    async fn invalid_prices_are_excluded() {
        let c = cycle(
            vec![
                StubAdapter::ok("A", 100.0),
                StubAdapter::ok("Zero", 0.0),
                StubAdapter::ok("Neg", -5.0),
                StubAdapter::ok("Nan", f64::NAN),
            ],
            FetchMode::Concurrent,
        );
        let out = c.run().await;
        assert_eq!(out.result.map(|r| (r.consensus_value, r.contributing_count)), Some((100.0, 1)));
        let kinds: Vec<_> = out.failures().map(|e| e.kind()).collect();
        assert_eq!(kinds, vec![FailureKind::Validation; 3]);
    }

    #[tokio::test]
    async fn no_successes_produces_no_result() {
        let c = cycle(vec![StubAdapter::failing("A"), StubAdapter::ok("B", -1.0)], FetchMode::Concurrent);
        let out = c.run().await;
        assert_eq!(out.result, None);
        assert_eq!(out.outcomes.len(), 2);
    }

    #[tokio::test]
    async fn empty_cycle_produces_no_result() {
        let out = cycle(vec![], FetchMode::Concurrent).run().await;
        assert_eq!(out.result, None);
        assert!(out.outcomes.is_empty());
    }

    #[tokio::test]
    async fn outcomes_follow_adapter_order() {
        let c = cycle(
            vec![
                StubAdapter::with_delay("Slow", 1.0, Duration::from_millis(30)),
                StubAdapter::ok("Fast", 2.0),
                StubAdapter::failing("Down"),
            ],
            FetchMode::Concurrent,
        );
        let names: Vec<_> = c.run().await.outcomes.into_iter().map(|o| o.provider).collect();
        assert_eq!(names, vec!["Slow", "Fast", "Down"]);
        assert_eq!(c.provider_names(), vec!["Slow", "Fast", "Down"]);
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_mode_overlaps_requests() {
        let adapters = || {
            vec![
                StubAdapter::with_delay("A", 1.0, Duration::from_secs(1)),
                StubAdapter::with_delay("B", 3.0, Duration::from_secs(1)),
            ]
        };

        let start = tokio::time::Instant::now();
        let out = cycle(adapters(), FetchMode::Concurrent).run().await;
        assert_eq!(start.elapsed(), Duration::from_secs(1));
        assert_eq!(out.result.map(|r| r.consensus_value), Some(2.0));

        let start = tokio::time::Instant::now();
        cycle(adapters(), FetchMode::Sequential).run().await;
        assert_eq!(start.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test]
    async fn record_into_stats() {
        let c = cycle(vec![StubAdapter::ok("A", 1.0), StubAdapter::failing("B")], FetchMode::Sequential);
        let mut stats = FetchStats::new();
        c.run().await.record_into(&mut stats);
        cycle(vec![StubAdapter::failing("B")], FetchMode::Sequential).run().await.record_into(&mut stats);

        assert_eq!(stats.get("A").unwrap().successes, 1);
        assert_eq!(stats.get("B").unwrap().failures(FailureKind::Transport), 2);
        assert_eq!(stats.cycles(), 2);
        assert_eq!(stats.empty_cycles(), 1);
    }
}

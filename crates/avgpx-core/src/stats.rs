//! Per-provider fetch statistics.
//!
//! Every cycle reports, for each provider, whether it contributed a price or
//! which kind of failure removed it, together with how long the call took.
//! [`FetchStats`] accumulates those reports for the process lifetime so that
//! a flaky provider shows up in the logs instead of silently shrinking the
//! average.
//!
//! Not thread-safe: the scheduler owns one instance behind a mutex.

use ahash::AHashMap;

use crate::error::FailureKind;

/// Counters for one provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderStats {
    pub successes: u64,
    failures: [u64; FailureKind::COUNT],
    /// Latency of the most recent call, successful or not.
    pub last_latency_ms: Option<u64>,
    latency_sum_ms: u64,
    latency_samples: u64,
}

impl ProviderStats {
    fn record_latency(&mut self, latency_ms: u64) {
        self.last_latency_ms = Some(latency_ms);
        self.latency_sum_ms = self.latency_sum_ms.saturating_add(latency_ms);
        self.latency_samples += 1;
    }

    /// Number of failures of the given kind.
    pub fn failures(&self, kind: FailureKind) -> u64 {
        self.failures[kind.index()]
    }

    /// Failures of every kind.
    pub fn total_failures(&self) -> u64 {
        self.failures.iter().sum()
    }

    /// Calls made, successful or not.
    pub fn attempts(&self) -> u64 {
        self.successes + self.total_failures()
    }

    /// Fraction of calls that produced a valid price. `None` before the first call.
    pub fn success_rate(&self) -> Option<f64> {
        let attempts = self.attempts();
        (attempts > 0).then(|| self.successes as f64 / attempts as f64)
    }

    /// Mean call latency. `None` before the first call.
    pub fn avg_latency_ms(&self) -> Option<f64> {
        (self.latency_samples > 0).then(|| self.latency_sum_ms as f64 / self.latency_samples as f64)
    }

    fn merge(&mut self, other: &ProviderStats) {
        self.successes += other.successes;
        for (mine, theirs) in self.failures.iter_mut().zip(other.failures.iter()) {
            *mine += theirs;
        }
        self.latency_sum_ms = self.latency_sum_ms.saturating_add(other.latency_sum_ms);
        self.latency_samples += other.latency_samples;
    }
}

impl std::fmt::Display for ProviderStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ok={} failed={}", self.successes, self.total_failures())?;
        if let Some(rate) = self.success_rate() {
            write!(f, " rate={:.1}%", rate * 100.0)?;
        }
        for kind in FailureKind::ALL {
            let n = self.failures(kind);
            if n > 0 {
                write!(f, " {kind}={n}")?;
            }
        }
        if let Some(avg) = self.avg_latency_ms() {
            write!(f, " avg={avg:.1}ms")?;
        }
        Ok(())
    }
}

/// Accumulated statistics across all providers and cycles.
#[derive(Debug, Clone, Default)]
pub struct FetchStats {
    per_provider: AHashMap<String, ProviderStats>,
    cycles: u64,
    empty_cycles: u64,
}

impl FetchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a provider call that yielded a valid price.
    pub fn record_success(&mut self, provider: &str, latency_ms: u64) {
        let entry = self.entry(provider);
        entry.successes += 1;
        entry.record_latency(latency_ms);
    }

    /// Record a provider call that was excluded from its cycle.
    pub fn record_failure(&mut self, provider: &str, kind: FailureKind, latency_ms: u64) {
        let entry = self.entry(provider);
        entry.failures[kind.index()] += 1;
        entry.record_latency(latency_ms);
    }

    /// Record the end of a cycle. `published` is false when no provider succeeded.
    pub fn record_cycle(&mut self, published: bool) {
        self.cycles += 1;
        if !published {
            self.empty_cycles += 1;
        }
    }

    /// Returns the statistics for one provider.
    pub fn get(&self, provider: &str) -> Option<&ProviderStats> {
        self.per_provider.get(provider)
    }

    /// All providers, sorted by name.
    pub fn providers(&self) -> Vec<(&str, &ProviderStats)> {
        let mut all: Vec<_> = self.per_provider.iter().map(|(k, v)| (k.as_str(), v)).collect();
        all.sort_by(|a, b| a.0.cmp(b.0));
        all
    }

    /// One `name: counters` line per provider, sorted by name.
    pub fn summary_lines(&self) -> Vec<String> {
        self.providers().into_iter().map(|(name, stats)| format!("{name}: {stats}")).collect()
    }

    /// Sum over every provider.
    pub fn totals(&self) -> ProviderStats {
        let mut total = ProviderStats::default();
        for stats in self.per_provider.values() {
            total.merge(stats);
        }
        total
    }

    /// Cycles completed, including those that published nothing.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Cycles in which no provider succeeded.
    pub fn empty_cycles(&self) -> u64 {
        self.empty_cycles
    }

    fn entry(&mut self, provider: &str) -> &mut ProviderStats {
        self.per_provider.entry(provider.to_string()).or_default()
    }
}

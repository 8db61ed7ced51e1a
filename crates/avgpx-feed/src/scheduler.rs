//! Periodic driver for [`AggregationCycle`].
//!
//! ```text
//! Idle ──start()──► Running ──cycle done──► Sleeping ──interval──► Running ...
//!                      │                        │
//!                      └──────── stop() ────────┴──► Stopped
//! ```
//!
//! The delay runs from the end of one cycle to the start of the next. Only
//! one cycle executes at a time, whether it comes from the loop or from
//! [`Scheduler::run_once`], so the published state has a single writer.

use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use avgpx_core::{CycleResult, SchedulerPhase, stats::FetchStats};
use tokio::{
    sync::{Mutex, watch},
    task::JoinHandle,
};
use tracing::{debug, info, warn};

use crate::{AggregationCycle, PublishedState};

struct Inner {
    cycle: AggregationCycle,
    state: Arc<PublishedState>,
    interval: Duration,
    phase: watch::Sender<SchedulerPhase>,
    cycles: AtomicU64,
    stats: Mutex<FetchStats>,
    /// Held for the duration of a cycle.
    gate: Mutex<()>,
}

impl Inner {
    /// Run one cycle and publish its result, if any.
    ///
    /// Dropping this future before the cycle finishes leaves both the
    /// published state and the statistics untouched.
    async fn run_cycle(&self) -> Option<CycleResult> {
        let _gate = self.gate.lock().await;
        let outcome = self.cycle.run().await;

        let mut stats = self.stats.lock().await;
        // no await points below: the round is committed all at once
        outcome.record_into(&mut stats);
        if let Some(result) = outcome.result {
            self.state.publish(result);
        }
        let n = self.cycles.fetch_add(1, Ordering::Relaxed) + 1;
        debug!("[scheduler] cycle #{n} totals: {}", stats.totals());
        for line in stats.summary_lines() {
            debug!("[scheduler] {line}");
        }
        outcome.result
    }
}

pub struct Scheduler {
    inner: Arc<Inner>,
    shutdown_tx: Option<watch::Sender<bool>>,
    task: Option<JoinHandle<()>>,
}

impl Scheduler {
    /// Create a scheduler that is not yet running.
    pub fn new(cycle: AggregationCycle, state: Arc<PublishedState>, interval: Duration) -> Self {
        let (phase, _) = watch::channel(SchedulerPhase::Idle);
        let inner = Inner {
            cycle,
            state,
            interval,
            phase,
            cycles: AtomicU64::new(0),
            stats: Mutex::new(FetchStats::new()),
            gate: Mutex::new(()),
        };
        Self { inner: Arc::new(inner), shutdown_tx: None, task: None }
    }

    /// Spawn the background loop. The first cycle starts immediately.
    pub fn start(&mut self) {
        if self.task.is_some() {
            warn!("[scheduler] already started");
            return;
        }
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let inner = Arc::clone(&self.inner);
        info!(
            "[scheduler] starting: {} providers, interval={:?}, mode={:?}",
            inner.cycle.provider_names().len(),
            inner.interval,
            inner.cycle.mode()
        );
        self.task = Some(tokio::spawn(run_loop(inner, shutdown_rx)));
        self.shutdown_tx = Some(shutdown_tx);
    }

    /// Stop the loop and wait for it to exit.
    ///
    /// A sleeping loop wakes immediately; an in-flight cycle is dropped
    /// without publishing.
    pub async fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(true);
        }
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!("[scheduler] loop task ended abnormally: {e}");
            }
        }
        self.inner.phase.send_replace(SchedulerPhase::Stopped);
        info!("[scheduler] stopped after {} cycles", self.cycles_completed());
    }

    /// Run exactly one cycle now and publish its result.
    ///
    /// Waits for an in-flight cycle of the background loop to finish first.
    pub async fn run_once(&self) -> Option<CycleResult> {
        self.inner.run_cycle().await
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    pub fn phase(&self) -> SchedulerPhase {
        *self.inner.phase.borrow()
    }

    pub fn cycles_completed(&self) -> u64 {
        self.inner.cycles.load(Ordering::Relaxed)
    }

    pub fn state(&self) -> &Arc<PublishedState> {
        &self.inner.state
    }

    /// Snapshot of accumulated fetch statistics.
    pub async fn stats(&self) -> FetchStats {
        self.inner.stats.lock().await.clone()
    }

    /// Read-only handle for status reporting.
    pub fn monitor(&self) -> SchedulerMonitor {
        SchedulerMonitor { inner: Arc::clone(&self.inner) }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Cloneable read-only view of a [`Scheduler`].
#[derive(Clone)]
pub struct SchedulerMonitor {
    inner: Arc<Inner>,
}

impl SchedulerMonitor {
    pub fn phase(&self) -> SchedulerPhase {
        *self.inner.phase.borrow()
    }

    pub fn subscribe_phase(&self) -> watch::Receiver<SchedulerPhase> {
        self.inner.phase.subscribe()
    }

    pub fn cycles_completed(&self) -> u64 {
        self.inner.cycles.load(Ordering::Relaxed)
    }

    pub fn interval(&self) -> Duration {
        self.inner.interval
    }
}

async fn run_loop(inner: Arc<Inner>, mut shutdown_rx: watch::Receiver<bool>) {
    loop {
        if *shutdown_rx.borrow() {
            break;
        }

        inner.phase.send_replace(SchedulerPhase::Running);
        tokio::select! {
            _ = inner.run_cycle() => {}
            _ = shutdown_rx.changed() => {
                info!("[scheduler] shutdown during cycle, result discarded");
                break;
            }
        }

        inner.phase.send_replace(SchedulerPhase::Sleeping);
        tokio::select! {
            _ = tokio::time::sleep(inner.interval) => {}
            _ = shutdown_rx.changed() => break,
        }
    }
    inner.phase.send_replace(SchedulerPhase::Stopped);
}

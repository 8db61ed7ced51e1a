//! Published consensus value.
//!
//! One writer (the scheduler) and any number of readers (HTTP handlers).
//! Readers always observe a complete [`CycleResult`] from a single cycle or
//! `None` before the first successful one.

use avgpx_core::{AverageResponse, CycleResult};
use tokio::sync::watch;

#[derive(Debug)]
pub struct PublishedState {
    tx: watch::Sender<Option<CycleResult>>,
}

impl PublishedState {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// Replace the published value atomically.
    pub fn publish(&self, result: CycleResult) {
        self.tx.send_replace(Some(result));
    }

    /// Snapshot of the last published result.
    pub fn read(&self) -> Option<CycleResult> {
        *self.tx.borrow()
    }

    /// Read model for query clients; `average_price` is `None` until the
    /// first successful cycle.
    pub fn current_average(&self) -> AverageResponse {
        AverageResponse::from(self.read())
    }

    /// Receiver notified on every publish.
    pub fn subscribe(&self) -> watch::Receiver<Option<CycleResult>> {
        self.tx.subscribe()
    }
}

impl Default for PublishedState {
    fn default() -> Self {
        Self::new()
    }
}

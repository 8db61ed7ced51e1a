//! In-process adapters for cycle and scheduler tests.

use std::{
    collections::VecDeque,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use avgpx_core::{NormalizedPrice, QuoteError};

use crate::QuoteAdapter;

pub struct StubAdapter {
    name: String,
    script: Mutex<VecDeque<Result<f64, QuoteError>>>,
    fallback: Result<f64, QuoteError>,
    delay: Duration,
    calls: AtomicUsize,
}

impl StubAdapter {
    /// Always returns `value`.
    pub fn ok(name: &str, value: f64) -> Arc<Self> {
        Arc::new(Self::build(name, Ok(value), Vec::new()))
    }

    /// Always fails with a transport error.
    pub fn failing(name: &str) -> Arc<Self> {
        let err = QuoteError::Transport { provider: name.to_string(), cause: "connection refused".into() };
        Arc::new(Self::build(name, Err(err), Vec::new()))
    }

    /// Replays `script` in order, then repeats the last entry.
    pub fn scripted(name: &str, script: Vec<Result<f64, QuoteError>>) -> Arc<Self> {
        let fallback =
            script.last().cloned().unwrap_or_else(|| Err(QuoteError::MissingField { provider: name.into() }));
        Arc::new(Self::build(name, fallback, script))
    }

    pub fn with_delay(name: &str, value: f64, delay: Duration) -> Arc<Self> {
        let mut stub = Self::build(name, Ok(value), Vec::new());
        stub.delay = delay;
        Arc::new(stub)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn build(name: &str, fallback: Result<f64, QuoteError>, script: Vec<Result<f64, QuoteError>>) -> Self {
        Self {
            name: name.to_string(),
            script: Mutex::new(script.into()),
            fallback,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl QuoteAdapter for StubAdapter {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<NormalizedPrice, QuoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let next = self.script.lock().unwrap().pop_front().unwrap_or_else(|| self.fallback.clone());
        next.map(|value| NormalizedPrice::new(self.name.clone(), value))
    }
}

//! Generic HTTP adapter. Turns a [`ProviderSpec`] into a [`QuoteAdapter`].
//!
//! One GET per fetch, bounded by the client timeout. Status, transport, and
//! body problems are mapped onto [`QuoteError`] so a single bad provider
//! never aborts the cycle.

use std::time::Duration;

use async_trait::async_trait;
use avgpx_core::{FeedError, NormalizedPrice, QuoteError};
use reqwest::header::ACCEPT;
use tracing::debug;

use crate::{QuoteAdapter, provider_spec::ProviderSpec};

const USER_AGENT: &str = concat!("avgpx/", env!("CARGO_PKG_VERSION"));

/// Build the shared HTTP client. `timeout` covers the whole request
/// including reading the body.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, FeedError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| FeedError::Http(format!("failed to build HTTP client: {e}")))
}

pub struct HttpQuoteAdapter {
    spec: ProviderSpec,
    http: reqwest::Client,
}

impl HttpQuoteAdapter {
    pub fn new(spec: ProviderSpec, http: reqwest::Client) -> Self {
        Self { spec, http }
    }

    pub fn spec(&self) -> &ProviderSpec {
        &self.spec
    }

    fn transport(&self, e: impl std::fmt::Display) -> QuoteError {
        QuoteError::Transport { provider: self.spec.name.to_string(), cause: e.to_string() }
    }
}

#[async_trait]
impl QuoteAdapter for HttpQuoteAdapter {
    fn name(&self) -> &str {
        self.spec.name
    }

    async fn fetch(&self) -> Result<NormalizedPrice, QuoteError> {
        let resp = self
            .http
            .get(&self.spec.endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.transport(e))?
            .error_for_status()
            .map_err(|e| self.transport(e))?;

        let body = resp.bytes().await.map_err(|e| self.transport(e))?;
        debug!("[{}] {} bytes from {}", self.spec.name, body.len(), self.spec.endpoint);
        self.spec.parse_body(&body)
    }
}

//! Provider registry: factory for adapters and cycles from config.

use std::sync::Arc;

use avgpx_core::{FeedError, Provider, config::AppConfig};
use tracing::info;

use crate::{
    AggregationCycle, HttpQuoteAdapter, ProviderSpec, QuoteAdapter, adapter::build_http_client, providers,
};

/// Descriptor for a built-in provider, optionally pointed at another URL.
pub fn provider_spec(provider: Provider, endpoint: Option<&str>) -> ProviderSpec {
    match provider {
        Provider::Bitfinex => providers::bitfinex::spec(endpoint),
        Provider::Bitget => providers::bitget::spec(endpoint),
        Provider::Bitrue => providers::bitrue::spec(endpoint),
        Provider::Btse => providers::btse::spec(endpoint),
        Provider::Coinbase => providers::coinbase::spec(endpoint),
        Provider::CryptoCom => providers::cryptocom::spec(endpoint),
        Provider::Gate => providers::gate::spec(endpoint),
        Provider::Huobi => providers::huobi::spec(endpoint),
        Provider::Kraken => providers::kraken::spec(endpoint),
        Provider::Kucoin => providers::kucoin::spec(endpoint),
        Provider::Okx => providers::okx::spec(endpoint),
        Provider::Xt => providers::xt::spec(endpoint),
    }
}

/// One adapter per enabled provider, in config order, sharing `http`.
pub fn create_adapters(config: &AppConfig, http: &reqwest::Client) -> Vec<Arc<dyn QuoteAdapter>> {
    config
        .enabled_providers()
        .into_iter()
        .map(|entry| {
            let spec = provider_spec(entry.provider, entry.endpoint.as_deref());
            info!("[registry] {} -> {} ({})", spec.name, spec.endpoint, spec.describe());
            Arc::new(HttpQuoteAdapter::new(spec, http.clone())) as Arc<dyn QuoteAdapter>
        })
        .collect()
}

/// Build the aggregation cycle described by `config`.
pub fn build_cycle(config: &AppConfig) -> Result<AggregationCycle, FeedError> {
    config.validate()?;
    let http = build_http_client(config.effective_request_timeout())?;
    let adapters = create_adapters(config, &http);
    Ok(AggregationCycle::new(adapters, config.effective_fetch_mode()))
}

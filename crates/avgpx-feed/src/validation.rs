//! Provider-agnostic admission rule for normalized prices.

use avgpx_core::{NormalizedPrice, QuoteError};

/// Accept a price only if it is finite and strictly positive.
///
/// Applied uniformly to every provider's output before aggregation.
pub fn validate(price: &NormalizedPrice) -> Result<(), QuoteError> {
    if price.value.is_finite() && price.value > 0.0 {
        Ok(())
    } else {
        Err(QuoteError::Validation { provider: price.provider.clone(), value: price.value })
    }
}

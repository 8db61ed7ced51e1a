//! Coinbase Exchange product ticker.

use crate::provider_spec::{PathSegment, PathSegment::*, PriceEncoding, ProviderSpec};

pub const NAME: &str = "Coinbase";
pub const ENDPOINT: &str = "https://api.exchange.coinbase.com/products/BTC-USD/ticker";
pub const PATH: &[PathSegment] = &[Key("price")];
pub const ENCODING: PriceEncoding = PriceEncoding::Text;

pub fn spec(endpoint: Option<&str>) -> ProviderSpec {
    ProviderSpec::new(NAME, endpoint.unwrap_or(ENDPOINT), PATH, ENCODING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::fixtures::{failure, price};
    use avgpx_core::FailureKind;
    use serde_json::json;

    #[test]
    fn parses_ticker() {
        let body = json!({
            "ask": "67890.01",
            "bid": "67889.99",
            "volume": "8123.55",
            "trade_id": 612345678,
            "price": "67890.00",
            "size": "0.0021",
            "time": "2024-05-01T12:00:00.000000Z"
        });
        assert_eq!(price(&spec(None), body), 67890.0);
    }

    #[test]
    fn error_message_has_no_price() {
        assert_eq!(failure(&spec(None), json!({"message": "NotFound"})), FailureKind::MissingField);
    }

    #[test]
    fn null_price() {
        assert_eq!(failure(&spec(None), json!({"price": null})), FailureKind::MissingField);
    }

    #[test]
    fn empty_and_non_numeric_price() {
        assert_eq!(failure(&spec(None), json!({"price": ""})), FailureKind::MissingField);
        assert_eq!(failure(&spec(None), json!({"price": "NaN-ish"})), FailureKind::Format);
        assert_eq!(failure(&spec(None), json!([])), FailureKind::Decode);
    }
}

//! KuCoin level-1 order book.

use crate::provider_spec::{PathSegment, PathSegment::*, PriceEncoding, ProviderSpec};

pub const NAME: &str = "KuCoin";
pub const ENDPOINT: &str = "https://api.kucoin.com/api/v1/market/orderbook/level1?symbol=BTC-USDC";
pub const PATH: &[PathSegment] = &[Key("data"), Key("price")];
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
    fn parses_level1() {
        let body = json!({
            "code": "200000",
            "data": {
                "time": 1714564800000u64,
                "sequence": "1",
                "price": "67870.3",
                "size": "0.001",
                "bestBid": "67870.2"
            }
        });
        assert_eq!(price(&spec(None), body), 67870.3);
    }

    #[test]
    fn null_data() {
        // unknown symbols come back with `"data": null`
        assert_eq!(failure(&spec(None), json!({"code": "200000", "data": null})), FailureKind::MissingField);
    }

    #[test]
    fn missing_empty_and_non_numeric() {
        assert_eq!(failure(&spec(None), json!({"code": "400100"})), FailureKind::MissingField);
        assert_eq!(failure(&spec(None), json!({"data": {"price": ""}})), FailureKind::MissingField);
        assert_eq!(failure(&spec(None), json!({"data": {"price": "abc"}})), FailureKind::Format);
        assert_eq!(failure(&spec(None), json!({"data": []})), FailureKind::Decode);
    }
}

//! OKX v5 ticker.

use crate::provider_spec::{PathSegment, PathSegment::*, PriceEncoding, ProviderSpec};

pub const NAME: &str = "OKX";
pub const ENDPOINT: &str = "https://www.okx.com/api/v5/market/ticker?instId=BTC-USDC";
pub const PATH: &[PathSegment] = &[Key("data"), Index(0), Key("last")];
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
    fn parses_last() {
        let body = json!({
            "code": "0",
            "msg": "",
            "data": [{
                "instType": "SPOT",
                "instId": "BTC-USDC",
                "last": "67899.9",
                "askPx": "67900",
                "bidPx": "67899.8"
            }]
        });
        assert_eq!(price(&spec(None), body), 67899.9);
    }

    #[test]
    fn malformed() {
        let unknown = json!({"code": "51001", "msg": "Instrument ID does not exist", "data": []});
        assert_eq!(failure(&spec(None), unknown), FailureKind::MissingField);
        assert_eq!(failure(&spec(None), json!({"data": [{"last": ""}]})), FailureKind::MissingField);
        assert_eq!(failure(&spec(None), json!({"data": {"last": "1"}})), FailureKind::Decode);
    }

    #[test]
    fn non_numeric_last() {
        assert_eq!(failure(&spec(None), json!({"data": [{"last": "abc"}]})), FailureKind::Format);
    }
}

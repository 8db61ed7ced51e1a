//! Bitget v2 spot tickers.

use crate::provider_spec::{PathSegment, PathSegment::*, PriceEncoding, ProviderSpec};

pub const NAME: &str = "Bitget";
pub const ENDPOINT: &str = "https://api.bitget.com/api/v2/spot/market/tickers?symbol=BTCUSDT";
pub const PATH: &[PathSegment] = &[Key("data"), Index(0), Key("lastPr")];
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
    fn parses_last_price() {
        let body = json!({
            "code": "00000",
            "msg": "success",
            "data": [{"symbol": "BTCUSDT", "lastPr": "67890.12", "bidPr": "67890.1", "askPr": "67890.2"}]
        });
        assert_eq!(price(&spec(None), body), 67890.12);
    }

    #[test]
    fn empty_data() {
        assert_eq!(failure(&spec(None), json!({"code": "00000", "data": []})), FailureKind::MissingField);
    }

    #[test]
    fn non_numeric_price() {
        assert_eq!(failure(&spec(None), json!({"data": [{"lastPr": "--"}]})), FailureKind::Format);
    }

    #[test]
    fn missing_data_and_empty_price() {
        let body = json!({"code": "40034", "msg": "Parameter does not exist"});
        assert_eq!(failure(&spec(None), body), FailureKind::MissingField);
        assert_eq!(failure(&spec(None), json!({"data": [{"lastPr": ""}]})), FailureKind::MissingField);
    }
}

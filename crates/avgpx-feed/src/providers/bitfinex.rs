//! Bitfinex v2 ticker. The response is a bare array; index 6 is LAST_PRICE.

use crate::provider_spec::{PathSegment, PathSegment::*, PriceEncoding, ProviderSpec};

pub const NAME: &str = "Bitfinex";
pub const ENDPOINT: &str = "https://api.bitfinex.com/v2/ticker/tBTCUSD";
pub const PATH: &[PathSegment] = &[Index(6)];
pub const ENCODING: PriceEncoding = PriceEncoding::Number;

pub fn spec(endpoint: Option<&str>) -> ProviderSpec {
    ProviderSpec::new(NAME, endpoint.unwrap_or(ENDPOINT), PATH, ENCODING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::fixtures::{failure, price};
    use crate::ResponseShape;
    use avgpx_core::FailureKind;
    use serde_json::json;

    #[test]
    fn last_price_at_index_six() {
        let body = json!([67880.0, 1.2, 67881.0, 0.8, -120.0, -0.0018, 67890.5, 1523.4, 68500.0, 66900.0]);
        assert_eq!(price(&spec(None), body), 67890.5);
        assert_eq!(spec(None).shape(), ResponseShape::Array);
    }

    #[test]
    fn short_array_is_missing_field() {
        assert_eq!(failure(&spec(None), json!([1.0, 2.0])), FailureKind::MissingField);
        assert_eq!(failure(&spec(None), json!([])), FailureKind::MissingField);
    }

    #[test]
    fn error_object_is_decode() {
        assert_eq!(failure(&spec(None), json!({"error": "ratelimit"})), FailureKind::Decode);
    }

    #[test]
    fn endpoint_override() {
        assert_eq!(spec(Some("http://127.0.0.1:1/t")).endpoint, "http://127.0.0.1:1/t");
        assert_eq!(spec(None).endpoint, ENDPOINT);
    }

    #[test]
    fn string_at_price_index_is_decode() {
        for last in ["", "abc"] {
            let body = json!([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, last, 0.0]);
            assert_eq!(failure(&spec(None), body), FailureKind::Decode, "{last:?}");
        }
    }
}

//! Huobi latest trade.

use crate::provider_spec::{PathSegment, PathSegment::*, PriceEncoding, ProviderSpec};

pub const NAME: &str = "Huobi";
pub const ENDPOINT: &str = "https://api.huobi.pro/market/trade?symbol=btcusdt";
pub const PATH: &[PathSegment] = &[Key("tick"), Key("data"), Index(0), Key("price")];
pub const ENCODING: PriceEncoding = PriceEncoding::Number;

pub fn spec(endpoint: Option<&str>) -> ProviderSpec {
    ProviderSpec::new(NAME, endpoint.unwrap_or(ENDPOINT), PATH, ENCODING)
}

//! Bitrue ticker price.

use crate::provider_spec::{PathSegment, PathSegment::*, PriceEncoding, ProviderSpec};

pub const NAME: &str = "Bitrue";
pub const ENDPOINT: &str = "https://openapi.bitrue.com/api/v1/ticker/price?symbol=btcusdt";
pub const PATH: &[PathSegment] = &[Key("price")];
pub const ENCODING: PriceEncoding = PriceEncoding::Text;

pub fn spec(endpoint: Option<&str>) -> ProviderSpec {
    ProviderSpec::new(NAME, endpoint.unwrap_or(ENDPOINT), PATH, ENCODING)
}

//! Gate legacy v2 ticker.

use crate::provider_spec::{PathSegment, PathSegment::*, PriceEncoding, ProviderSpec};

pub const NAME: &str = "Gate";
pub const ENDPOINT: &str = "https://data.gateapi.io/api2/1/ticker/sbtc_usdt";
pub const PATH: &[PathSegment] = &[Key("last")];
pub const ENCODING: PriceEncoding = PriceEncoding::Text;

pub fn spec(endpoint: Option<&str>) -> ProviderSpec {
    ProviderSpec::new(NAME, endpoint.unwrap_or(ENDPOINT), PATH, ENCODING)
}

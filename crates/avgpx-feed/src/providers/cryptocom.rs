//! Crypto.com v2 ticker. `a` is the latest trade price.

use crate::provider_spec::{PathSegment, PathSegment::*, PriceEncoding, ProviderSpec};

pub const NAME: &str = "Crypto.com";
pub const ENDPOINT: &str = "https://api.crypto.com/v2/public/get-ticker?instrument_name=BTC_USDT";
pub const PATH: &[PathSegment] = &[Key("result"), Key("data"), Index(0), Key("a")];
pub const ENCODING: PriceEncoding = PriceEncoding::Text;

pub fn spec(endpoint: Option<&str>) -> ProviderSpec {
    ProviderSpec::new(NAME, endpoint.unwrap_or(ENDPOINT), PATH, ENCODING)
}

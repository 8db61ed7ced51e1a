//! Kraken public ticker. `a` is `[ask price, whole lot volume, lot volume]`.

use crate::provider_spec::{PathSegment, PathSegment::*, PriceEncoding, ProviderSpec};

pub const NAME: &str = "Kraken";
pub const ENDPOINT: &str = "https://api.kraken.com/0/public/Ticker?pair=BTCUSD";
pub const PATH: &[PathSegment] = &[Key("result"), Key("XXBTZUSD"), Key("a"), Index(0)];
pub const ENCODING: PriceEncoding = PriceEncoding::Text;

pub fn spec(endpoint: Option<&str>) -> ProviderSpec {
    ProviderSpec::new(NAME, endpoint.unwrap_or(ENDPOINT), PATH, ENCODING)
}

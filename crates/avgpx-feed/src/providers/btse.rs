//! BTSE spot price. Array of one object per requested market.

use crate::provider_spec::{PathSegment, PathSegment::*, PriceEncoding, ProviderSpec};

pub const NAME: &str = "BTSE";
pub const ENDPOINT: &str = "https://api.btse.com/spot/api/v3.2/price?symbol=BTC-USD";
pub const PATH: &[PathSegment] = &[Index(0), Key("lastPrice")];
pub const ENCODING: PriceEncoding = PriceEncoding::Number;

pub fn spec(endpoint: Option<&str>) -> ProviderSpec {
    ProviderSpec::new(NAME, endpoint.unwrap_or(ENDPOINT), PATH, ENCODING)
}

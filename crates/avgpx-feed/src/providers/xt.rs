//! XT v4 ticker. `c` is the close (latest) price.

use crate::provider_spec::{PathSegment, PathSegment::*, PriceEncoding, ProviderSpec};

pub const NAME: &str = "XT";
pub const ENDPOINT: &str = "https://sapi.xt.com/v4/public/ticker?symbol=BTC_usdt";
pub const PATH: &[PathSegment] = &[Key("result"), Index(0), Key("c")];
pub const ENCODING: PriceEncoding = PriceEncoding::Text;

pub fn spec(endpoint: Option<&str>) -> ProviderSpec {
    ProviderSpec::new(NAME, endpoint.unwrap_or(ENDPOINT), PATH, ENCODING)
}

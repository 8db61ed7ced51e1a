//! Declarative provider descriptors.
//!
//! A [`ProviderSpec`] describes everything that differs between providers:
//! where to send the request and how to find the price in the response. The
//! shape of the response is implied by the first path segment.
//!
//! ```text
//! Kraken  {"result":{"XXBTZUSD":{"a":["67890.5","1","1.0"]}}}
//!         path = result . XXBTZUSD . a [0]     encoding = Text
//! Bitfinex [0,0,0,0,0,0,67890.5,0,0,0]
//!         path = [6]                           encoding = Number
//! ```

use std::fmt;

use avgpx_core::{NormalizedPrice, QuoteError};

use crate::extract;

/// One step into a decoded JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
    /// Object member by name.
    Key(&'static str),
    /// Array element by position.
    Index(usize),
}

/// How the provider encodes the price value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceEncoding {
    /// JSON number (`67890.5`).
    Number,
    /// Decimal string (`"67890.50"`).
    Text,
}

impl fmt::Display for PriceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => f.write_str("numeric"),
            Self::Text => f.write_str("string"),
        }
    }
}

/// Top-level JSON container a provider responds with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    Array,
    Object,
}

impl fmt::Display for ResponseShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Array => f.write_str("array"),
            Self::Object => f.write_str("object"),
        }
    }
}

/// Static descriptor for one provider.
///
/// Built once at startup by the provider modules and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSpec {
    /// Human-readable name (e.g. `"Crypto.com"`).
    pub name: &'static str,
    /// Full request URL.
    pub endpoint: String,
    /// Path from the document root to the price field.
    pub path: &'static [PathSegment],
    /// Numeric or string-encoded price.
    pub encoding: PriceEncoding,
}

impl ProviderSpec {
    pub fn new(
        name: &'static str,
        endpoint: impl Into<String>,
        path: &'static [PathSegment],
        encoding: PriceEncoding,
    ) -> Self {
        Self { name, endpoint: endpoint.into(), path, encoding }
    }

    /// Same descriptor pointed at a different URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Top-level container the provider is expected to answer with.
    pub fn shape(&self) -> ResponseShape {
        match self.path.first() {
            Some(PathSegment::Index(_)) => ResponseShape::Array,
            _ => ResponseShape::Object,
        }
    }

    /// Extract the price from an already-decoded document.
    pub fn extract(&self, body: &serde_json::Value) -> Result<NormalizedPrice, QuoteError> {
        let field = extract::walk(self.name, body, self.path)?;
        let value = extract::read_price(self.name, field, self.encoding)?;
        Ok(NormalizedPrice::new(self.name, value))
    }

    /// Decode a raw response body and extract the price.
    pub fn parse_body(&self, body: &[u8]) -> Result<NormalizedPrice, QuoteError> {
        let doc: serde_json::Value = serde_json::from_slice(body)
            .map_err(|e| QuoteError::Decode { provider: self.name.to_string(), cause: e.to_string() })?;
        self.extract(&doc)
    }

    /// Path rendered as `result.data[0].a`, for logs.
    pub fn path_display(&self) -> String {
        extract::render_path(self.path)
    }

    /// One-line summary of the response layout, e.g. `array [6], numeric price`.
    pub fn describe(&self) -> String {
        format!("{} {}, {} price", self.shape(), self.path_display(), self.encoding)
    }
}

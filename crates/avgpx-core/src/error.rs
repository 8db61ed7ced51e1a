//! Typed error definitions for the price service.
//!
//! [`QuoteError`] is the per-provider failure taxonomy: every variant is
//! recoverable at the cycle level and only removes that provider from the
//! current round. [`FeedError`] covers process-level setup problems and
//! integrates with `anyhow::Result` at the binary edge.

use thiserror::Error;

/// Process-level errors (configuration, HTTP client/listener setup).
#[derive(Debug, Error)]
pub enum FeedError {
    /// Configuration parsing or validation error.
    #[error("config error: {0}")]
    Config(String),

    /// HTTP client construction or listener error.
    #[error("http error: {0}")]
    Http(String),
}

/// Why one provider did not contribute to a cycle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuoteError {
    /// Connection failure, timeout, or non-2xx status.
    #[error("[{provider}] transport failure: {cause}")]
    Transport { provider: String, cause: String },

    /// Body is not JSON, or its structure does not match the provider's shape.
    #[error("[{provider}] decode failure: {cause}")]
    Decode { provider: String, cause: String },

    /// Structurally valid body whose price field is absent, null, or empty.
    #[error("[{provider}] price field missing or empty")]
    MissingField { provider: String },

    /// String-encoded price that is not a decimal number.
    #[error("[{provider}] unparseable price {raw:?}")]
    Format { provider: String, raw: String },

    /// Price that is zero, negative, or not finite.
    #[error("[{provider}] rejected price {value}")]
    Validation { provider: String, value: f64 },
}

impl QuoteError {
    /// The failure category, used for counting.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Transport { .. } => FailureKind::Transport,
            Self::Decode { .. } => FailureKind::Decode,
            Self::MissingField { .. } => FailureKind::MissingField,
            Self::Format { .. } => FailureKind::Format,
            Self::Validation { .. } => FailureKind::Validation,
        }
    }

    /// Name of the provider that failed.
    pub fn provider(&self) -> &str {
        match self {
            Self::Transport { provider, .. }
            | Self::Decode { provider, .. }
            | Self::MissingField { provider }
            | Self::Format { provider, .. }
            | Self::Validation { provider, .. } => provider,
        }
    }
}

/// Discriminant of [`QuoteError`] without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FailureKind {
    Transport,
    Decode,
    MissingField,
    Format,
    Validation,
}

impl FailureKind {
    pub const COUNT: usize = 5;

    pub const ALL: [FailureKind; Self::COUNT] = [
        FailureKind::Transport,
        FailureKind::Decode,
        FailureKind::MissingField,
        FailureKind::Format,
        FailureKind::Validation,
    ];

    /// Stable index into per-kind counter arrays.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Decode => "decode",
            Self::MissingField => "missing_field",
            Self::Format => "format",
            Self::Validation => "validation",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! # avgpx-core
//!
//! Core crate for the BTC/USD average price service, providing:
//!
//! - **Types** (`types`): provider identifiers, normalized prices, cycle results
//! - **Configuration** (`config`): JSON config deserialization and validation
//! - **Error types** (`error`): per-provider `QuoteError` taxonomy and `FeedError` via thiserror
//! - **Statistics** (`stats`): per-provider success/failure counters and fetch latency
//! - **Time utilities** (`time_util`): wall-clock timestamps
//! - **Logging** (`logging`): tracing-based structured logging

pub mod config;
pub mod error;
pub mod logging;
pub mod stats;
pub mod time_util;
pub mod types;

// Re-export types at crate root for convenience.
pub use error::{FailureKind, FeedError, QuoteError};
pub use types::*;

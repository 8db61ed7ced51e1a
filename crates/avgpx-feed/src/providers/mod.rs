//! Built-in provider descriptors.
//!
//! Each submodule exposes `NAME`, `ENDPOINT`, `PATH`, `ENCODING`, and a
//! `spec(endpoint)` constructor. Everything else is shared through
//! [`ProviderSpec`](crate::ProviderSpec).

pub mod bitfinex;
pub mod bitget;
pub mod bitrue;
pub mod btse;
pub mod coinbase;
pub mod cryptocom;
pub mod gate;
pub mod huobi;
pub mod kraken;
pub mod kucoin;
pub mod okx;
pub mod xt;

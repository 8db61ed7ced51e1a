//! Core data types shared by the feed engine and the runner.
//!
//! Everything here is plain data: `Copy` where the value crosses the
//! published-state boundary, so readers always receive a whole value.

pub mod enums;
pub mod price;

pub use enums::*;
pub use price::*;

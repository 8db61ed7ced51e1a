//! Wall-clock and elapsed-time helpers.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Current time as **milliseconds** since Unix epoch.
///
/// A clock set before the epoch reads as 0.
#[inline]
pub fn now_ms() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_millis() as u64).unwrap_or_default()
}

/// Milliseconds elapsed since `start`, saturating at `u64::MAX`.
#[inline]
pub fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_after_2020() {
        assert!(now_ms() > 1_577_836_800_000);
    }

    #[test]
    fn elapsed_is_small_for_fresh_instant() {
        assert!(elapsed_ms(Instant::now()) < 1_000);
    }
}

//! Freshness check for signed ticket auth timestamps.

use super::error::AuthError;

pub const DEFAULT_REPLAY_WINDOW_SECS: i64 = 30;

/// Accepts timestamps no older than the window and not in the future.
///
/// Used timestamps are not remembered: a signature can be presented again
/// for as long as its timestamp stays inside the window.
#[derive(Debug, Clone, Copy)]
pub struct ReplayGuard {
    window_secs: i64,
}

impl Default for ReplayGuard {
    fn default() -> Self {
        Self::new(DEFAULT_REPLAY_WINDOW_SECS)
    }
}

impl ReplayGuard {
    #[must_use]
    pub const fn new(window_secs: i64) -> Self {
        Self { window_secs }
    }

    /// Validate `timestamp` (decimal seconds since epoch) against `now`.
    ///
    /// # Errors
    ///
    /// - `MalformedTimestamp` if `timestamp` is not a base-10 integer
    /// - `ExpiredOrFutureTimestamp` if `now - timestamp` is negative or
    ///   larger than the window
    pub fn check(&self, timestamp: &str, now: i64) -> Result<(), AuthError> {
        let ts: i64 = timestamp
            .parse()
            .map_err(|_| AuthError::MalformedTimestamp(timestamp.to_owned()))?;

        let delta = now.saturating_sub(ts);
        if !(0..=self.window_secs).contains(&delta) {
            return Err(AuthError::ExpiredOrFutureTimestamp {
                timestamp: timestamp.to_owned(),
                delta,
            });
        }
        Ok(())
    }
}

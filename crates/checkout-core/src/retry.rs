//! Retry Policy
//!
//! Bounded exponential backoff for session creation. The delay schedule is
//! a pure function of the attempt number so tests never need timers.

use std::time::Duration;

/// Bounded retry policy used by the session requester
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    /// Counted attempts before the last error is surfaced
    pub max_attempts: u32,

    /// Backoff before the second attempt; doubles on each retry
    pub base_delay: Duration,

    /// Upper bound on a single backoff sleep
    pub max_delay: Duration,

    /// Fixed pause while the client is offline; consumes no attempt
    pub connectivity_wait: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(8),
            connectivity_wait: Duration::from_secs(3),
        }
    }
}

impl RetryPolicy {
    /// Backoff after the given 1-based attempt:
    /// `base * 2^(attempt - 1)`, capped at `max_delay`.
    pub fn next_delay(&self, attempt: u32) -> Duration {
        let pow = 2u32.saturating_pow(attempt.saturating_sub(1));
        let millis = self
            .base_delay
            .as_millis()
            .saturating_mul(u128::from(pow))
            .min(self.max_delay.as_millis());
        Duration::from_millis(millis as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delays_double() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.next_delay(1), Duration::from_secs(1));
        assert_eq!(policy.next_delay(2), Duration::from_secs(2));
        assert_eq!(policy.next_delay(3), Duration::from_secs(4));
    }

    #[test]
    fn test_delay_caps_at_max() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.next_delay(10), policy.max_delay);
    }

    #[test]
    fn test_custom_base() {
        let policy = RetryPolicy {
            base_delay: Duration::from_millis(250),
            ..RetryPolicy::default()
        };
        assert_eq!(policy.next_delay(1), Duration::from_millis(250));
        assert_eq!(policy.next_delay(2), Duration::from_millis(500));
    }
}

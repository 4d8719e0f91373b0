//! Attempt accounting and backoff for the request executor.

use std::time::Duration;

use crate::http_client::HttpError;

/// Delay schedule between attempts of one logical call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// Waits `attempt × step` after the given 1-based attempt failed.
    Linear {
        step: Duration,
    },
    /// Waits the same delay after every failed attempt.
    Fixed {
        delay: Duration,
    },
}

impl Default for Backoff {
    fn default() -> Self {
        Self::Linear {
            step: Duration::from_secs(1),
        }
    }
}

impl Backoff {
    /// Delay to wait after the 1-based `attempt` failed.
    pub fn delay(self, attempt: u32) -> Duration {
        match self {
            Self::Linear { step } => step.saturating_mul(attempt),
            Self::Fixed { delay } => delay,
        }
    }

    pub const fn none() -> Self {
        Self::Fixed {
            delay: Duration::ZERO,
        }
    }
}

/// Per-call retry bookkeeping. Lives only for the duration of one call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetryState {
    attempt: u32,
    last_failure: Option<HttpError>,
}

impl RetryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the next attempt and returns its 1-based index.
    pub fn begin_attempt(&mut self) -> u32 {
        self.attempt += 1;
        self.attempt
    }

    pub fn record_failure(&mut self, error: HttpError) {
        self.last_failure = Some(error);
    }

    pub const fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn last_failure(&self) -> Option<&HttpError> {
        self.last_failure.as_ref()
    }

    pub fn into_last_failure(self) -> Option<HttpError> {
        self.last_failure
    }

    /// Whether another attempt fits in a budget of `max_attempts`.
    pub const fn has_remaining(&self, max_attempts: u32) -> bool {
        self.attempt < max_attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_backoff_grows_by_one_step_per_attempt() {
        let backoff = Backoff::default();

        assert_eq!(backoff.delay(1), Duration::from_secs(1));
        assert_eq!(backoff.delay(2), Duration::from_secs(2));
        assert_eq!(backoff.delay(3), Duration::from_secs(3));
    }

    #[test]
    fn fixed_backoff_is_constant() {
        let backoff = Backoff::Fixed {
            delay: Duration::from_millis(250),
        };

        assert_eq!(backoff.delay(1), Duration::from_millis(250));
        assert_eq!(backoff.delay(9), Duration::from_millis(250));
        assert_eq!(Backoff::none().delay(4), Duration::ZERO);
    }

    #[test]
    fn retry_state_tracks_attempts_and_last_failure() {
        let mut state = RetryState::new();
        assert_eq!(state.begin_attempt(), 1);
        state.record_failure(HttpError::new("connection reset"));
        assert!(state.has_remaining(2));
        assert_eq!(state.begin_attempt(), 2);
        state.record_failure(HttpError::new("timeout"));
        assert!(!state.has_remaining(2));

        assert_eq!(state.attempt(), 2);
        assert_eq!(state.last_failure().map(HttpError::message), Some("timeout"));
    }
}

//! Retry policy for classified failures.
//!
//! # Responsibilities
//! - Decide whether a [`Failure`] is transient
//! - Compute the exponential backoff before the next attempt
//! - Enforce the retry limit
//!
//! # Rules
//! - Transport failures (connect errors, timeouts) are always transient
//! - API and non-JSON failures are transient only with a status >= 500;
//!   a garbled 2xx body is a permanent decode failure
//! - `delay_for(attempt) == base * 2^attempt`, attempt counted from 0,
//!   no jitter; an optional cap applies only when configured

use std::time::Duration;

use super::error::Failure;

pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_BACKOFF_BASE: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    base: Duration,
    max_delay: Option<Duration>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES, DEFAULT_BACKOFF_BASE)
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base: Duration) -> Self {
        Self {
            max_retries,
            base,
            max_delay: None,
        }
    }

    /// Caps every computed delay at `max_delay`.
    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = Some(max_delay);
        self
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn base(&self) -> Duration {
        self.base
    }

    /// Whether `failure` is transient, ignoring the attempt count.
    pub fn is_retryable(failure: &Failure) -> bool {
        match failure {
            Failure::Transport(_) => true,
            Failure::NonJson { status, .. } => status.as_u16() >= 500,
            Failure::Api { status, .. } => status.is_some_and(|s| s.as_u16() >= 500),
        }
    }

    /// Whether another attempt should follow the failed `attempt` (0-based).
    pub fn should_retry(&self, failure: &Failure, attempt: u32) -> bool {
        attempt < self.max_retries && Self::is_retryable(failure)
    }

    /// Delay to wait after the failed `attempt` (0-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.checked_pow(attempt).unwrap_or(u32::MAX);
        let delay = self.base.saturating_mul(factor);
        match self.max_delay {
            Some(cap) => delay.min(cap),
            None => delay,
        }
    }

    /// Upper bound on the latency of one logical call when every attempt
    /// runs into `timeout`: `timeout * (max_retries + 1)` plus all delays.
    pub fn worst_case_latency(&self, timeout: Duration) -> Duration {
        let attempts = timeout.saturating_mul(self.max_retries.saturating_add(1));
        (0..self.max_retries).fold(attempts, |total, attempt| total.saturating_add(self.delay_for(attempt)))
    }
}

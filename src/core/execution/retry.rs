//! Retry with backoff for blocking preconditions such as the overload check.
//!
//! The delay for attempt `n` is `first × factor^n`, clamped to `max`. With the
//! default `factor = 1.0` every retry waits `first`.

use super::pacing::Sleeper;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackoffPolicy {
    /// Delay after the first failed attempt
    pub first: Duration,
    /// Upper bound for any single delay
    pub max: Duration,
    /// Multiplicative growth factor
    pub factor: f64,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            first: Duration::from_secs(1),
            max: Duration::from_secs(1),
            factor: 1.0,
        }
    }
}

impl BackoffPolicy {
    /// Fixed delay between every attempt
    pub fn constant(delay: Duration) -> Self {
        Self {
            first: delay,
            max: delay,
            factor: 1.0,
        }
    }

    /// Delay to wait after the given (0-indexed) failed attempt
    pub fn next(&self, attempt: u32) -> Duration {
        let max_secs = self.max.as_secs_f64();
        let exponent = attempt.min(i32::MAX as u32) as i32;
        let secs = self.first.as_secs_f64() * self.factor.powi(exponent);

        if !secs.is_finite() || secs < 0.0 || secs > max_secs {
            self.max
        } else {
            Duration::from_secs_f64(secs)
        }
    }
}

/// Backoff plus an optional cap on the number of attempts
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RetryPolicy {
    pub backoff: BackoffPolicy,
    /// `None` retries forever. The first attempt always runs, so `Some(0)`
    /// behaves like `Some(1)`.
    pub max_attempts: Option<u32>,
}

impl RetryPolicy {
    /// Run `attempt` until it returns true, sleeping between failures.
    ///
    /// Returns the number of attempts made, or `Err(attempts)` once the cap is hit.
    pub fn run<F>(&self, sleeper: &dyn Sleeper, mut attempt: F) -> Result<u32, u32>
    where
        F: FnMut() -> bool,
    {
        let mut failures: u32 = 0;
        loop {
            if attempt() {
                return Ok(failures + 1);
            }
            failures += 1;
            if let Some(max) = self.max_attempts {
                if failures >= max {
                    return Err(failures);
                }
            }
            sleeper.sleep(self.backoff.next(failures - 1));
        }
    }
}

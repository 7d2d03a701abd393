//! Configuration for the elevator manager
//!
//! This module provides the timing and retry settings that control how long
//! simulated travel, boarding and polling take, and how overload checks are retried.

use super::retry::{BackoffPolicy, RetryPolicy};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Simulated durations for the operations that suspend the control thread
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Time for a car to travel one floor
    pub travel_time: Duration,
    /// Time the doors stay open for an en-route pickup
    pub boarding_time: Duration,
    /// Wait between manager loop polls when there is nothing to do
    pub poll_interval: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            travel_time: Duration::from_secs(1),
            boarding_time: Duration::from_secs(1),
            poll_interval: Duration::from_secs(1),
        }
    }
}

/// Configuration for the manager loop and its journeys
///
/// Default configuration uses one-second travel, boarding and poll delays and
/// retries failed safety checks every second without limit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ManagerConfig {
    pub timing: TimingConfig,
    /// Retry behaviour for overload checks before closing the doors
    pub safety_retry: RetryPolicy,
}

impl ManagerConfig {
    /// Create a new manager configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the time taken to travel between two adjacent floors
    pub fn with_travel_time(mut self, travel_time: Duration) -> Self {
        self.timing.travel_time = travel_time;
        self
    }

    /// Set how long doors stay open for passengers boarding mid-journey
    pub fn with_boarding_time(mut self, boarding_time: Duration) -> Self {
        self.timing.boarding_time = boarding_time;
        self
    }

    /// Set the manager loop's idle poll interval
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.timing.poll_interval = poll_interval;
        self
    }

    /// Set the backoff between failed safety checks
    pub fn with_safety_backoff(mut self, backoff: BackoffPolicy) -> Self {
        self.safety_retry.backoff = backoff;
        self
    }

    /// Cap the number of safety checks before a journey is abandoned
    ///
    /// # Note
    /// Without a cap an overloaded car waits indefinitely, which is the default.
    /// A cap below one is raised to one since the first check always runs.
    pub fn with_max_safety_attempts(mut self, attempts: u32) -> Self {
        self.safety_retry.max_attempts = Some(attempts.max(1));
        self
    }
}

use super::config::ManagerConfig;
use super::retry::RetryPolicy;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Suspends the control thread for a simulated duration
pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration);
}

/// Blocks the calling thread for real
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Records requested delays without waiting
#[derive(Debug, Default)]
pub struct InstantSleeper {
    slept: Mutex<Vec<Duration>>,
}

impl InstantSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sleeps requested so far
    pub fn calls(&self) -> usize {
        self.slept.lock().unwrap_or_else(|p| p.into_inner()).len()
    }

    /// Sum of all requested sleeps
    pub fn total(&self) -> Duration {
        self.slept.lock().unwrap_or_else(|p| p.into_inner()).iter().sum()
    }
}

impl Sleeper for InstantSleeper {
    fn sleep(&self, duration: Duration) {
        self.slept.lock().unwrap_or_else(|p| p.into_inner()).push(duration);
    }
}

/// Applies the configured simulated delays through a sleeper
#[derive(Clone)]
pub struct Pacer {
    sleeper: Arc<dyn Sleeper>,
    config: ManagerConfig,
}

impl Pacer {
    pub fn new(config: ManagerConfig, sleeper: Arc<dyn Sleeper>) -> Self {
        Self { sleeper, config }
    }

    /// Wait for the car to travel one floor
    pub fn travel(&self) {
        self.sleeper.sleep(self.config.timing.travel_time);
    }

    /// Wait for passengers to board
    pub fn board(&self) {
        self.sleeper.sleep(self.config.timing.boarding_time);
    }

    /// Wait one manager poll interval
    pub fn poll(&self) {
        self.sleeper.sleep(self.config.timing.poll_interval);
    }

    /// Retry `check` with the configured safety backoff
    pub fn retry_safety<F>(&self, check: F) -> Result<u32, u32>
    where
        F: FnMut() -> bool,
    {
        self.safety_retry().run(self.sleeper.as_ref(), check)
    }

    pub fn safety_retry(&self) -> &RetryPolicy {
        &self.config.safety_retry
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }
}

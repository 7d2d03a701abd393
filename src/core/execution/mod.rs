pub mod config;
pub mod journey;
pub mod manager;
pub mod observer;
pub mod pacing;
pub mod retry;

pub use config::{ManagerConfig, TimingConfig};
pub use journey::JourneyController;
pub use manager::{ElevatorManager, ShutdownHandle, StepOutcome};
pub use observer::JourneyObserver;
pub use pacing::{InstantSleeper, Pacer, Sleeper, ThreadSleeper};
pub use retry::{BackoffPolicy, RetryPolicy};

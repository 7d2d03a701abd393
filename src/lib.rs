pub mod core;

// Re-export commonly used types
pub use crate::core::elevator::{Elevator, ElevatorStatus};
pub use crate::core::errors::ElevatorError;
pub use crate::core::execution::{ElevatorManager, ManagerConfig, StepOutcome};
pub use crate::core::requests::RequestQueue;
pub use crate::core::roster::{ElevatorSpec, RosterProvider, StaticRoster};
pub use crate::core::types::{DoorState, ElevatorId, OperationalState, Request, RequestType};

use super::types::ElevatorId;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElevatorError {
    /// Roster entry with an impossible floor layout
    InvalidElevator(String),
    /// Roster could not be loaded, the manager must not start
    Initialisation(String),
    DuplicateElevatorId(ElevatorId),
    FloorOutOfRange {
        elevator_id: ElevatorId,
        floor: i32,
        bottom: i32,
        top: i32,
    },
    /// Only reachable when a retry cap is configured
    SafetyCheckExhausted {
        elevator_id: ElevatorId,
        attempts: u32,
    },
}

impl fmt::Display for ElevatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElevatorError::InvalidElevator(msg) => write!(f, "Invalid elevator: {}", msg),
            ElevatorError::Initialisation(msg) => write!(f, "Initialisation error: {}", msg),
            ElevatorError::DuplicateElevatorId(id) => {
                write!(f, "Elevator id {} is used more than once", id)
            }
            ElevatorError::FloorOutOfRange { elevator_id, floor, bottom, top } => write!(
                f,
                "Elevator {} cannot reach floor {} (serves {}..={})",
                elevator_id, floor, bottom, top
            ),
            ElevatorError::SafetyCheckExhausted { elevator_id, attempts } => write!(
                f,
                "Elevator {} still overloaded after {} safety checks",
                elevator_id, attempts
            ),
        }
    }
}

impl std::error::Error for ElevatorError {}

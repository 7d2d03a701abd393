use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric identifier of an elevator car
pub type ElevatorId = u32;

/// Inclusive range of floors an elevator can serve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FloorRange {
    pub bottom: i32,
    pub top: i32,
}

impl FloorRange {
    pub fn new(bottom: i32, top: i32) -> Self {
        Self { bottom, top }
    }

    /// Check whether a floor lies within [bottom, top]
    pub fn contains(&self, floor: i32) -> bool {
        floor >= self.bottom && floor <= self.top
    }

    /// Check whether a floor is the top or bottom of the range
    pub fn is_limit(&self, floor: i32) -> bool {
        floor == self.top || floor == self.bottom
    }

    /// Check whether any of `ranges` reaches `floor`
    pub fn any_contains(ranges: &[FloorRange], floor: i32) -> bool {
        ranges.iter().any(|range| range.contains(floor))
    }
}

/// Where a request was placed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestType {
    /// Call button on a floor, any suitable car may answer it
    Wall,
    /// Button inside a specific car
    Panel,
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestType::Wall => write!(f, "WALL"),
            RequestType::Panel => write!(f, "PANEL"),
        }
    }
}

/// A floor request waiting to be served
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Request {
    pub floor: i32,
    pub request_type: RequestType,
    /// Car whose panel was pressed. Always `None` for wall calls.
    pub elevator_id: Option<ElevatorId>,
}

impl Request {
    /// Create a call from a floor's wall button
    pub fn wall(floor: i32) -> Self {
        Self {
            floor,
            request_type: RequestType::Wall,
            elevator_id: None,
        }
    }

    /// Create a call from inside the given car
    pub fn panel(floor: i32, elevator_id: ElevatorId) -> Self {
        Self {
            floor,
            request_type: RequestType::Panel,
            elevator_id: Some(elevator_id),
        }
    }

    /// Whether a car standing at `floor` may pick this request up on its way
    pub fn matches_pickup(&self, floor: i32, elevator_id: ElevatorId) -> bool {
        if self.floor != floor {
            return false;
        }
        match self.request_type {
            RequestType::Wall => true,
            RequestType::Panel => self.elevator_id == Some(elevator_id),
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.elevator_id {
            Some(id) => write!(
                f,
                "{} request for floor {} (elevator {})",
                self.request_type, self.floor, id
            ),
            None => write!(f, "{} request for floor {}", self.request_type, self.floor),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoorState {
    Open,
    Closed,
}

/// Operational state of a car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationalState {
    /// Idle and available for dispatch
    Online,
    Up,
    Down,
    /// Out of service until an operator clears it
    Maintenance,
    /// Last safety check failed
    Overloaded,
}

impl OperationalState {
    pub fn is_moving(&self) -> bool {
        matches!(self, OperationalState::Up | OperationalState::Down)
    }
}

impl fmt::Display for OperationalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationalState::Online => "ONLINE",
            OperationalState::Up => "UP",
            OperationalState::Down => "DOWN",
            OperationalState::Maintenance => "MAINTENANCE",
            OperationalState::Overloaded => "OVERLOADED",
        };
        write!(f, "{}", name)
    }
}

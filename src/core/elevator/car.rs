use super::scale::{RandomScale, WeighingScale};
use crate::core::errors::ElevatorError;
use crate::core::execution::pacing::Pacer;
use crate::core::types::{DoorState, ElevatorId, FloorRange, OperationalState, Request};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Point-in-time view of a car for status reports
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevatorStatus {
    pub id: ElevatorId,
    pub current_floor: i32,
    pub door_state: DoorState,
    pub operational_state: OperationalState,
}

/// One elevator car and its physical state
///
/// A car starts parked and ONLINE with its doors open. Doors are only closed
/// while the car is travelling UP or DOWN, and `current_floor` changes by
/// exactly one floor per move.
pub struct Elevator {
    id: ElevatorId,
    range: FloorRange,
    max_weight: f64,
    current_floor: i32,
    door_state: DoorState,
    operational_state: OperationalState,
    scale: Box<dyn WeighingScale>,
}

impl Elevator {
    /// Create a car with a random overload scale
    pub fn new(
        id: ElevatorId,
        bottom_floor: i32,
        top_floor: i32,
        start_floor: i32,
        max_weight: f64,
    ) -> Result<Self, ElevatorError> {
        if bottom_floor >= top_floor {
            return Err(ElevatorError::InvalidElevator(format!(
                "elevator {} has bottom floor {} not below top floor {}",
                id, bottom_floor, top_floor
            )));
        }
        let range = FloorRange::new(bottom_floor, top_floor);
        if !range.contains(start_floor) {
            return Err(ElevatorError::InvalidElevator(format!(
                "elevator {} starts on floor {} outside {}..={}",
                id, start_floor, bottom_floor, top_floor
            )));
        }

        Ok(Self {
            id,
            range,
            max_weight,
            current_floor: start_floor,
            door_state: DoorState::Open,
            operational_state: OperationalState::Online,
            scale: Box::new(RandomScale::new()),
        })
    }

    /// Replace the overload scale
    pub fn with_scale(mut self, scale: impl WeighingScale + 'static) -> Self {
        self.scale = Box::new(scale);
        self
    }

    pub fn id(&self) -> ElevatorId {
        self.id
    }

    pub fn bottom_floor(&self) -> i32 {
        self.range.bottom
    }

    pub fn top_floor(&self) -> i32 {
        self.range.top
    }

    pub fn floor_range(&self) -> FloorRange {
        self.range
    }

    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    pub fn current_floor(&self) -> i32 {
        self.current_floor
    }

    pub fn door_state(&self) -> DoorState {
        self.door_state
    }

    pub fn operational_state(&self) -> OperationalState {
        self.operational_state
    }

    pub fn status(&self) -> ElevatorStatus {
        ElevatorStatus {
            id: self.id,
            current_floor: self.current_floor,
            door_state: self.door_state,
            operational_state: self.operational_state,
        }
    }

    pub fn open_doors(&mut self) {
        self.door_state = DoorState::Open;
        debug!("[Elevator {}] Doors open", self.id);
    }

    pub fn close_doors(&mut self) {
        self.door_state = DoorState::Closed;
        debug!("[Elevator {}] Doors closed", self.id);
    }

    /// Weigh the car and flag it OVERLOADED if the check fails
    pub fn run_safety_checks(&mut self) -> bool {
        if !self.weigh_elevator() {
            self.operational_state = OperationalState::Overloaded;
            warn!(
                "[Elevator {}] Status: {}. Weight limit: {}",
                self.id, self.operational_state, self.max_weight
            );
            return false;
        }

        debug!("[Elevator {}] Safety checks passed", self.id);
        true
    }

    pub fn weigh_elevator(&mut self) -> bool {
        self.scale.weigh(self.max_weight)
    }

    /// Close the doors once the weight is acceptable and head towards the request
    pub fn ready_elevator_for_journey(
        &mut self,
        request: &Request,
        pacer: &Pacer,
    ) -> Result<(), ElevatorError> {
        if self.door_state == DoorState::Open {
            pacer
                .retry_safety(|| self.run_safety_checks())
                .map_err(|attempts| ElevatorError::SafetyCheckExhausted {
                    elevator_id: self.id,
                    attempts,
                })?;
            self.close_doors();
        }

        self.operational_state = if request.floor > self.current_floor {
            OperationalState::Up
        } else {
            OperationalState::Down
        };

        info!(
            "[Elevator {}] Heading {} from floor {} to floor {}",
            self.id, self.operational_state, self.current_floor, request.floor
        );
        Ok(())
    }

    /// Open the doors and mark the car available for dispatch
    pub fn ready_elevator_for_new_passengers(&mut self) {
        self.open_doors();
        self.set_elevator_as_available();
    }

    /// Stop mid-journey to let passengers on, then carry on to `request`
    pub fn run_enroute_pickup_routine(
        &mut self,
        request: &Request,
        pacer: &Pacer,
    ) -> Result<(), ElevatorError> {
        self.open_doors();
        pacer.board();
        self.ready_elevator_for_journey(request, pacer)
    }

    /// Travel one floor in the current direction
    pub fn move_between_floors(&mut self, pacer: &Pacer) -> Result<(), ElevatorError> {
        pacer.travel();

        let next_floor = if self.operational_state == OperationalState::Up {
            self.current_floor + 1
        } else {
            self.current_floor - 1
        };
        if !self.range.contains(next_floor) {
            return Err(ElevatorError::FloorOutOfRange {
                elevator_id: self.id,
                floor: next_floor,
                bottom: self.range.bottom,
                top: self.range.top,
            });
        }

        self.current_floor = next_floor;
        debug!(
            "[Elevator {}] Status: {} to floor {}",
            self.id, self.operational_state, self.current_floor
        );
        Ok(())
    }

    pub fn set_elevator_as_available(&mut self) {
        self.operational_state = OperationalState::Online;
        info!(
            "[Elevator {}] Status: {} on floor {}",
            self.id, self.operational_state, self.current_floor
        );
    }

    pub fn set_to_maintenance_mode(&mut self) {
        self.operational_state = OperationalState::Maintenance;
    }

    /// Whether the car is on its top or bottom floor
    pub fn is_at_floor_range_limit(&self) -> bool {
        self.range.is_limit(self.current_floor)
    }

    /// Whether one more move in the current direction stays in range
    pub fn can_advance(&self) -> bool {
        if self.operational_state == OperationalState::Up {
            self.current_floor < self.range.top
        } else {
            self.current_floor > self.range.bottom
        }
    }
}

impl fmt::Debug for Elevator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Elevator")
            .field("id", &self.id)
            .field("range", &self.range)
            .field("max_weight", &self.max_weight)
            .field("current_floor", &self.current_floor)
            .field("door_state", &self.door_state)
            .field("operational_state", &self.operational_state)
            .finish()
    }
}

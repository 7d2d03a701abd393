use crate::core::errors::ElevatorError;
use crate::core::types::{ElevatorId, Request};

/// Observer trait for journey events
pub trait JourneyObserver: Send {
    /// Called when a car is assigned a request
    fn on_journey_started(&mut self, _elevator_id: ElevatorId, _request: &Request) {}

    /// Called after every single-floor move
    fn on_floor_reached(&mut self, _elevator_id: ElevatorId, _floor: i32) {}

    /// Called when a car stops mid-journey for queued requests
    fn on_enroute_pickup(&mut self, _elevator_id: ElevatorId, _floor: i32, _picked: &[Request]) {}

    /// Called when a journey ends, at the destination or at a range limit
    fn on_journey_completed(
        &mut self,
        _elevator_id: ElevatorId,
        _request: &Request,
        _final_floor: i32,
    ) {
    }

    /// Called when a car is taken out of service
    fn on_maintenance(&mut self, _elevator_id: ElevatorId, _error: &ElevatorError) {}
}

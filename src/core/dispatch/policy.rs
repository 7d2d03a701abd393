use crate::core::elevator::Elevator;
use crate::core::types::{OperationalState, Request, RequestType};

/// Pick the car that should serve `request`.
///
/// Panel calls go to the car whose button was pressed. Wall calls go to the
/// nearest ONLINE car, scanning the fleet in order so ties keep the earliest.
pub fn choose_elevator<'a>(fleet: &'a [Elevator], request: &Request) -> Option<&'a Elevator> {
    match request.request_type {
        RequestType::Panel => {
            let id = request.elevator_id?;
            fleet.iter().find(|elevator| elevator.id() == id)
        }
        RequestType::Wall => choose_appropriate_available_elevator(fleet, request.floor),
    }
}

/// Nearest ONLINE car to `requested_floor`.
///
/// A closer car only replaces the current pick while no car in the fleet is
/// travelling UP, since that car is expected to intercept the call.
pub fn choose_appropriate_available_elevator(
    fleet: &[Elevator],
    requested_floor: i32,
) -> Option<&Elevator> {
    let mut candidates = fleet
        .iter()
        .filter(|elevator| elevator.operational_state() == OperationalState::Online);

    let mut best = candidates.next()?;
    let mut smallest_difference = floor_difference(best.current_floor(), requested_floor);
    let any_going_up = fleet
        .iter()
        .any(|elevator| elevator.operational_state() == OperationalState::Up);

    for elevator in candidates {
        let difference = floor_difference(elevator.current_floor(), requested_floor);
        if difference < smallest_difference && !any_going_up {
            best = elevator;
            smallest_difference = difference;
        }
    }

    Some(best)
}

fn floor_difference(elevator_floor: i32, requested_floor: i32) -> u32 {
    elevator_floor.abs_diff(requested_floor)
}

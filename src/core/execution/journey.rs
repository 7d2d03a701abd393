use super::observer::JourneyObserver;
use super::pacing::Pacer;
use crate::core::elevator::Elevator;
use crate::core::errors::ElevatorError;
use crate::core::requests::RequestQueue;
use crate::core::roster::RosterProvider;
use crate::core::types::Request;
use log::{error, info};

/// Drives one car through the journey for one request
pub struct JourneyController<'a> {
    queue: &'a RequestQueue,
    pacer: &'a Pacer,
    roster: &'a dyn RosterProvider,
    observers: &'a mut [Box<dyn JourneyObserver>],
}

impl<'a> JourneyController<'a> {
    pub fn new(
        queue: &'a RequestQueue,
        pacer: &'a Pacer,
        roster: &'a dyn RosterProvider,
        observers: &'a mut [Box<dyn JourneyObserver>],
    ) -> Self {
        Self {
            queue,
            pacer,
            roster,
            observers,
        }
    }

    /// Serve `request` with `elevator`, leaving the car ONLINE afterwards.
    ///
    /// Any failure puts the car into maintenance, alerts the roster and is returned.
    pub fn make_elevator_journey(
        &mut self,
        request: &Request,
        elevator: &mut Elevator,
    ) -> Result<(), ElevatorError> {
        info!("[Elevator {}] Responding to {}", elevator.id(), request);
        for observer in self.observers.iter_mut() {
            observer.on_journey_started(elevator.id(), request);
        }

        if elevator.current_floor() == request.floor {
            elevator.ready_elevator_for_new_passengers();
            self.notify_completed(request, elevator);
            return Ok(());
        }

        let result = elevator
            .ready_elevator_for_journey(request, self.pacer)
            .and_then(|_| self.run_journey(request, elevator));

        if let Err(e) = result {
            error!("[Elevator {}] Journey failed: {}. Entering maintenance", elevator.id(), e);
            elevator.set_to_maintenance_mode();
            self.roster.raise_alert(elevator.id());
            for observer in self.observers.iter_mut() {
                observer.on_maintenance(elevator.id(), &e);
            }
            return Err(e);
        }

        elevator.ready_elevator_for_new_passengers();
        self.notify_completed(request, elevator);
        Ok(())
    }

    /// Move floor by floor towards `request.floor`, stopping for pickups on the way.
    ///
    /// The journey ends early when the car reaches the top or bottom of its range.
    pub fn run_journey(
        &mut self,
        request: &Request,
        elevator: &mut Elevator,
    ) -> Result<(), ElevatorError> {
        while elevator.current_floor() != request.floor {
            if !elevator.can_advance() {
                break;
            }
            elevator.move_between_floors(self.pacer)?;
            let floor = elevator.current_floor();
            for observer in self.observers.iter_mut() {
                observer.on_floor_reached(elevator.id(), floor);
            }

            if let Some(pickup) = self.queue.find_enroute_pickup(floor, elevator.id()) {
                info!(
                    "[Elevator {}] Stopped for {} pickup on floor {} en route to floor {}",
                    elevator.id(),
                    pickup.request_type,
                    floor,
                    request.floor
                );
                elevator.run_enroute_pickup_routine(request, self.pacer)?;
                let picked = self.queue.take_enroute_pickups(floor, elevator.id());
                for observer in self.observers.iter_mut() {
                    observer.on_enroute_pickup(elevator.id(), floor, &picked);
                }
            }

            if elevator.is_at_floor_range_limit() {
                break;
            }
        }

        info!(
            "[Elevator {}] Completed {} request on floor {}",
            elevator.id(),
            request.request_type,
            elevator.current_floor()
        );
        Ok(())
    }

    fn notify_completed(&mut self, request: &Request, elevator: &Elevator) {
        for observer in self.observers.iter_mut() {
            observer.on_journey_completed(elevator.id(), request, elevator.current_floor());
        }
    }
}

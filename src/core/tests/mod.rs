
use crate::core::elevator::{Elevator, FixedScale};
use crate::core::errors::ElevatorError;
use crate::core::execution::observer::JourneyObserver;
use crate::core::roster::RosterProvider;
use crate::core::types::{ElevatorId, Request};
use std::sync::{Arc, Mutex};

/// Car on floors -3..=20 that never reports an overload
fn car(id: ElevatorId, start: i32) -> Elevator {
    Elevator::new(id, -3, 20, start, 75.0)
        .unwrap()
        .with_scale(FixedScale::ok())
}

/// Roster handing out a prepared fleet and recording alerts
struct TestRoster {
    fleet: Mutex<Option<Vec<Elevator>>>,
    alerts: Arc<Mutex<Vec<ElevatorId>>>,
}

impl TestRoster {
    fn new(fleet: Vec<Elevator>) -> Self {
        Self {
            fleet: Mutex::new(Some(fleet)),
            alerts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn alerts(&self) -> Vec<ElevatorId> {
        self.alerts.lock().unwrap().clone()
    }
}

impl RosterProvider for TestRoster {
    fn get_elevators(&self) -> Result<Vec<Elevator>, String> {
        self.fleet
            .lock()
            .unwrap()
            .take()
            .ok_or_else(|| "roster already consumed".to_string())
    }

    fn raise_alert(&self, elevator_id: ElevatorId) {
        self.alerts.lock().unwrap().push(elevator_id);
    }
}

#[derive(Debug, Clone, PartialEq)]
enum JourneyEvent {
    Started(ElevatorId, Request),
    Floor(ElevatorId, i32),
    Pickup(ElevatorId, i32, Vec<Request>),
    Completed(ElevatorId, Request, i32),
    Maintenance(ElevatorId, ElevatorError),
}

/// Observer that keeps every event for later assertions
#[derive(Clone, Default)]
struct RecordingObserver {
    events: Arc<Mutex<Vec<JourneyEvent>>>,
}

impl RecordingObserver {
    fn events(&self) -> Vec<JourneyEvent> {
        self.events.lock().unwrap().clone()
    }

    fn floors_visited(&self, elevator_id: ElevatorId) -> Vec<i32> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                JourneyEvent::Floor(id, floor) if id == elevator_id => Some(floor),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: JourneyEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl JourneyObserver for RecordingObserver {
    fn on_journey_started(&mut self, elevator_id: ElevatorId, request: &Request) {
        self.record(JourneyEvent::Started(elevator_id, *request));
    }

    fn on_floor_reached(&mut self, elevator_id: ElevatorId, floor: i32) {
        self.record(JourneyEvent::Floor(elevator_id, floor));
    }

    fn on_enroute_pickup(&mut self, elevator_id: ElevatorId, floor: i32, picked: &[Request]) {
        self.record(JourneyEvent::Pickup(elevator_id, floor, picked.to_vec()));
    }

    fn on_journey_completed(
        &mut self,
        elevator_id: ElevatorId,
        request: &Request,
        final_floor: i32,
    ) {
        self.record(JourneyEvent::Completed(elevator_id, *request, final_floor));
    }

    fn on_maintenance(&mut self, elevator_id: ElevatorId, error: &ElevatorError) {
        self.record(JourneyEvent::Maintenance(elevator_id, error.clone()));
    }
}

use super::config::ManagerConfig;
use super::journey::JourneyController;
use super::observer::JourneyObserver;
use super::pacing::{Pacer, Sleeper};
use crate::core::dispatch;
use crate::core::elevator::{Elevator, ElevatorStatus};
use crate::core::errors::ElevatorError;
use crate::core::requests::RequestQueue;
use crate::core::roster::RosterProvider;
use crate::core::types::{ElevatorId, OperationalState, Request};
use log::{info, warn};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a single manager loop iteration
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Nothing queued
    Idle,
    /// Oldest request stays queued until a car frees up
    NoElevatorAvailable,
    Served {
        elevator_id: ElevatorId,
        request: Request,
    },
    /// Journey aborted, the car is now in maintenance
    JourneyFailed {
        elevator_id: ElevatorId,
        request: Request,
        error: ElevatorError,
    },
}

/// Stops a running manager loop from another thread
#[derive(Debug, Clone, Default)]
pub struct ShutdownHandle {
    flag: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn trigger(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_triggered(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Owns the fleet and the request queue and serves requests one at a time
pub struct ElevatorManager<R: RosterProvider> {
    roster: R,
    fleet: Vec<Elevator>,
    queue: RequestQueue,
    pacer: Pacer,
    observers: Vec<Box<dyn JourneyObserver>>,
    shutdown: ShutdownHandle,
}

impl<R: RosterProvider> ElevatorManager<R> {
    /// Load the fleet from `roster`.
    ///
    /// Fails if the roster is unavailable, empty or reuses an elevator id.
    pub fn initialise(
        roster: R,
        config: ManagerConfig,
        sleeper: Arc<dyn Sleeper>,
    ) -> Result<Self, ElevatorError> {
        let fleet = roster.get_elevators().map_err(ElevatorError::Initialisation)?;
        if fleet.is_empty() {
            return Err(ElevatorError::Initialisation(
                "roster contains no elevators".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for elevator in &fleet {
            if !seen.insert(elevator.id()) {
                return Err(ElevatorError::DuplicateElevatorId(elevator.id()));
            }
        }

        let queue = RequestQueue::new(fleet.iter().map(|e| e.floor_range()).collect());
        info!("Elevator manager initialised with {} elevators", fleet.len());

        Ok(Self {
            roster,
            fleet,
            queue,
            pacer: Pacer::new(config, sleeper),
            observers: Vec::new(),
            shutdown: ShutdownHandle::default(),
        })
    }

    /// Add an observer notified of journey events
    pub fn add_observer(&mut self, observer: Box<dyn JourneyObserver>) {
        self.observers.push(observer);
    }

    /// Queue a request, see [`RequestQueue::make_elevator_manager_request`]
    pub fn make_elevator_manager_request(&self, request: Request) -> bool {
        self.queue.make_elevator_manager_request(request)
    }

    /// Handle for producers on other threads
    pub fn request_queue(&self) -> RequestQueue {
        self.queue.clone()
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.shutdown.clone()
    }

    pub fn fleet(&self) -> &[Elevator] {
        &self.fleet
    }

    pub fn roster(&self) -> &R {
        &self.roster
    }

    pub fn config(&self) -> &ManagerConfig {
        self.pacer.config()
    }

    pub fn fleet_status(&self) -> Vec<ElevatorStatus> {
        self.fleet.iter().map(Elevator::status).collect()
    }

    /// Run the loop until the shutdown handle is triggered.
    ///
    /// Returns the number of requests served.
    pub fn run(&mut self) -> usize {
        self.log_fleet_status();
        self.log_outstanding_requests();

        let mut served = 0;
        while !self.shutdown.is_triggered() {
            match self.step() {
                StepOutcome::Idle | StepOutcome::NoElevatorAvailable => self.pacer.poll(),
                StepOutcome::Served { .. } => served += 1,
                StepOutcome::JourneyFailed { .. } => {}
            }
        }

        info!("Elevator manager stopped after serving {} requests", served);
        served
    }

    /// Step until the queue is empty or no car can take the oldest request
    pub fn drain(&mut self) -> Vec<StepOutcome> {
        let mut outcomes = Vec::new();
        loop {
            match self.step() {
                StepOutcome::Idle | StepOutcome::NoElevatorAvailable => return outcomes,
                outcome => outcomes.push(outcome),
            }
        }
    }

    /// One loop iteration: dispatch the oldest request and run its journey
    pub fn step(&mut self) -> StepOutcome {
        let request = match self.queue.peek_oldest() {
            Some(request) => request,
            None => return StepOutcome::Idle,
        };

        // Panel calls for a missing or broken car wait at the head of the queue
        let chosen = dispatch::choose_elevator(&self.fleet, &request)
            .filter(|elevator| elevator.operational_state() != OperationalState::Maintenance)
            .map(Elevator::id);
        let index = match chosen.and_then(|id| self.fleet.iter().position(|e| e.id() == id)) {
            Some(index) => index,
            None => return StepOutcome::NoElevatorAvailable,
        };
        let elevator_id = self.fleet[index].id();

        self.queue.pop_oldest();

        let mut journey = JourneyController::new(
            &self.queue,
            &self.pacer,
            &self.roster,
            &mut self.observers,
        );
        let outcome = match journey.make_elevator_journey(&request, &mut self.fleet[index]) {
            Ok(()) => StepOutcome::Served { elevator_id, request },
            Err(error) => {
                warn!("{} abandoned: {}", request, error);
                StepOutcome::JourneyFailed {
                    elevator_id,
                    request,
                    error,
                }
            }
        };

        self.log_fleet_status();
        self.log_outstanding_requests();
        outcome
    }

    pub fn log_fleet_status(&self) {
        info!("Status");
        for elevator in &self.fleet {
            info!(
                "  Elevator {}: floor {}, {}",
                elevator.id(),
                elevator.current_floor(),
                elevator.operational_state()
            );
        }
    }

    pub fn log_outstanding_requests(&self) {
        let pending = self.queue.snapshot();
        if pending.is_empty() {
            info!("No requests. Stationary");
            return;
        }

        info!("Outstanding requests");
        for request in pending {
            info!("  {}", request);
        }
    }
}

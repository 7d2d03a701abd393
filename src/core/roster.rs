use crate::core::elevator::{Elevator, RandomScale};
use crate::core::errors::ElevatorError;
use crate::core::types::ElevatorId;
use log::warn;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Supplies the fleet at startup and receives maintenance alerts
pub trait RosterProvider: Send {
    /// Called once when the manager initialises
    fn get_elevators(&self) -> Result<Vec<Elevator>, String>;

    /// Notify operators that a car went into maintenance
    fn raise_alert(&self, elevator_id: ElevatorId);
}

/// Layout of one car in a roster
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevatorSpec {
    pub id: ElevatorId,
    pub bottom_floor: i32,
    pub top_floor: i32,
    pub start_floor: i32,
    pub max_weight: f64,
}

impl ElevatorSpec {
    pub fn build(&self) -> Result<Elevator, ElevatorError> {
        Elevator::new(
            self.id,
            self.bottom_floor,
            self.top_floor,
            self.start_floor,
            self.max_weight,
        )
    }
}

/// Roster backed by a fixed list of car layouts
pub struct StaticRoster {
    specs: Vec<ElevatorSpec>,
    overload_probability: f64,
    /// Base seed for the overload scales (each car gets base + id)
    seed_base: Option<u64>,
    alerts: Mutex<Vec<ElevatorId>>,
}

impl StaticRoster {
    pub fn new(specs: Vec<ElevatorSpec>) -> Self {
        Self {
            specs,
            overload_probability: RandomScale::DEFAULT_OVERLOAD_PROBABILITY,
            seed_base: None,
            alerts: Mutex::new(Vec::new()),
        }
    }

    /// Two cars serving floors -3 to 20, parked on floors 13 and 6
    pub fn default_building() -> Self {
        Self::new(vec![
            ElevatorSpec {
                id: 1,
                bottom_floor: -3,
                top_floor: 20,
                start_floor: 13,
                max_weight: 75.0,
            },
            ElevatorSpec {
                id: 2,
                bottom_floor: -3,
                top_floor: 20,
                start_floor: 6,
                max_weight: 75.0,
            },
        ])
    }

    /// Chance of an overload reading per safety check, see [`RandomScale`]
    pub fn with_overload_probability(mut self, probability: f64) -> Self {
        self.overload_probability = probability;
        self
    }

    /// Make overload readings reproducible
    pub fn with_seed(mut self, seed_base: u64) -> Self {
        self.seed_base = Some(seed_base);
        self
    }

    pub fn specs(&self) -> &[ElevatorSpec] {
        &self.specs
    }

    /// Cars alerted so far, in order
    pub fn alerts(&self) -> Vec<ElevatorId> {
        self.alerts.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }
}

impl RosterProvider for StaticRoster {
    fn get_elevators(&self) -> Result<Vec<Elevator>, String> {
        self.specs
            .iter()
            .map(|spec| {
                let scale = match self.seed_base {
                    Some(base) => RandomScale::seeded(
                        base.wrapping_add(u64::from(spec.id)),
                        self.overload_probability,
                    ),
                    None => RandomScale::with_probability(self.overload_probability),
                };
                spec.build()
                    .map(|elevator| elevator.with_scale(scale))
                    .map_err(|e| e.to_string())
            })
            .collect()
    }

    fn raise_alert(&self, elevator_id: ElevatorId) {
        warn!("[Elevator {}] Maintenance alert raised", elevator_id);
        self.alerts.lock().unwrap_or_else(|p| p.into_inner()).push(elevator_id);
    }
}

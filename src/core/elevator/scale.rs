use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Decides whether the load in a car is within its limit
pub trait WeighingScale: Send {
    /// Returns true when the car is not overloaded
    fn weigh(&mut self, max_weight: f64) -> bool;
}

/// Reports an overload with a fixed probability
pub struct RandomScale {
    rng: StdRng,
    overload_probability: f64,
}

impl RandomScale {
    pub const DEFAULT_OVERLOAD_PROBABILITY: f64 = 0.1;

    pub fn new() -> Self {
        Self::with_probability(Self::DEFAULT_OVERLOAD_PROBABILITY)
    }

    pub fn with_probability(overload_probability: f64) -> Self {
        Self::with_rng(StdRng::from_entropy(), overload_probability)
    }

    /// Deterministic scale for reproducible runs
    pub fn seeded(seed: u64, overload_probability: f64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), overload_probability)
    }

    /// Probabilities outside [0, 1] are clamped, non-finite ones disable overloads
    fn with_rng(rng: StdRng, overload_probability: f64) -> Self {
        let overload_probability = if overload_probability.is_finite() {
            overload_probability.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            rng,
            overload_probability,
        }
    }
}

impl Default for RandomScale {
    fn default() -> Self {
        Self::new()
    }
}

impl WeighingScale for RandomScale {
    fn weigh(&mut self, _max_weight: f64) -> bool {
        !self.rng.gen_bool(self.overload_probability)
    }
}

/// Always returns the same reading
#[derive(Debug, Clone, Copy)]
pub struct FixedScale {
    pub within_limit: bool,
}

impl FixedScale {
    pub fn ok() -> Self {
        Self { within_limit: true }
    }

    pub fn overloaded() -> Self {
        Self { within_limit: false }
    }
}

impl WeighingScale for FixedScale {
    fn weigh(&mut self, _max_weight: f64) -> bool {
        self.within_limit
    }
}

/// Replays a sequence of readings, then reports within limit
#[derive(Debug, Clone, Default)]
pub struct ScriptedScale {
    readings: VecDeque<bool>,
}

impl ScriptedScale {
    pub fn new(readings: impl IntoIterator<Item = bool>) -> Self {
        Self {
            readings: readings.into_iter().collect(),
        }
    }
}

impl WeighingScale for ScriptedScale {
    fn weigh(&mut self, _max_weight: f64) -> bool {
        self.readings.pop_front().unwrap_or(true)
    }
}

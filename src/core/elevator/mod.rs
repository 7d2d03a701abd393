pub mod car;
pub mod scale;

pub use car::{Elevator, ElevatorStatus};
pub use scale::{FixedScale, RandomScale, ScriptedScale, WeighingScale};

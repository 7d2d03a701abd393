pub mod policy;

pub use policy::{choose_appropriate_available_elevator, choose_elevator};

pub mod dispatch;
pub mod elevator;
pub mod errors;
pub mod execution;
pub mod requests;
pub mod roster;
pub mod types;

#[cfg(test)]
mod tests;

//! External integrations and pure domain logic

pub mod normalize;
pub mod schedule;

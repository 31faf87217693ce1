//! Shared types between the MiningOS dashboard and the services it talks to.

pub mod enums;
pub mod pools;
pub mod reports;
pub mod system;

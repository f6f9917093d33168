//! Command implementations for the raim CLI

pub mod hardware;
pub mod models;
pub mod plan;
pub mod telemetry;

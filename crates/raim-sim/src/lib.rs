//! # raim-sim
//!
//! Simulated RedBox node telemetry for RAIM demos.
//!
//! Everything in this crate is synthetic: readings are drawn from a
//! pseudo-random generator around per-tier baselines. No real hardware is
//! queried and nothing here feeds capacity resolution; the simulator exists
//! so demo surfaces have plausible dashboard numbers to display.

pub mod telemetry;

pub use telemetry::{NodeStatus, NodeTelemetry, TelemetryBaseline, TelemetrySimulator};

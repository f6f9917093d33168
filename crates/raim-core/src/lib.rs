//! # raim-core
//!
//! Core types and capacity resolution for RAIM - the RedBox AI inference
//! appliance manager.
//!
//! This crate provides the foundational data structures shared across all
//! RAIM components. It includes:
//!
//! - Hardware profiles for the RedBox appliance tiers, including parsing of
//!   canonical `"<Name> - <count>x <type>"` configuration labels
//! - The model catalog mapping model names to their preferred GPU tuple
//! - The capacity resolver that decides whether a model fits a tier and how
//!   many concurrent instances it supports
//! - Configuration schema and loading utilities
//! - Error handling types

pub mod capacity;
pub mod config;
pub mod error;
pub mod hardware;
pub mod model;

// Re-export commonly used types at the crate root
pub use capacity::{is_compatible, resolve_capacity, CapacityDecision};
pub use config::RaimConfig;
pub use error::{Error, Result};
pub use hardware::HardwareProfile;
pub use model::{ModelCatalog, ModelProfile};

//! Capacity resolution for model deployments
//!
//! Pure functions mapping a (hardware profile, model, requested concurrency)
//! triple to a [`CapacityDecision`]. Resolution has no side effects and no
//! shared state; every call produces a fresh immutable decision, so repeated
//! calls with identical inputs yield identical outputs.

use crate::{HardwareProfile, ModelProfile};
use serde::{Deserialize, Serialize};

/// Accelerator type that the entry-level tier never carries
pub const LARGE_ACCELERATOR: &str = "H100";

/// Name marker identifying the smallest appliance tier
pub const ENTRY_TIER_MARKER: &str = "RedBox One";

/// Concurrent model instances supported per provisioned GPU
pub const INSTANCES_PER_GPU: u32 = 2;

/// Outcome of resolving a deployment request against a hardware tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityDecision {
    /// Accelerator type taken from the selected hardware, never from the
    /// model's preference
    pub effective_gpu_type: String,

    /// Accelerator count taken from the selected hardware
    pub effective_gpu_count: u32,

    /// Whether the model can run on the selected hardware at all
    pub supported: bool,

    /// Maximum concurrent model instances this tier supports
    pub max_concurrent_instances: u32,

    /// Whether the requested concurrency fits within the maximum
    pub within_capacity: bool,

    /// Requested concurrency over the maximum, saturated at 1.0
    pub utilization_ratio: f32,
}

/// Check whether a model is compatible with a hardware profile
///
/// An unlisted model (`None`) is always compatible: without preference data
/// no incompatibility can be detected. A listed model is rejected only when
/// it prefers the large accelerator and the hardware is the entry-level
/// tier, which never carries it.
pub fn is_compatible(model: Option<&ModelProfile>, hardware: &HardwareProfile) -> bool {
    match model {
        None => true,
        Some(model) => {
            !(model.preferred_gpu_type == LARGE_ACCELERATOR
                && hardware.name.contains(ENTRY_TIER_MARKER))
        }
    }
}

/// Resolve the capacity decision for a deployment request
///
/// The requested concurrency has no enforced lower bound: a request of zero
/// resolves to a zero utilization ratio and is within capacity.
pub fn resolve_capacity(
    hardware: &HardwareProfile,
    model: Option<&ModelProfile>,
    requested_concurrency: u32,
) -> CapacityDecision {
    let max_concurrent_instances = hardware.gpu_count.saturating_mul(INSTANCES_PER_GPU);

    // Profile construction validates a positive GPU count, but profiles can
    // also arrive through deserialization; guard the division.
    let (utilization_ratio, within_capacity) = if max_concurrent_instances == 0 {
        (1.0, requested_concurrency == 0)
    } else {
        let ratio = requested_concurrency as f64 / max_concurrent_instances as f64;
        (
            ratio.clamp(0.0, 1.0) as f32,
            requested_concurrency <= max_concurrent_instances,
        )
    };

    CapacityDecision {
        effective_gpu_type: hardware.gpu_type.clone(),
        effective_gpu_count: hardware.gpu_count,
        supported: is_compatible(model, hardware),
        max_concurrent_instances,
        within_capacity,
        utilization_ratio,
    }
}

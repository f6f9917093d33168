//! Deployment planning command

use crate::output::{format_percentage, Formattable, OutputFormat, OutputFormatter};
use anyhow::Result;
use raim_core::{resolve_capacity, CapacityDecision, HardwareProfile, RaimConfig};
use tracing::debug;

/// Resolve and print the capacity decision for a deployment request
pub fn plan(
    config: &RaimConfig,
    hardware_arg: &str,
    model_name: Option<&str>,
    concurrency: u32,
    output_format: OutputFormat,
) -> Result<()> {
    let formatter = OutputFormatter::new(output_format);

    let hardware = select_hardware(config, hardware_arg)?;
    debug!(tier = %hardware, "selected hardware");

    let model = model_name.and_then(|name| config.models.lookup(name));
    if let Some(name) = model_name {
        if model.is_none() {
            formatter.print_info(&format!(
                "model '{}' is not in the catalog; deploying without preference data",
                name
            ))?;
        }
    }

    let decision = resolve_capacity(&hardware, model, concurrency);
    formatter.print_item(&decision)?;

    if !decision.supported {
        formatter.print_error(&format!(
            "model '{}' requires {} accelerators and cannot run on '{}'",
            model_name.unwrap_or("unknown"),
            model.map(|m| m.preferred_gpu_type.as_str()).unwrap_or("?"),
            hardware.name
        ))?;
    } else if !decision.within_capacity {
        formatter.print_warning(&format!(
            "requested {} instances exceeds the tier maximum of {}",
            concurrency, decision.max_concurrent_instances
        ))?;
    } else {
        formatter.print_success(&format!(
            "{} instances fit on '{}' ({} utilization)",
            concurrency,
            hardware.name,
            format_percentage(decision.utilization_ratio)
        ))?;
    }

    Ok(())
}

/// Resolve the hardware argument against the configured tiers, falling back
/// to parsing it as a canonical label
pub fn select_hardware(config: &RaimConfig, arg: &str) -> Result<HardwareProfile> {
    if let Some(tier) = config.find_hardware(arg) {
        return Ok(tier.clone());
    }
    Ok(HardwareProfile::parse_label(arg)?)
}

impl Formattable for CapacityDecision {
    fn table_headers() -> Vec<String> {
        vec![
            "GPU Type".to_string(),
            "GPU Count".to_string(),
            "Supported".to_string(),
            "Max Instances".to_string(),
            "Within Capacity".to_string(),
            "Utilization".to_string(),
        ]
    }

    fn table_row(&self) -> Vec<String> {
        vec![
            self.effective_gpu_type.clone(),
            self.effective_gpu_count.to_string(),
            self.supported.to_string(),
            self.max_concurrent_instances.to_string(),
            self.within_capacity.to_string(),
            format_percentage(self.utilization_ratio),
        ]
    }

    fn key_value_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("GPU Type".to_string(), self.effective_gpu_type.clone()),
            ("GPU Count".to_string(), self.effective_gpu_count.to_string()),
            ("Supported".to_string(), self.supported.to_string()),
            (
                "Max Instances".to_string(),
                self.max_concurrent_instances.to_string(),
            ),
            (
                "Within Capacity".to_string(),
                self.within_capacity.to_string(),
            ),
            (
                "Utilization".to_string(),
                format_percentage(self.utilization_ratio),
            ),
        ]
    }
}

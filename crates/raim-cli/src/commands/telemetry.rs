//! Simulated telemetry command
//!
//! All readings here are synthetic; see the raim-sim crate docs.

use crate::commands::plan::select_hardware;
use crate::output::{Formattable, OutputFormat, OutputFormatter};
use anyhow::Result;
use raim_core::RaimConfig;
use raim_sim::{NodeStatus, NodeTelemetry, TelemetrySimulator};

/// Sample and print simulated node telemetry
pub fn show_telemetry(
    config: &RaimConfig,
    hardware_arg: &str,
    offline: bool,
    seed: Option<u64>,
    samples: u32,
    output_format: OutputFormat,
) -> Result<()> {
    let formatter = OutputFormatter::new(output_format);
    let hardware = select_hardware(config, hardware_arg)?;

    let mut simulator = match seed {
        Some(seed) => TelemetrySimulator::with_seed(&hardware, seed),
        None => TelemetrySimulator::new(&hardware),
    };
    simulator.set_offline(offline);

    let mut readings = Vec::new();
    for _ in 0..samples {
        match simulator.sample() {
            NodeStatus::Online { telemetry } => readings.push(telemetry),
            NodeStatus::Offline => {
                formatter.print_error("Node is currently offline. Telemetry paused.")?;
                return Ok(());
            }
        }
    }

    formatter.print_list(&readings)?;
    formatter.print_info("Simulated readings; no real hardware is involved")?;
    Ok(())
}

impl Formattable for NodeTelemetry {
    fn table_headers() -> Vec<String> {
        vec![
            "GPU Temp (°C)".to_string(),
            "Fan (%)".to_string(),
            "Power (W)".to_string(),
            "Disk (%)".to_string(),
            "CPU (%)".to_string(),
            "Memory (GB)".to_string(),
            "Latency (ms)".to_string(),
        ]
    }

    fn table_row(&self) -> Vec<String> {
        vec![
            format!("{:.1}", self.gpu_temperature_c),
            format!("{:.0}", self.fan_speed_percent),
            format!("{:.0}", self.power_watts),
            format!("{:.0}", self.disk_usage_percent),
            format!("{:.1}", self.cpu_load_percent),
            format!("{:.1} / {:.1}", self.memory_used_gb, self.memory_total_gb),
            format!("{:.1}", self.request_latency_ms),
        ]
    }

    fn key_value_pairs(&self) -> Vec<(String, String)> {
        vec![
            (
                "GPU Temperature (°C)".to_string(),
                format!("{:.1}", self.gpu_temperature_c),
            ),
            (
                "Fan Speed (%)".to_string(),
                format!("{:.0}", self.fan_speed_percent),
            ),
            (
                "Power Usage (W)".to_string(),
                format!("{:.0}", self.power_watts),
            ),
            (
                "Disk Usage (%)".to_string(),
                format!("{:.0}", self.disk_usage_percent),
            ),
            (
                "CPU Load (%)".to_string(),
                format!("{:.1}", self.cpu_load_percent),
            ),
            (
                "Memory Usage".to_string(),
                format!("{:.1} GB / {:.1} GB", self.memory_used_gb, self.memory_total_gb),
            ),
            (
                "Latency (ms)".to_string(),
                format!("{:.1}", self.request_latency_ms),
            ),
            ("Sampled At".to_string(), self.sampled_at.to_rfc3339()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_telemetry_online() {
        let config = RaimConfig::default();
        for format in [
            OutputFormat::Table,
            OutputFormat::Json,
            OutputFormat::Yaml,
            OutputFormat::Text,
        ] {
            show_telemetry(&config, "RedBox One", false, Some(7), 3, format).unwrap();
        }
    }

    #[test]
    fn test_show_telemetry_offline() {
        let config = RaimConfig::default();
        show_telemetry(&config, "RedBox One", true, Some(7), 3, OutputFormat::Text).unwrap();
    }
}

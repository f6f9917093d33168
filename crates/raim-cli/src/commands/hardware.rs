//! Hardware tier listing command

use crate::output::{Formattable, OutputFormat, OutputFormatter};
use anyhow::Result;
use raim_core::{HardwareProfile, RaimConfig};

/// List the configured hardware tiers
pub fn list_hardware(config: &RaimConfig, output_format: OutputFormat) -> Result<()> {
    let formatter = OutputFormatter::new(output_format);
    formatter.print_list(&config.hardware)
}

impl Formattable for HardwareProfile {
    fn table_headers() -> Vec<String> {
        vec![
            "Tier".to_string(),
            "GPU Type".to_string(),
            "GPU Count".to_string(),
            "Label".to_string(),
        ]
    }

    fn table_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.gpu_type.clone(),
            self.gpu_count.to_string(),
            self.label(),
        ]
    }

    fn key_value_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("Tier".to_string(), self.name.clone()),
            ("GPU Type".to_string(), self.gpu_type.clone()),
            ("GPU Count".to_string(), self.gpu_count.to_string()),
            ("Label".to_string(), self.label()),
        ]
    }
}

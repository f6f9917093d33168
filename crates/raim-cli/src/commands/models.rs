//! Model catalog listing command

use crate::output::{Formattable, OutputFormat, OutputFormatter};
use anyhow::Result;
use raim_core::{ModelProfile, RaimConfig};

/// List the model catalog with preference data
pub fn list_models(config: &RaimConfig, output_format: OutputFormat) -> Result<()> {
    let formatter = OutputFormatter::new(output_format);
    let profiles: Vec<ModelProfile> = config.models.profiles().into_iter().cloned().collect();
    formatter.print_list(&profiles)
}

impl Formattable for ModelProfile {
    fn table_headers() -> Vec<String> {
        vec![
            "Model".to_string(),
            "Preferred GPU".to_string(),
            "Preferred Count".to_string(),
            "Max Context".to_string(),
        ]
    }

    fn table_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.preferred_gpu_type.clone(),
            self.preferred_gpu_count.to_string(),
            self.max_context_tokens
                .map(|t| t.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]
    }

    fn key_value_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("Model".to_string(), self.name.clone()),
            (
                "Preferred GPU".to_string(),
                self.preferred_gpu_type.clone(),
            ),
            (
                "Preferred Count".to_string(),
                self.preferred_gpu_count.to_string(),
            ),
            (
                "Max Context".to_string(),
                self.max_context_tokens
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_models_runs_for_all_formats() {
        let config = RaimConfig::default();
        for format in [
            OutputFormat::Table,
            OutputFormat::Json,
            OutputFormat::Yaml,
            OutputFormat::Text,
        ] {
            list_models(&config, format).unwrap();
        }
    }

    #[test]
    fn test_model_row_marks_missing_context() {
        let profile = ModelProfile::new("CustomVision", "L40S", 1);
        assert_eq!(profile.table_row()[3], "-");
    }
}

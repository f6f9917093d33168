//! Configuration management for RAIM
//!
//! Provides a unified configuration system that supports YAML files and
//! environment variable overrides. The configuration carries the hardware
//! tier set and the model catalog, replacing the ambient tables the demo
//! used, so the resolver always works from one explicit object.

use crate::{HardwareProfile, ModelCatalog, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level RAIM configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaimConfig {
    /// Deployable hardware tiers
    pub hardware: Vec<HardwareProfile>,

    /// Known model preference data
    pub models: ModelCatalog,
}

impl RaimConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest)
    /// 2. Configuration file
    /// 3. Built-in catalogs (lowest)
    pub fn load() -> Result<Self> {
        let mut builder = config::Config::builder();

        // Start with the built-in catalogs
        builder = builder.add_source(config::Config::try_from(&Self::default())?);

        // Add configuration file if it exists
        if let Ok(config_path) = std::env::var("RAIM_CONFIG") {
            builder = builder.add_source(config::File::with_name(&config_path).required(false));
        } else {
            for path in &["./raim.yaml", "/etc/raim/config.yaml"] {
                builder = builder.add_source(config::File::with_name(path).required(false));
            }
        }

        // Add environment variables with RAIM_ prefix
        builder = builder.add_source(
            config::Environment::with_prefix("RAIM")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let parsed: Self = config.try_deserialize()?;
        parsed.validate()?;

        Ok(parsed)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let builder = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            .add_source(config::File::from(path));

        let config = builder.build()?;
        let parsed: Self = config.try_deserialize()?;
        parsed.validate()?;

        Ok(parsed)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.hardware.is_empty() {
            return Err(crate::Error::config(
                "at least one hardware tier must be configured",
            ));
        }

        for tier in &self.hardware {
            if tier.gpu_count == 0 {
                return Err(crate::Error::config(format!(
                    "hardware tier '{}' has a zero GPU count",
                    tier.name
                )));
            }
        }

        Ok(())
    }

    /// Find a hardware tier by name or canonical label
    pub fn find_hardware(&self, name: &str) -> Option<&HardwareProfile> {
        self.hardware
            .iter()
            .find(|tier| tier.name == name || tier.label() == name)
    }
}

impl Default for RaimConfig {
    fn default() -> Self {
        Self {
            hardware: HardwareProfile::builtin_tiers(),
            models: ModelCatalog::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = RaimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.hardware.len(), 3);
        assert!(!config.models.is_empty());
    }

    #[test]
    fn test_validate_rejects_empty_hardware() {
        let config = RaimConfig {
            hardware: Vec::new(),
            models: ModelCatalog::new(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_gpu_tier() {
        let config = RaimConfig {
            hardware: vec![HardwareProfile {
                name: "RedBox Broken".to_string(),
                gpu_type: "L40S".to_string(),
                gpu_count: 0,
            }],
            models: ModelCatalog::new(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_find_hardware_by_name_or_label() {
        let config = RaimConfig::default();

        let by_name = config.find_hardware("RedBox Max").unwrap();
        assert_eq!(by_name.gpu_type, "H100");

        let by_label = config.find_hardware("RedBox Max - 64x H100").unwrap();
        assert_eq!(by_label, by_name);

        assert!(config.find_hardware("RedBox Galactic").is_none());
    }

    #[test]
    fn test_load_from_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "hardware:\n  - name: RedBox Lab\n    gpu_type: L40S\n    gpu_count: 2\nmodels:\n  - name: Phi-2\n    preferred_gpu_type: L40S\n    preferred_gpu_count: 1"
        )
        .unwrap();

        let config = RaimConfig::load_from_file(file.path()).unwrap();
        let lab = config.find_hardware("RedBox Lab").unwrap();
        assert_eq!(lab.gpu_count, 2);
        assert!(config.models.lookup("Phi-2").is_some());
    }
}

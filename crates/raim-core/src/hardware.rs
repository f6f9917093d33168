//! Hardware profiles for RedBox appliance tiers
//!
//! A hardware profile identifies a deployable node configuration: a tier
//! name plus the accelerator type and count it carries. Profiles come from
//! the built-in tier set or from configuration; operators never construct
//! them ad hoc.
//!
//! The canonical display label has the form `"<Name> - <count>x <type>"`
//! (e.g. `"RedBox Max - 64x H100 SXM"`). The label format is a versioned
//! contract: [`HardwareProfile::parse_label`] is the single place that
//! derives GPU type and count from it.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A deployable RedBox node configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareProfile {
    /// Display name of the tier (e.g. "RedBox Max")
    pub name: String,

    /// Accelerator identifier (e.g. "L40S", "H100")
    pub gpu_type: String,

    /// Number of accelerators provisioned on this tier
    pub gpu_count: u32,
}

impl HardwareProfile {
    /// Create a new hardware profile
    ///
    /// Fails with a configuration error if `gpu_count` is zero.
    pub fn new(
        name: impl Into<String>,
        gpu_type: impl Into<String>,
        gpu_count: u32,
    ) -> Result<Self> {
        let name = name.into();
        if gpu_count == 0 {
            return Err(Error::config(format!(
                "hardware profile '{}' must have a positive GPU count",
                name
            )));
        }
        Ok(Self {
            name,
            gpu_type: gpu_type.into(),
            gpu_count,
        })
    }

    /// Parse a canonical configuration label into a hardware profile
    ///
    /// The trailing segment after the last hyphen must have the shape
    /// `"<count>x <type>"`, where `<count>` is a positive integer. Any
    /// descriptive suffix after the type token (e.g. "SXM") is ignored.
    ///
    /// ```
    /// use raim_core::HardwareProfile;
    ///
    /// let hw = HardwareProfile::parse_label("RedBox Max - 64x H100 SXM").unwrap();
    /// assert_eq!(hw.gpu_type, "H100");
    /// assert_eq!(hw.gpu_count, 64);
    /// ```
    pub fn parse_label(label: &str) -> Result<Self> {
        let (name, spec) = label.rsplit_once('-').ok_or_else(|| {
            Error::parse(format!(
                "hardware label '{}' has no '-' separated spec segment",
                label
            ))
        })?;

        let spec = spec.trim();
        let mut tokens = spec.split_whitespace();
        let count_token = tokens.next().ok_or_else(|| {
            Error::parse(format!("hardware label '{}' has an empty spec segment", label))
        })?;

        let (count_str, after) = count_token.split_once('x').ok_or_else(|| {
            Error::parse(format!(
                "hardware label '{}' spec segment must match '<count>x <type>'",
                label
            ))
        })?;

        let gpu_count: u32 = count_str.parse().map_err(|e: std::num::ParseIntError| {
            match e.kind() {
                std::num::IntErrorKind::PosOverflow => Error::parse(format!(
                    "hardware label '{}' has a GPU count '{}' outside the supported range",
                    label, count_str
                )),
                _ => Error::parse(format!(
                    "hardware label '{}' has a non-numeric GPU count '{}'",
                    label, count_str
                )),
            }
        })?;
        if gpu_count == 0 {
            return Err(Error::parse(format!(
                "hardware label '{}' has a zero GPU count",
                label
            )));
        }

        // Accept both "64x H100" and the compact "64xH100" form
        let gpu_type = if after.is_empty() {
            tokens.next().ok_or_else(|| {
                Error::parse(format!(
                    "hardware label '{}' has no GPU type after the count",
                    label
                ))
            })?
        } else {
            after
        };

        Ok(Self {
            name: name.trim().to_string(),
            gpu_type: gpu_type.to_string(),
            gpu_count,
        })
    }

    /// The built-in RedBox appliance tiers
    pub fn builtin_tiers() -> Vec<HardwareProfile> {
        vec![
            HardwareProfile {
                name: "RedBox One".to_string(),
                gpu_type: "L40S".to_string(),
                gpu_count: 8,
            },
            HardwareProfile {
                name: "RedBox Pro".to_string(),
                gpu_type: "L40S".to_string(),
                gpu_count: 16,
            },
            HardwareProfile {
                name: "RedBox Max".to_string(),
                gpu_type: "H100".to_string(),
                gpu_count: 64,
            },
        ]
    }

    /// Canonical label for this profile
    pub fn label(&self) -> String {
        format!("{} - {}x {}", self.name, self.gpu_count, self.gpu_type)
    }
}

impl fmt::Display for HardwareProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_gpu_count() {
        let hw = HardwareProfile::new("RedBox One", "L40S", 8).unwrap();
        assert_eq!(hw.gpu_count, 8);

        let err = HardwareProfile::new("RedBox Zero", "L40S", 0).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_parse_label() {
        let hw = HardwareProfile::parse_label("RedBox Max - 64x H100 SXM").unwrap();
        assert_eq!(hw.name, "RedBox Max");
        assert_eq!(hw.gpu_type, "H100");
        assert_eq!(hw.gpu_count, 64);

        let hw = HardwareProfile::parse_label("RedBox One - 8x L40S").unwrap();
        assert_eq!(hw.name, "RedBox One");
        assert_eq!(hw.gpu_type, "L40S");
        assert_eq!(hw.gpu_count, 8);
    }

    #[test]
    fn test_parse_label_compact_form() {
        let hw = HardwareProfile::parse_label("RedBox Pro - 16xL40S").unwrap();
        assert_eq!(hw.gpu_type, "L40S");
        assert_eq!(hw.gpu_count, 16);
    }

    #[test]
    fn test_parse_label_rejects_malformed() {
        assert!(HardwareProfile::parse_label("Bogus Label").is_err());
        assert!(HardwareProfile::parse_label("RedBox - many GPUs").is_err());
        assert!(HardwareProfile::parse_label("RedBox - x H100").is_err());
        assert!(HardwareProfile::parse_label("RedBox - 0x H100").is_err());
        assert!(HardwareProfile::parse_label("RedBox - 8x").is_err());
        assert!(HardwareProfile::parse_label("RedBox -").is_err());
    }

    #[test]
    fn test_parse_label_distinguishes_out_of_range_count() {
        let err = HardwareProfile::parse_label("RedBox Giant - 99999999999x H100").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.to_string().contains("outside the supported range"));

        let err = HardwareProfile::parse_label("RedBox - manyx H100").unwrap_err();
        assert!(err.to_string().contains("non-numeric"));
    }

    #[test]
    fn test_parse_errors_are_parse_variant() {
        let err = HardwareProfile::parse_label("Bogus Label").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_label_round_trip() {
        for tier in HardwareProfile::builtin_tiers() {
            let reparsed = HardwareProfile::parse_label(&tier.label()).unwrap();
            assert_eq!(reparsed, tier);
        }
    }

    #[test]
    fn test_display_matches_label() {
        let hw = HardwareProfile::new("RedBox Max", "H100", 64).unwrap();
        assert_eq!(hw.to_string(), "RedBox Max - 64x H100");
    }

    #[test]
    fn test_builtin_tiers_are_valid() {
        let tiers = HardwareProfile::builtin_tiers();
        assert_eq!(tiers.len(), 3);
        assert!(tiers.iter().all(|t| t.gpu_count > 0));
    }
}

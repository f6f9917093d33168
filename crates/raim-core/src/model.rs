//! Model profiles and the static model catalog
//!
//! A model profile records the GPU tuple a model prefers when deployed on a
//! RedBox. The catalog is the source of truth for that mapping; models not
//! present in it are "unlisted" and carry no preference data, which is a
//! valid state rather than an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Deployment preference data for a known model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelProfile {
    /// Model name as shown to operators (e.g. "LLaMA 3 70B")
    pub name: String,

    /// Accelerator type this model is tuned for
    pub preferred_gpu_type: String,

    /// Number of accelerators this model is tuned for
    pub preferred_gpu_count: u32,

    /// Maximum context window in tokens, where known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_context_tokens: Option<u32>,
}

impl ModelProfile {
    /// Create a new model profile without context-length data
    pub fn new(
        name: impl Into<String>,
        preferred_gpu_type: impl Into<String>,
        preferred_gpu_count: u32,
    ) -> Self {
        Self {
            name: name.into(),
            preferred_gpu_type: preferred_gpu_type.into(),
            preferred_gpu_count,
            max_context_tokens: None,
        }
    }

    /// Set the maximum context window
    pub fn with_max_context_tokens(mut self, tokens: u32) -> Self {
        self.max_context_tokens = Some(tokens);
        self
    }
}

/// Static mapping from model name to its deployment preferences
///
/// Serializes as a list of profiles; the name-keyed index is rebuilt on
/// deserialization. Configuration layers lowercase map keys, so model names
/// must live inside the values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCatalog {
    models: HashMap<String, ModelProfile>,
}

impl Serialize for ModelCatalog {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.profiles())
    }
}

impl<'de> Deserialize<'de> for ModelCatalog {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let profiles = Vec::<ModelProfile>::deserialize(deserializer)?;
        let mut catalog = ModelCatalog::new();
        for profile in profiles {
            catalog.insert(profile);
        }
        Ok(catalog)
    }
}

impl ModelCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            models: HashMap::new(),
        }
    }

    /// The built-in demo catalog of open-source models
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        let profiles = vec![
            ModelProfile::new("LLaMA 2 7B", "L40S", 1).with_max_context_tokens(4096),
            ModelProfile::new("LLaMA 2 13B", "L40S", 2).with_max_context_tokens(4096),
            ModelProfile::new("LLaMA 3 8B", "L40S", 1).with_max_context_tokens(8192),
            ModelProfile::new("LLaMA 3 70B", "H100", 8).with_max_context_tokens(8192),
            ModelProfile::new("Mistral 7B", "L40S", 1).with_max_context_tokens(32768),
            ModelProfile::new("Mixtral 8x7B", "H100", 4).with_max_context_tokens(32768),
            ModelProfile::new("Falcon 7B", "L40S", 1).with_max_context_tokens(2048),
            ModelProfile::new("Falcon 40B", "H100", 4).with_max_context_tokens(2048),
            ModelProfile::new("Phi-2", "L40S", 1).with_max_context_tokens(2048),
            ModelProfile::new("Command R", "H100", 2).with_max_context_tokens(131072),
            ModelProfile::new("OpenChat", "L40S", 1).with_max_context_tokens(8192),
            ModelProfile::new("Gemma 2B", "L40S", 1).with_max_context_tokens(8192),
            ModelProfile::new("Gemma 7B", "L40S", 1).with_max_context_tokens(8192),
            // Vision model; context length does not apply
            ModelProfile::new("CustomVision", "L40S", 1),
        ];
        for profile in profiles {
            catalog.insert(profile);
        }
        catalog
    }

    /// Add or replace a model profile, keyed by its name
    pub fn insert(&mut self, profile: ModelProfile) {
        self.models.insert(profile.name.clone(), profile);
    }

    /// Look up a model by name
    ///
    /// Absence is not an error: an unknown name is a valid "unlisted" model.
    pub fn lookup(&self, name: &str) -> Option<&ModelProfile> {
        self.models.get(name)
    }

    /// Model names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.models.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Profiles in name order
    pub fn profiles(&self) -> Vec<&ModelProfile> {
        let mut profiles: Vec<&ModelProfile> = self.models.values().collect();
        profiles.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        profiles
    }

    /// Number of models in the catalog
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Check whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// Resolver configuration - serde types and file-format loaders

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::mapping::MappingEntry;

/// Capability required of resolved classes when none is configured.
pub const DEFAULT_CAPABILITY: &str = "handler";

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to parse resolver config from JSON")]
    Json(#[source] serde_json::Error),
    #[error("failed to parse resolver config from YAML")]
    Yaml(#[source] serde_yaml::Error),
}

/// Configuration handed to [`HandlerResolver::new`](crate::HandlerResolver::new).
///
/// The wildcard rule is always present in the compiled table; `mapping` only
/// lists overrides and additions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Capability every resolved class must satisfy.
    #[serde(default = "default_capability")]
    pub capability: String,
    /// Ordered mapping declarations, applied on top of the default rules.
    #[serde(default)]
    pub mapping: Vec<MappingEntry>,
}

fn default_capability() -> String {
    DEFAULT_CAPABILITY.to_string()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            capability: default_capability(),
            mapping: Vec::new(),
        }
    }
}

impl ResolverConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigLoadError> {
        serde_json::from_str(raw).map_err(ConfigLoadError::Json)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(raw).map_err(ConfigLoadError::Yaml)
    }
}

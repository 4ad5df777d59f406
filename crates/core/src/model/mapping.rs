use serde::{Deserialize, Serialize};

/// Mapping declaration for one module, as written in configuration.
///
/// Either a compact mask string encoding prefix, module template, and class
/// template in one piece, or the three parts spelled out explicitly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum MappingSpec {
    Mask(String),
    Parts(Vec<String>),
}

impl MappingSpec {
    pub fn mask(mask: impl Into<String>) -> Self {
        Self::Mask(mask.into())
    }

    pub fn parts<S: Into<String>>(parts: impl IntoIterator<Item = S>) -> Self {
        Self::Parts(parts.into_iter().map(Into::into).collect())
    }
}

/// One `(module, spec)` pair. Entries are kept in a list rather than a map
/// because registration order drives unformat rule precedence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MappingEntry {
    pub module: String,
    pub mask: MappingSpec,
}

impl MappingEntry {
    pub fn new(module: impl Into<String>, mask: MappingSpec) -> Self {
        Self {
            module: module.into(),
            mask,
        }
    }
}

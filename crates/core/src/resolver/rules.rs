// Mapping rule compilation and storage
// Compiles configuration masks into (prefix, module template, class template)
// triples and keeps them in registration order.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::model::mapping::{MappingEntry, MappingSpec};

/// Separator between namespace levels in fully-qualified class names.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Separator between path segments in symbolic names.
pub const SEGMENT_SEPARATOR: char = ':';

/// Module key of the fallback rule; always present in a [`RuleTable`].
pub const WILDCARD_MODULE: &str = "*";

/// Shape of a compact mask string: optional absolute prefix, optional middle
/// part with one placeholder, mandatory final part with one placeholder.
static MASK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\\?([\w\\]*\\)?(\w*\*\w*?\\)?([\w\\]*\*\w*)$").expect("invalid mask regex")
});

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid mapping mask \"{mask}\"")]
    InvalidMask { mask: String },

    #[error("invalid mapping for module \"{module}\": expected a mask string or 3 parts, got {found}")]
    InvalidPartCount { module: String, found: usize },

    #[error("invalid mapping for module \"{module}\": prefix \"{prefix}\" must not contain a placeholder")]
    PlaceholderInPrefix { module: String, prefix: String },

    #[error("invalid mapping for module \"{module}\": {slot} template \"{template}\" must contain exactly one placeholder")]
    PlaceholderCount {
        module: String,
        slot: &'static str,
        template: String,
    },
}

/// Compiled rewriting rule for one module key.
///
/// `prefix` is empty or ends with the separator, `module_template` always
/// ends with the separator, and both templates carry exactly one `*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingRule {
    pub prefix: String,
    pub module_template: String,
    pub class_template: String,
}

impl MappingRule {
    fn from_mask(module: &str, mask: &str) -> Result<Self, ConfigError> {
        let captures = MASK_PATTERN
            .captures(mask)
            .ok_or_else(|| ConfigError::InvalidMask {
                mask: mask.to_string(),
            })?;

        let module_template = match captures.get(2) {
            Some(found) if !found.as_str().is_empty() => found.as_str().to_string(),
            _ => format!("*Module{}", NAMESPACE_SEPARATOR),
        };
        let rule = Self {
            prefix: captures.get(1).map_or("", |m| m.as_str()).to_string(),
            module_template,
            class_template: captures[3].to_string(),
        };
        rule.validate(module)?;
        Ok(rule)
    }

    fn from_parts(module: &str, parts: &[String]) -> Result<Self, ConfigError> {
        if parts.len() != 3 {
            return Err(ConfigError::InvalidPartCount {
                module: module.to_string(),
                found: parts.len(),
            });
        }

        let prefix = if parts[0].is_empty() {
            String::new()
        } else {
            format!("{}{}", parts[0], NAMESPACE_SEPARATOR)
        };
        let rule = Self {
            prefix,
            module_template: format!("{}{}", parts[1], NAMESPACE_SEPARATOR),
            class_template: parts[2].clone(),
        };
        rule.validate(module)?;
        Ok(rule)
    }

    fn validate(&self, module: &str) -> Result<(), ConfigError> {
        if self.prefix.contains('*') {
            return Err(ConfigError::PlaceholderInPrefix {
                module: module.to_string(),
                prefix: self.prefix.clone(),
            });
        }
        for (slot, template) in [
            ("module", &self.module_template),
            ("class", &self.class_template),
        ] {
            if template.matches('*').count() != 1 {
                return Err(ConfigError::PlaceholderCount {
                    module: module.to_string(),
                    slot,
                    template: template.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Ordered collection of compiled mapping rules.
///
/// The wildcard rule is seeded at construction and can only be overwritten,
/// never removed, so format always has a fallback.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<(String, MappingRule)>,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self {
            rules: vec![(
                WILDCARD_MODULE.to_string(),
                MappingRule {
                    prefix: String::new(),
                    module_template: format!("*Module{}", NAMESPACE_SEPARATOR),
                    class_template: "*Controller".to_string(),
                },
            )],
        }
    }
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles and inserts the given entries, overwriting rules that share a
    /// module key. Fails on the first malformed entry, leaving earlier
    /// entries applied; callers should treat any error as fatal to startup.
    pub fn set_mapping<I>(&mut self, entries: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = MappingEntry>,
    {
        for entry in entries {
            let rule = match &entry.mask {
                MappingSpec::Mask(mask) => MappingRule::from_mask(&entry.module, mask)?,
                MappingSpec::Parts(parts) => MappingRule::from_parts(&entry.module, parts)?,
            };
            self.insert(entry.module, rule);
        }
        Ok(())
    }

    fn insert(&mut self, module: String, rule: MappingRule) {
        match self.rules.iter_mut().find(|(key, _)| *key == module) {
            Some((_, existing)) => *existing = rule,
            None => self.rules.push((module, rule)),
        }
    }

    pub fn get(&self, module: &str) -> Option<&MappingRule> {
        self.rules
            .iter()
            .find(|(key, _)| key == module)
            .map(|(_, rule)| rule)
    }

    pub fn wildcard(&self) -> &MappingRule {
        self.get(WILDCARD_MODULE)
            .expect("wildcard rule is seeded at construction")
    }

    /// Rules in registration order, wildcard first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MappingRule)> {
        self.rules.iter().map(|(key, rule)| (key.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

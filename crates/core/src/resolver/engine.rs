// Resolver engine - the public resolve/create contract: name validation,
// candidate formatting, registry checks, caching, and case correction.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ResolverConfig;
use crate::model::factory::{HandlerFactory, InstantiationError};
use crate::model::mapping::MappingEntry;
use crate::model::type_registry::TypeRegistry;
use crate::resolver::formatter::{format_class, is_valid_name};
use crate::resolver::rules::{ConfigError, RuleTable};
use crate::resolver::unformatter::unformat_class;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("handler name must be an alphanumeric string, \"{name}\" is invalid")]
    InvalidName { name: String },

    #[error("cannot load handler \"{name}\": class \"{class}\" was not found")]
    ClassNotFound { name: String, class: String },

    #[error(
        "cannot load handler \"{name}\": class \"{class}\" does not provide the \"{capability}\" capability"
    )]
    MissingCapability {
        name: String,
        class: String,
        capability: String,
    },

    #[error("cannot load handler \"{name}\": class \"{class}\" is abstract")]
    AbstractClass { name: String, class: String },

    #[error(transparent)]
    Instantiation(#[from] InstantiationError),
}

/// Successful resolution of a symbolic name.
///
/// Replaces the original's in-place correction of the caller's string: the
/// canonical name and the optional correction record travel in the result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resolution {
    /// Fully-qualified class name.
    pub class: String,
    /// Canonical symbolic name; differs from the input only in casing.
    pub name: String,
    /// Present when the supplied name needed a case correction.
    #[serde(default)]
    pub correction: Option<NameCorrection>,
}

/// Advisory record of a caller-supplied name whose casing was corrected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NameCorrection {
    pub supplied: String,
    pub canonical: String,
}

/// Caching name-to-class resolver.
///
/// Owns the compiled rule table, the name cache, and the two host
/// capabilities. Rules are meant to be configured fully before serving;
/// `set_mapping` takes `&mut self`, which keeps later mutation serialized
/// against concurrent `resolve` calls.
pub struct HandlerResolver<R, F> {
    rules: RuleTable,
    cache: RwLock<HashMap<String, String>>,
    capability: String,
    registry: R,
    factory: F,
}

impl<R, F> HandlerResolver<R, F>
where
    R: TypeRegistry,
    F: HandlerFactory,
{
    pub fn new(config: ResolverConfig, registry: R, factory: F) -> Result<Self, ConfigError> {
        let mut rules = RuleTable::new();
        rules.set_mapping(config.mapping)?;
        Ok(Self {
            rules,
            cache: RwLock::new(HashMap::new()),
            capability: config.capability,
            registry,
            factory,
        })
    }

    /// Inserts or overwrites mapping rules.
    pub fn set_mapping<I>(&mut self, entries: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = MappingEntry>,
    {
        self.rules.set_mapping(entries)
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Resolves a symbolic name to a validated class name.
    ///
    /// Cached names are returned without re-validation. A case mismatch
    /// between the supplied and canonical name is an advisory, not an
    /// error: the resolution succeeds and carries the correction.
    pub fn resolve(&self, name: &str) -> Result<Resolution, ResolveError> {
        if let Some(class) = self.cached(name) {
            debug!(name, class = class.as_str(), "handler class served from cache");
            return Ok(Resolution {
                class,
                name: name.to_string(),
                correction: None,
            });
        }

        if !is_valid_name(name) {
            return Err(ResolveError::InvalidName {
                name: name.to_string(),
            });
        }

        let candidate = format_class(name, &self.rules);

        let class = self
            .registry
            .lookup(&candidate)
            .ok_or_else(|| ResolveError::ClassNotFound {
                name: name.to_string(),
                class: candidate.clone(),
            })?;

        if !self.registry.satisfies_capability(&class, &self.capability) {
            return Err(ResolveError::MissingCapability {
                name: name.to_string(),
                class,
                capability: self.capability.clone(),
            });
        }
        if self.registry.is_abstract(&class) {
            return Err(ResolveError::AbstractClass {
                name: name.to_string(),
                class,
            });
        }

        // Keyed by the raw supplied name: a later call with the same
        // miscased name is a cache hit and skips re-validation.
        self.store(name, &class);

        let canonical = match unformat_class(&class, &self.rules) {
            Some(canonical) => canonical,
            None => name.to_string(),
        };
        let correction = if canonical != name {
            warn!(
                supplied = name,
                canonical = canonical.as_str(),
                "case mismatch on handler name"
            );
            Some(NameCorrection {
                supplied: name.to_string(),
                canonical: canonical.clone(),
            })
        } else {
            None
        };

        Ok(Resolution {
            class,
            name: canonical,
            correction,
        })
    }

    /// Resolves the name, then delegates construction to the host factory.
    pub fn create_instance(&self, name: &str) -> Result<F::Instance, ResolveError> {
        let resolution = self.resolve(name)?;
        Ok(self.factory.create(&resolution.class)?)
    }

    fn cached(&self, name: &str) -> Option<String> {
        // A poisoned lock still holds a usable map of owned strings.
        let cache = match self.cache.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        cache.get(name).cloned()
    }

    fn store(&self, name: &str, class: &str) {
        let mut cache = match self.cache.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        cache.insert(name.to_string(), class.to_string());
    }
}

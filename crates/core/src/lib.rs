pub mod config;
pub mod model;
pub mod resolver;

pub use config::{ConfigLoadError, ResolverConfig};
pub use model::factory::{HandlerFactory, InstantiationError};
pub use model::mapping::{MappingEntry, MappingSpec};
pub use model::type_registry::TypeRegistry;
pub use resolver::engine::{HandlerResolver, NameCorrection, Resolution, ResolveError};
pub use resolver::rules::{ConfigError, MappingRule, RuleTable};

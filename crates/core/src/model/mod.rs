pub mod factory;
pub mod mapping;
pub mod type_registry;

pub use factory::{HandlerFactory, InstantiationError};
pub use mapping::{MappingEntry, MappingSpec};
pub use type_registry::TypeRegistry;

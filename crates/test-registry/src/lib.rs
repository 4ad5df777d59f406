pub mod factory;
pub mod registry;

pub use factory::{Handler, InMemoryHandlerFactory};
pub use registry::{ClassEntry, InMemoryTypeRegistry};

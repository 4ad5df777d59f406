use namecast_core::{HandlerFactory, InstantiationError};
use std::collections::HashMap;
use std::sync::Mutex;

/// Instance type produced by the test factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handler {
    pub class: String,
    /// Service name the instance came from, when one was registered.
    pub service: Option<String>,
}

/// In-memory handler factory for test scenarios.
///
/// Mirrors the host container contract: a class constructed directly when no
/// service is registered for it, via its service when exactly one is, and an
/// instantiation failure when the registration is ambiguous. Created classes
/// are recorded for assertions.
pub struct InMemoryHandlerFactory {
    services: HashMap<String, Vec<String>>,
    created: Mutex<Vec<String>>,
}

impl InMemoryHandlerFactory {
    pub fn new() -> Self {
        Self {
            services: HashMap::new(),
            created: Mutex::new(Vec::new()),
        }
    }

    /// Register a named service providing the given class
    pub fn add_service(&mut self, class: &str, service: &str) {
        self.services
            .entry(class.to_string())
            .or_default()
            .push(service.to_string());
    }

    /// Classes handed to `create` so far.
    pub fn created_classes(&self) -> Vec<String> {
        self.created
            .lock()
            .map(|created| created.clone())
            .unwrap_or_default()
    }
}

impl Default for InMemoryHandlerFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl HandlerFactory for InMemoryHandlerFactory {
    type Instance = Handler;

    fn create(&self, class: &str) -> Result<Handler, InstantiationError> {
        let services = self.services.get(class).map(Vec::as_slice).unwrap_or(&[]);
        if services.len() > 1 {
            return Err(InstantiationError::new(
                class,
                format!("multiple services found: {}", services.join(", ")),
            ));
        }

        if let Ok(mut created) = self.created.lock() {
            created.push(class.to_string());
        }
        Ok(Handler {
            class: class.to_string(),
            service: services.first().cloned(),
        })
    }
}

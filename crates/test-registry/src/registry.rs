use namecast_core::TypeRegistry;
use std::sync::Mutex;

/// One class as the host runtime would see it.
#[derive(Debug, Clone)]
pub struct ClassEntry {
    pub name: String,
    pub is_abstract: bool,
    pub capabilities: Vec<String>,
}

impl ClassEntry {
    /// Concrete class providing the given capability.
    pub fn concrete(name: &str, capability: &str) -> Self {
        Self {
            name: name.to_string(),
            is_abstract: false,
            capabilities: vec![capability.to_string()],
        }
    }

    /// Abstract class providing the given capability.
    pub fn abstract_class(name: &str, capability: &str) -> Self {
        Self {
            name: name.to_string(),
            is_abstract: true,
            capabilities: vec![capability.to_string()],
        }
    }

    /// Concrete class with no capabilities at all.
    pub fn without_capabilities(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_abstract: false,
            capabilities: Vec::new(),
        }
    }
}

/// In-memory type registry for test scenarios.
///
/// Lookup is case-insensitive and returns the registered casing, matching
/// how the resolver expects the host runtime to behave. Lookup calls are
/// recorded so tests can assert on cache behavior.
pub struct InMemoryTypeRegistry {
    classes: Vec<ClassEntry>,
    lookups: Mutex<Vec<String>>,
}

impl InMemoryTypeRegistry {
    pub fn new() -> Self {
        Self {
            classes: Vec::new(),
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// Add a class to the registry
    pub fn add_class(&mut self, entry: ClassEntry) {
        self.classes.push(entry);
    }

    /// Candidate class names passed to `lookup` so far.
    pub fn recorded_lookups(&self) -> Vec<String> {
        self.lookups
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn lookup_count(&self) -> usize {
        self.recorded_lookups().len()
    }

    fn entry(&self, class: &str) -> Option<&ClassEntry> {
        self.classes
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(class))
    }
}

impl Default for InMemoryTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry for InMemoryTypeRegistry {
    fn lookup(&self, class: &str) -> Option<String> {
        if let Ok(mut calls) = self.lookups.lock() {
            calls.push(class.to_string());
        }
        self.entry(class).map(|entry| entry.name.clone())
    }

    fn satisfies_capability(&self, class: &str, capability: &str) -> bool {
        self.entry(class)
            .is_some_and(|entry| entry.capabilities.iter().any(|c| c == capability))
    }

    fn is_abstract(&self, class: &str) -> bool {
        self.entry(class).is_some_and(|entry| entry.is_abstract)
    }
}

use thiserror::Error;

/// Construction failure reported by the host factory.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot create instance of class \"{class}\": {reason}")]
pub struct InstantiationError {
    pub class: String,
    pub reason: String,
}

impl InstantiationError {
    pub fn new(class: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            reason: reason.into(),
        }
    }
}

/// Host-provided instance construction capability.
///
/// The resolver only hands over a class name it has already validated; how
/// the instance is built (dependency injection included) is opaque to it.
pub trait HandlerFactory {
    type Instance;

    fn create(&self, class: &str) -> Result<Self::Instance, InstantiationError>;
}

//! Name-to-class resolution engine.
//!
//! This module provides mapping-rule compilation, the format/unformat
//! rewriting pair, and the caching resolver that validates candidate classes
//! against the host registry.
//!
//! # Example
//!
//! ```ignore
//! use namecast_core::{HandlerResolver, ResolverConfig};
//!
//! let resolver = HandlerResolver::new(ResolverConfig::default(), registry, factory)?;
//! let resolution = resolver.resolve("Admin:Users")?;
//! assert_eq!(resolution.class, "AdminModule\\UsersController");
//! ```
pub mod engine;
pub mod formatter;
pub mod rules;
pub mod unformatter;

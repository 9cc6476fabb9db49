#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Scheme Registry
//!
//! Process-wide dispatch from a locator's scheme to the handler that resolves it.
//!
//! ## Overview
//!
//! A [`Locator`] such as `mem:settings/theme` names its scheme before the first
//! `:`. The [`SchemeRegistry`] maps that scheme to exactly one handler instance,
//! built on first use from a [`HandlerType`] supplied by a pluggable
//! [`HandlerTypeResolver`]. New schemes are added by registering a handler type,
//! never by touching the registry or the locator.
//!
//! ## Key Features
//!
//! - **Singleton per scheme**: concurrent first lookups all observe one instance
//! - **No lock during construction**: constructors may resolve other schemes
//! - **Strict or lenient lookup**: unknown schemes as errors or as `None`
//! - **Explicit registration**: [`SchemeTypeTable`] instead of reflective discovery
//!
//! ## Module Organization
//!
//! - [`registry`] - Scheme registry, handler contract and handler type resolution
//! - [`locator`] - Locator parsing and dispatch through the registry
//! - [`config`] - Layered configuration
//! - [`logging`] - Structured logging setup
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use scheme_registry::{HandlerType, Locator, SchemeHandler, SchemeRegistry, SchemeTypeTable};
//! use serde_json::{json, Value};
//! use std::sync::Arc;
//!
//! #[derive(Default)]
//! struct EchoScheme;
//!
//! impl SchemeHandler for EchoScheme {
//!     fn resolve(&self, locator: &Locator, _base: Option<&Value>) -> anyhow::Result<Value> {
//!         Ok(json!(locator.body()))
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = Arc::new(SchemeTypeTable::new());
//! table.register("echo", HandlerType::of::<EchoScheme>());
//!
//! let registry = SchemeRegistry::new(table);
//! let value = Locator::parse("echo:hello")?.get(&registry, None)?;
//! assert_eq!(value, json!("hello"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod locator;
pub mod logging;
pub mod registry;

pub use crate::config::RegistryConfig;
pub use crate::error::{ConstructionError, LocatorError, LookupError, Result, SchemeError};
pub use crate::locator::Locator;
pub use crate::registry::{
    HandlerType, HandlerTypeResolver, Scheme, SchemeHandler, SchemeRegistry, SchemeTypeTable,
};

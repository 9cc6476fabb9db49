//! # Handler Type Resolution
//!
//! Maps scheme names to handler type descriptors. The registry consults a
//! [`HandlerTypeResolver`] only on a cache miss and never caches anything here.
//!
//! [`SchemeTypeTable`] is the explicit-registration resolver: bindings are
//! added at startup (or whenever) with [`SchemeTypeTable::register`].
//!
//! ```rust
//! use scheme_registry::registry::{HandlerType, HandlerTypeResolver, SchemeHandler, SchemeTypeTable};
//! use scheme_registry::Locator;
//! use serde_json::Value;
//!
//! #[derive(Default)]
//! struct NullScheme;
//!
//! impl SchemeHandler for NullScheme {
//!     fn resolve(&self, _locator: &Locator, _base: Option<&Value>) -> anyhow::Result<Value> {
//!         Ok(Value::Null)
//!     }
//! }
//!
//! let table = SchemeTypeTable::new();
//! table.register_type::<NullScheme>("null");
//!
//! let found = table.lookup_handler_type("null").unwrap();
//! assert!(found.is_some());
//! ```

use super::handler::SchemeHandler;
use crate::error::{ConstructionError, LookupError};
use dashmap::DashMap;
use std::fmt;
use std::sync::Arc;

type Constructor = dyn Fn() -> anyhow::Result<Box<dyn SchemeHandler>> + Send + Sync;

/// Descriptor for a handler type: its name plus a zero-argument constructor
#[derive(Clone)]
pub struct HandlerType {
    type_name: String,
    constructor: Option<Arc<Constructor>>,
}

impl HandlerType {
    /// Descriptor for a concrete handler built with `Default`
    pub fn of<H>() -> Self
    where
        H: SchemeHandler + Default,
    {
        let constructor: Arc<Constructor> =
            Arc::new(|| -> anyhow::Result<Box<dyn SchemeHandler>> {
                Ok(Box::new(H::default()) as Box<dyn SchemeHandler>)
            });

        Self {
            type_name: std::any::type_name::<H>().to_string(),
            constructor: Some(constructor),
        }
    }

    /// Descriptor backed by an explicit, possibly failing, factory
    pub fn from_fn<F>(type_name: impl Into<String>, constructor: F) -> Self
    where
        F: Fn() -> anyhow::Result<Box<dyn SchemeHandler>> + Send + Sync + 'static,
    {
        let constructor: Arc<Constructor> = Arc::new(constructor);

        Self {
            type_name: type_name.into(),
            constructor: Some(constructor),
        }
    }

    /// Descriptor for a type that cannot be instantiated
    pub fn abstract_type(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            constructor: None,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn is_abstract(&self) -> bool {
        self.constructor.is_none()
    }

    /// Build a fresh handler instance
    pub fn instantiate(&self) -> Result<Box<dyn SchemeHandler>, ConstructionError> {
        let constructor = self
            .constructor
            .as_ref()
            .ok_or_else(|| ConstructionError::Abstract {
                type_name: self.type_name.clone(),
            })?;

        (**constructor)().map_err(|source| ConstructionError::Failed {
            type_name: self.type_name.clone(),
            source,
        })
    }
}

impl fmt::Debug for HandlerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerType")
            .field("type_name", &self.type_name)
            .field("abstract", &self.is_abstract())
            .finish()
    }
}

/// Looks up the handler type bound to a scheme name
///
/// `Ok(None)` and `Err(_)` are both treated as "unknown scheme" by the
/// registry; the error exists for diagnostics only.
pub trait HandlerTypeResolver: Send + Sync {
    fn lookup_handler_type(&self, scheme_name: &str) -> Result<Option<HandlerType>, LookupError>;
}

/// Explicit scheme name to handler type bindings
#[derive(Debug, Default)]
pub struct SchemeTypeTable {
    bindings: DashMap<String, HandlerType>,
}

impl SchemeTypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `scheme_name` to `handler_type`, returning any previous binding
    ///
    /// Rebinding never affects a scheme the registry has already published.
    pub fn register(
        &self,
        scheme_name: impl Into<String>,
        handler_type: HandlerType,
    ) -> Option<HandlerType> {
        let scheme_name = scheme_name.into();
        tracing::debug!(
            scheme_name = %scheme_name,
            type_name = %handler_type.type_name(),
            "Binding scheme handler type"
        );
        self.bindings.insert(scheme_name, handler_type)
    }

    pub fn register_type<H>(&self, scheme_name: impl Into<String>) -> Option<HandlerType>
    where
        H: SchemeHandler + Default,
    {
        self.register(scheme_name, HandlerType::of::<H>())
    }

    pub fn unregister(&self, scheme_name: &str) -> Option<HandlerType> {
        self.bindings.remove(scheme_name).map(|(_, handler_type)| handler_type)
    }

    pub fn contains(&self, scheme_name: &str) -> bool {
        self.bindings.contains_key(scheme_name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl HandlerTypeResolver for SchemeTypeTable {
    fn lookup_handler_type(&self, scheme_name: &str) -> Result<Option<HandlerType>, LookupError> {
        Ok(self
            .bindings
            .get(scheme_name)
            .map(|entry| entry.value().clone()))
    }
}

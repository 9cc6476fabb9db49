//! # Scheme Registry
//!
//! Lazily constructs and caches one [`Scheme`] per scheme name.
//!
//! ## Publishing
//!
//! A lookup takes a read lock to check the cache. On a miss the handler type is
//! looked up and instantiated with no lock held, then the write lock is taken
//! to re-check and publish. If another caller published first, the freshly
//! built instance is dropped and the published one returned. Two racing
//! callers may both construct, but only one instance is ever handed out.
//!
//! Holding no lock during construction lets a handler constructor resolve other
//! schemes through the same registry.
//!
//! ## Usage
//!
//! ```rust
//! use scheme_registry::registry::{SchemeHandler, SchemeRegistry, SchemeTypeTable};
//! use scheme_registry::Locator;
//! use serde_json::Value;
//! use std::sync::Arc;
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
//! let table = Arc::new(SchemeTypeTable::new());
//! table.register_type::<NullScheme>("null");
//! let registry = SchemeRegistry::new(table);
//!
//! let first = registry.resolve_strict("null").unwrap();
//! let second = registry.resolve_strict("null").unwrap();
//! assert!(Arc::ptr_eq(&first, &second));
//! assert!(registry.resolve_or_nil("missing").is_none());
//! ```

use super::handler::Scheme;
use super::handler_type::HandlerTypeResolver;
use crate::config::RegistryConfig;
use crate::error::{Result, SchemeError};
use crate::logging::log_registry_operation;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Name to singleton handler cache, append-only
pub struct SchemeRegistry {
    resolver: Arc<dyn HandlerTypeResolver>,
    schemes: RwLock<HashMap<String, Arc<Scheme>>>,
    config: RegistryConfig,
}

impl SchemeRegistry {
    /// Create an empty registry backed by `resolver`
    pub fn new(resolver: Arc<dyn HandlerTypeResolver>) -> Self {
        Self::with_config(resolver, RegistryConfig::default())
    }

    pub fn with_config(resolver: Arc<dyn HandlerTypeResolver>, config: RegistryConfig) -> Self {
        debug!(strict = config.strict, "Creating SchemeRegistry");
        Self {
            resolver,
            schemes: RwLock::new(HashMap::new()),
            config,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Resolve with the configured default strictness
    pub fn find(&self, scheme_name: &str) -> Result<Option<Arc<Scheme>>> {
        self.resolve(scheme_name, self.config.strict)
    }

    /// Resolve an unknown scheme to an error
    pub fn resolve_strict(&self, scheme_name: &str) -> Result<Arc<Scheme>> {
        self.resolve(scheme_name, true)?
            .ok_or_else(|| SchemeError::unresolved(scheme_name))
    }

    /// Resolve an unknown scheme to `None`
    pub fn resolve_or_nil(&self, scheme_name: &str) -> Option<Arc<Scheme>> {
        self.resolve(scheme_name, false).ok().flatten()
    }

    /// Return the handler for `scheme_name`, constructing it on first use
    ///
    /// With `strict` an unknown or unconstructible scheme is
    /// [`SchemeError::UnresolvedScheme`]; otherwise it is `Ok(None)`.
    pub fn resolve(&self, scheme_name: &str, strict: bool) -> Result<Option<Arc<Scheme>>> {
        if let Some(scheme) = self.schemes.read().get(scheme_name) {
            debug!(scheme_name, "Returning cached scheme handler");
            return Ok(Some(Arc::clone(scheme)));
        }

        match self.construct(scheme_name) {
            Some(scheme) => Ok(Some(self.publish(scheme))),
            None if strict => Err(SchemeError::unresolved(scheme_name)),
            None => Ok(None),
        }
    }

    /// Look up and instantiate a handler with no lock held
    ///
    /// Every failure collapses to `None`; the reason is only logged.
    fn construct(&self, scheme_name: &str) -> Option<Scheme> {
        if scheme_name.is_empty() {
            return None;
        }

        let handler_type = match self.resolver.lookup_handler_type(scheme_name) {
            Ok(Some(handler_type)) => handler_type,
            Ok(None) => {
                debug!(scheme_name, "No handler type bound to scheme");
                return None;
            }
            Err(e) => {
                warn!(scheme_name, error = %e, "Handler type lookup failed");
                return None;
            }
        };

        match handler_type.instantiate() {
            Ok(handler) => Some(Scheme::bind(scheme_name, handler)),
            Err(e) => {
                warn!(scheme_name, error = %e, "Scheme handler construction failed");
                None
            }
        }
    }

    /// Insert `scheme` unless a concurrent caller got there first
    fn publish(&self, scheme: Scheme) -> Arc<Scheme> {
        let mut schemes = self.schemes.write();

        if let Some(existing) = schemes.get(scheme.scheme_name()) {
            debug!(
                scheme_name = scheme.scheme_name(),
                "Discarding duplicate scheme handler, already published"
            );
            return Arc::clone(existing);
        }

        let scheme = Arc::new(scheme);
        schemes.insert(scheme.scheme_name().to_string(), Arc::clone(&scheme));
        drop(schemes);

        log_registry_operation("publish", scheme.scheme_name(), "published", None);
        scheme
    }
}

impl std::fmt::Debug for SchemeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemeRegistry")
            .field("cached_schemes", &self.schemes.read().len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

//! Instrumented handler type resolvers and descriptors

use super::handlers::EchoScheme;
use scheme_registry::{
    HandlerType, HandlerTypeResolver, LookupError, SchemeHandler, SchemeRegistry, SchemeTypeTable,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Wraps a [`SchemeTypeTable`] and counts lookups
pub struct CountingResolver {
    pub table: SchemeTypeTable,
    lookups: AtomicUsize,
}

impl CountingResolver {
    pub fn new(table: SchemeTypeTable) -> Self {
        Self {
            table,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl HandlerTypeResolver for CountingResolver {
    fn lookup_handler_type(&self, scheme_name: &str) -> Result<Option<HandlerType>, LookupError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.table.lookup_handler_type(scheme_name)
    }
}

/// Binds every non-empty scheme name to [`EchoScheme`]
pub struct AnySchemeResolver;

impl HandlerTypeResolver for AnySchemeResolver {
    fn lookup_handler_type(&self, _scheme_name: &str) -> Result<Option<HandlerType>, LookupError> {
        Ok(Some(HandlerType::of::<EchoScheme>()))
    }
}

/// Reports every lookup as a failure
pub struct BrokenResolver;

impl HandlerTypeResolver for BrokenResolver {
    fn lookup_handler_type(&self, scheme_name: &str) -> Result<Option<HandlerType>, LookupError> {
        Err(LookupError {
            scheme_name: scheme_name.to_string(),
            reason: "type metadata unavailable".to_string(),
        })
    }
}

/// Echo handler type that counts constructions and sleeps to widen races
pub fn slow_counting_type(constructions: Arc<AtomicUsize>, delay: Duration) -> HandlerType {
    HandlerType::from_fn("SlowEchoScheme", move || {
        constructions.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(delay);
        Ok(Box::new(EchoScheme) as Box<dyn SchemeHandler>)
    })
}

/// Registry over a counting resolver, returning both
pub fn counting_registry(table: SchemeTypeTable) -> (Arc<SchemeRegistry>, Arc<CountingResolver>) {
    let resolver = Arc::new(CountingResolver::new(table));
    let registry = Arc::new(SchemeRegistry::new(resolver.clone()));
    (registry, resolver)
}

//! Scheme handlers used across integration tests

use scheme_registry::{Locator, Scheme, SchemeHandler};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Echoes the locator body and base back as JSON
#[derive(Default)]
pub struct EchoScheme;

impl SchemeHandler for EchoScheme {
    fn resolve(&self, locator: &Locator, base: Option<&Value>) -> anyhow::Result<Value> {
        Ok(json!({
            "handler": "echo",
            "body": locator.body(),
            "base": base.cloned(),
        }))
    }
}

/// Alternate handler used to detect rebinding
#[derive(Default)]
pub struct ShoutScheme;

impl SchemeHandler for ShoutScheme {
    fn resolve(&self, locator: &Locator, _base: Option<&Value>) -> anyhow::Result<Value> {
        Ok(json!({
            "handler": "shout",
            "body": locator.body().to_uppercase(),
        }))
    }
}

/// In-memory key/value scheme
///
/// `./key` looks the key up in an object base instead of the store.
#[derive(Default)]
pub struct MemScheme {
    store: HashMap<String, Value>,
}

impl MemScheme {
    pub fn seeded(entries: &[(&str, Value)]) -> Self {
        let store = entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect();
        Self { store }
    }
}

impl SchemeHandler for MemScheme {
    fn resolve(&self, locator: &Locator, base: Option<&Value>) -> anyhow::Result<Value> {
        if let Some(key) = locator.body().strip_prefix("./") {
            let base = base.ok_or_else(|| anyhow::anyhow!("relative key {key} without base"))?;
            return base
                .get(key)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("key {key} not in base"));
        }

        self.store
            .get(locator.body())
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no entry for {}", locator.body()))
    }
}

/// Always fails at resolution time
#[derive(Default)]
pub struct FailingScheme;

impl SchemeHandler for FailingScheme {
    fn resolve(&self, locator: &Locator, _base: Option<&Value>) -> anyhow::Result<Value> {
        anyhow::bail!("cannot resolve {}", locator.body())
    }
}

/// Counts how many times it has resolved anything
#[derive(Default)]
pub struct TallyScheme {
    calls: AtomicU64,
}

impl SchemeHandler for TallyScheme {
    fn resolve(&self, _locator: &Locator, _base: Option<&Value>) -> anyhow::Result<Value> {
        Ok(json!(self.calls.fetch_add(1, Ordering::SeqCst) + 1))
    }
}

/// Holds a handle to another scheme obtained during construction
pub struct ComposedScheme {
    pub inner: Arc<Scheme>,
}

impl SchemeHandler for ComposedScheme {
    fn resolve(&self, locator: &Locator, base: Option<&Value>) -> anyhow::Result<Value> {
        self.inner.resolve(locator, base)
    }
}

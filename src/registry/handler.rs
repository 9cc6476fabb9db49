//! # Scheme Handler Contract
//!
//! A concrete handler implements [`SchemeHandler`]. The registry wraps each
//! constructed handler in a [`Scheme`], which pins the scheme name the handler
//! was published under. Nothing outside the registry can build a `Scheme`, so
//! the name is assigned exactly once, before anyone else sees the instance.

use crate::locator::Locator;
use serde_json::Value;
use std::fmt;

/// Resolution logic for one scheme
///
/// Implementations are shared across threads through `Arc<Scheme>` and called
/// without any registry-level coordination, so any interior state must do its
/// own synchronization.
pub trait SchemeHandler: Send + Sync + 'static {
    /// Produce the value `locator` designates, interpreting relative parts
    /// against `base` when one is given.
    fn resolve(&self, locator: &Locator, base: Option<&Value>) -> anyhow::Result<Value>;
}

/// A published handler instance bound to its scheme name
pub struct Scheme {
    scheme_name: String,
    handler: Box<dyn SchemeHandler>,
}

impl Scheme {
    pub(crate) fn bind(scheme_name: &str, handler: Box<dyn SchemeHandler>) -> Self {
        Self {
            scheme_name: scheme_name.to_string(),
            handler,
        }
    }

    pub fn scheme_name(&self) -> &str {
        &self.scheme_name
    }

    /// Canonical text form, which is the scheme name
    pub fn text_form(&self) -> &str {
        self.scheme_name()
    }

    pub fn resolve(&self, locator: &Locator, base: Option<&Value>) -> anyhow::Result<Value> {
        self.handler.resolve(locator, base)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text_form())
    }
}

impl fmt::Debug for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheme")
            .field("scheme_name", &self.scheme_name)
            .finish_non_exhaustive()
    }
}

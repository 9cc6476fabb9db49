//! # Scheme Error Types
//!
//! Structured error handling for scheme resolution using thiserror.
//!
//! Callers only ever see [`SchemeError`]. [`LookupError`] and
//! [`ConstructionError`] describe why a miss could not be turned into a
//! published handler; the registry logs them and reports both as
//! [`SchemeError::UnresolvedScheme`].

use thiserror::Error;

/// Errors surfaced to callers of the registry and the locator dispatch
#[derive(Error, Debug)]
pub enum SchemeError {
    #[error("Unknown scheme: {scheme_name}")]
    UnresolvedScheme { scheme_name: String },

    #[error("Locator has no scheme: {locator}")]
    RelativeLocator { locator: String },

    #[error("Scheme '{scheme_name}' failed to resolve {locator}: {source}")]
    HandlerFailed {
        scheme_name: String,
        locator: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Invalid locator: {0}")]
    InvalidLocator(#[from] LocatorError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ::config::ConfigError),
}

impl SchemeError {
    pub fn unresolved(scheme_name: impl Into<String>) -> Self {
        SchemeError::UnresolvedScheme {
            scheme_name: scheme_name.into(),
        }
    }

    /// Scheme name carried by the error, if any
    pub fn scheme_name(&self) -> Option<&str> {
        match self {
            SchemeError::UnresolvedScheme { scheme_name }
            | SchemeError::HandlerFailed { scheme_name, .. } => Some(scheme_name),
            _ => None,
        }
    }
}

/// Locator text that cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocatorError {
    #[error("empty locator")]
    Empty,
}

/// Failure reported by a [`HandlerTypeResolver`](crate::registry::HandlerTypeResolver)
#[derive(Error, Debug)]
#[error("Handler type lookup failed for '{scheme_name}': {reason}")]
pub struct LookupError {
    pub scheme_name: String,
    pub reason: String,
}

/// Failure to build a handler instance from its type descriptor
#[derive(Error, Debug)]
pub enum ConstructionError {
    #[error("{type_name} is abstract")]
    Abstract { type_name: String },

    #[error("{type_name} failed to construct: {source}")]
    Failed {
        type_name: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type Result<T> = std::result::Result<T, SchemeError>;

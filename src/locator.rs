//! # Locator
//!
//! Minimal `scheme:body` locator. Parsing stops at the scheme; everything after
//! the first `:` is handed to the scheme's handler untouched.

use crate::error::{LocatorError, Result, SchemeError};
use crate::registry::SchemeRegistry;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator {
    text: String,
    /// Byte length of the scheme prefix, excluding the colon
    scheme_len: Option<usize>,
}

impl Locator {
    /// Parse locator text. Schemes are normalized to lower case.
    pub fn parse(text: &str) -> std::result::Result<Self, LocatorError> {
        if text.is_empty() {
            return Err(LocatorError::Empty);
        }

        let Some(colon) = text.find(':') else {
            return Ok(Self {
                text: text.to_string(),
                scheme_len: None,
            });
        };

        let scheme = &text[..colon];
        let is_scheme = scheme.starts_with(|c: char| c.is_ascii_alphabetic())
            && scheme.chars().all(is_scheme_char);
        if !is_scheme {
            // Text before the colon is a path segment, e.g. `dir/a:b` or `:x`
            return Ok(Self {
                text: text.to_string(),
                scheme_len: None,
            });
        }

        let mut normalized = scheme.to_ascii_lowercase();
        normalized.push_str(&text[colon..]);
        Ok(Self {
            text: normalized,
            scheme_len: Some(colon),
        })
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme_len.map(|len| &self.text[..len])
    }

    /// Everything after the scheme separator, or the whole text when relative
    pub fn body(&self) -> &str {
        match self.scheme_len {
            Some(len) => &self.text[len + 1..],
            None => &self.text,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_abs(&self) -> bool {
        self.scheme_len.is_some()
    }

    pub fn is_rel(&self) -> bool {
        self.scheme_len.is_none()
    }

    /// Resolve this locator through the handler registered for its scheme
    pub fn get(&self, registry: &SchemeRegistry, base: Option<&Value>) -> Result<Value> {
        let scheme_name = self.scheme().ok_or_else(|| SchemeError::RelativeLocator {
            locator: self.text.clone(),
        })?;

        let scheme = registry.resolve_strict(scheme_name)?;
        scheme
            .resolve(self, base)
            .map_err(|source| SchemeError::HandlerFailed {
                scheme_name: scheme_name.to_string(),
                locator: self.text.clone(),
                source,
            })
    }
}

fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Locator {
    type Err = LocatorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

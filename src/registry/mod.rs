//! # Registry Infrastructure
//!
//! Scheme name to handler dispatch.
//!
//! ## Architecture
//!
//! ```text
//! Registry Infrastructure
//! ├── SchemeRegistry       (singleton-per-scheme cache, the only entry point)
//! ├── HandlerTypeResolver  (scheme name -> HandlerType, consulted on a miss)
//! │   └── SchemeTypeTable  (explicit registration)
//! └── Scheme               (published handler bound to its scheme name)
//! ```

pub mod handler;
pub mod handler_type;
pub mod scheme_registry;

// Re-export main types for easy access
pub use handler::{Scheme, SchemeHandler};
pub use handler_type::{HandlerType, HandlerTypeResolver, SchemeTypeTable};
pub use scheme_registry::SchemeRegistry;

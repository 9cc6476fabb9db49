#![allow(dead_code)] // Each test binary uses a different subset of fixtures

pub mod handlers;
pub mod resolvers;
pub mod strategies;

pub use handlers::*;
pub use resolvers::*;
pub use strategies::*;

//! CLI command implementations.

pub mod common;
pub mod strategies;
pub mod transform;
pub mod version;

//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - JSONPlaceholder HTTP client for ContentSource
//! - Bundled demo data for ContentSource (offline mode)

pub mod demo;
pub mod jsonplaceholder;

#[cfg(test)]
pub mod placeholder_mock;

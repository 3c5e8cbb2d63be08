//! Data models for the drive registry.
//!
//! These types serialize to the same camelCase shapes the drive route's
//! TypeScript components consume.

mod directory;
mod entry;

pub use directory::*;
pub use entry::*;

//! Directory registry backing the drive route.
//!
//! This module holds the in-memory hierarchy the drive view browses:
//! - **Directory records**: nodes listing child folders and files, linked to
//!   their parent by id
//! - **Id allocation**: one counter shared by folders and files
//! - **Seed data**: the fixed dataset every registry starts from
//!
//! Nothing is persisted; a new registry always starts from the seed.

pub mod directory_registry;
pub mod ids;
pub mod seed;

pub use directory_registry::DirectoryRegistry;
pub use ids::IdAllocator;
pub use seed::seed_records;

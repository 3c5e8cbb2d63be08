//! Drive Core - In-memory directory registry for the drive demo route.
//!
//! The registry holds a flat list of directory records, each listing child
//! folders and files, linked by parent id. It is built once from a fixed
//! seed and handed to whoever serves the drive view.
//!
//! # Example
//!
//! ```rust
//! use drive_core::{DirectoryRegistry, EntryKind, NewEntry};
//!
//! fn main() -> drive_core::Result<()> {
//!     let mut registry = DirectoryRegistry::seeded();
//!
//!     let folder = registry.create_folder_at(0, "Reports")?;
//!     registry.add_file(&folder.id, NewEntry::file("q3.pdf", "300 KB", "19/10/2026"))?;
//!
//!     registry.remove(EntryKind::File, "6")?;
//!     println!("{} directories", registry.len());
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod registry;

// Re-export commonly used types
pub use config::{DriveConfig, RpcConfig};
pub use error::{DriveError, Result};
pub use models::{ChildEntry, DirectoryRecord, DriveObject, EntryKind, NewEntry};
pub use registry::{DirectoryRegistry, IdAllocator};

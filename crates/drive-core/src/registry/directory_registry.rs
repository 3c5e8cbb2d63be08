//! In-memory registry of drive directories.

use super::ids::IdAllocator;
use super::seed::seed_records;
use crate::config::{today_stamp, DriveConfig};
use crate::models::{ChildEntry, DirectoryRecord, DriveObject, EntryKind, NewEntry};
use crate::{DriveError, Result};
use tracing::{debug, warn};

/// Ordered collection of directory records plus the shared id counter.
///
/// Records are kept in insertion order and addressed either by id or by
/// position. Positions shift only if records are removed, which no operation
/// here does, but callers holding indices across sessions should prefer the
/// id-addressed methods.
///
/// The registry is never empty: its first record is the root that
/// [`find`](Self::find) falls back to.
#[derive(Debug, Clone)]
pub struct DirectoryRegistry {
    records: Vec<DirectoryRecord>,
    ids: IdAllocator,
    date_source: fn() -> String,
}

impl DirectoryRegistry {
    /// Create a registry holding the six seed directories, dated today.
    pub fn seeded() -> Self {
        let records = seed_records(&today_stamp());
        debug!("Seeded drive registry with {} directories", records.len());
        Self {
            records,
            ids: IdAllocator::default(),
            date_source: today_stamp,
        }
    }

    /// Create a registry from existing records.
    ///
    /// `next_id` is the first id handed out by later insertions and must be
    /// above every numeric id already present.
    pub fn from_records(records: Vec<DirectoryRecord>, next_id: u64) -> Result<Self> {
        if records.is_empty() {
            return Err(DriveError::EmptyRegistry);
        }
        if let Some(max) = max_numeric_id(&records) {
            if next_id <= max {
                return Err(DriveError::InvalidParams {
                    message: format!("next_id {} must be greater than existing id {}", next_id, max),
                });
            }
        }
        Ok(Self {
            records,
            ids: IdAllocator::starting_at(next_id),
            date_source: today_stamp,
        })
    }

    /// Replace the source of `lastModified` stamps for new folders.
    pub fn with_date_source(mut self, date_source: fn() -> String) -> Self {
        self.date_source = date_source;
        self
    }

    // ========================================
    // Lookups
    // ========================================

    /// Find a directory by id, falling back to the first record.
    ///
    /// Callers cannot tell a miss from a hit on the root; use
    /// [`get`](Self::get) when the difference matters.
    pub fn find(&self, id: &str) -> &DirectoryRecord {
        self.get(id).unwrap_or_else(|| {
            warn!("Directory {} not found, falling back to root", id);
            self.root()
        })
    }

    /// Find a directory by id.
    pub fn get(&self, id: &str) -> Option<&DirectoryRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Position of the directory with `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// The first record.
    pub fn root(&self) -> &DirectoryRecord {
        &self.records[0]
    }

    pub fn records(&self) -> &[DirectoryRecord] {
        &self.records
    }

    /// Number of directory records. Removing a folder entry never lowers it.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Folders then files of a directory, flattened for the drive view.
    pub fn objects(&self, directory_id: &str) -> Result<Vec<DriveObject>> {
        self.get(directory_id)
            .map(DirectoryRecord::objects)
            .ok_or_else(|| DriveError::DirectoryNotFound {
                directory_id: directory_id.to_string(),
            })
    }

    // ========================================
    // Files
    // ========================================

    /// Append a file to the directory with `directory_id`.
    ///
    /// Returns the stored entry with its newly allocated id. An unknown
    /// directory allocates nothing.
    pub fn add_file(&mut self, directory_id: &str, entry: NewEntry) -> Result<ChildEntry> {
        let index = self.require_position(directory_id)?;
        let child = entry.into_child(self.ids.allocate()?);
        self.records[index].files.push(child.clone());
        debug!(
            "Added file {} ({}) to directory {}",
            child.name, child.id, directory_id
        );
        Ok(child)
    }

    /// Remove a file from the directory at `index`.
    ///
    /// Removing an id the directory does not list is a no-op.
    pub fn remove_file_at(&mut self, index: usize, entry_id: &str) -> Result<()> {
        self.remove_at(EntryKind::File, index, entry_id)
    }

    /// Remove a file from the directory with `directory_id`.
    pub fn remove_file(&mut self, directory_id: &str, entry_id: &str) -> Result<()> {
        let index = self.require_position(directory_id)?;
        self.remove_at(EntryKind::File, index, entry_id)
    }

    // ========================================
    // Folders
    // ========================================

    /// Remove a folder entry from the directory at `index`.
    ///
    /// The folder's own directory record stays in the registry.
    pub fn remove_folder_at(&mut self, index: usize, entry_id: &str) -> Result<()> {
        self.remove_at(EntryKind::Folder, index, entry_id)
    }

    /// Remove a folder entry from the directory with `directory_id`.
    pub fn remove_folder(&mut self, directory_id: &str, entry_id: &str) -> Result<()> {
        let index = self.require_position(directory_id)?;
        self.remove_at(EntryKind::Folder, index, entry_id)
    }

    /// Create a folder inside the directory at `index`.
    ///
    /// The new directory record's parent is the index rendered as a string,
    /// which matches the parent's id only while ids and positions line up.
    pub fn create_folder_at(&mut self, index: usize, name: &str) -> Result<ChildEntry> {
        self.attach_folder(index, name, index.to_string())
    }

    /// Create a folder inside the directory with `directory_id`.
    pub fn create_folder(&mut self, directory_id: &str, name: &str) -> Result<ChildEntry> {
        let index = self.require_position(directory_id)?;
        self.attach_folder(index, name, directory_id.to_string())
    }

    // ========================================
    // Either kind
    // ========================================

    /// Remove the entry of `kind` with `entry_id` from the first directory
    /// that lists it.
    pub fn remove(&mut self, kind: EntryKind, entry_id: &str) -> Result<()> {
        let index = self
            .records
            .iter()
            .position(|r| r.contains(kind, entry_id))
            .ok_or_else(|| DriveError::EntryNotFound {
                kind,
                entry_id: entry_id.to_string(),
            })?;
        self.remove_at(kind, index, entry_id)
    }

    // ========================================
    // Internals
    // ========================================

    fn require_position(&self, directory_id: &str) -> Result<usize> {
        self.position(directory_id).ok_or_else(|| {
            warn!("Directory {} not found", directory_id);
            DriveError::DirectoryNotFound {
                directory_id: directory_id.to_string(),
            }
        })
    }

    fn record_mut(&mut self, index: usize) -> Result<&mut DirectoryRecord> {
        let len = self.records.len();
        self.records
            .get_mut(index)
            .ok_or(DriveError::InvalidIndex { index, len })
    }

    fn remove_at(&mut self, kind: EntryKind, index: usize, entry_id: &str) -> Result<()> {
        let record = self.record_mut(index)?;
        let removed = record.retain_without(kind, entry_id);
        debug!(
            "Removed {} {}(s) with id {} from directory {}",
            removed, kind, entry_id, record.id
        );
        Ok(())
    }

    fn attach_folder(&mut self, index: usize, name: &str, parent_id: String) -> Result<ChildEntry> {
        let last_modified = (self.date_source)();
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(DriveError::InvalidIndex { index, len })?;

        let id = self.ids.allocate()?;
        let entry = ChildEntry {
            id: id.clone(),
            name: name.to_string(),
            size: DriveConfig::NEW_FOLDER_SIZE.to_string(),
            last_modified,
        };
        record.folders.push(entry.clone());
        debug!(
            "Created folder {} ({}) in directory {}",
            entry.name, entry.id, record.id
        );

        self.records.push(DirectoryRecord::empty(id, Some(parent_id)));
        Ok(entry)
    }
}

/// Largest id among records and their children that parses as a number.
fn max_numeric_id(records: &[DirectoryRecord]) -> Option<u64> {
    records
        .iter()
        .flat_map(|r| {
            std::iter::once(&r.id).chain(r.folders.iter().chain(r.files.iter()).map(|c| &c.id))
        })
        .filter_map(|id| id.parse::<u64>().ok())
        .max()
}

impl Default for DirectoryRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

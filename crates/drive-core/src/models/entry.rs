//! Child entry types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a child entry is a folder or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    File,
    Folder,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Folder => "folder",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "file" => Some(EntryKind::File),
            "folder" => Some(EntryKind::Folder),
            _ => None,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A folder or file listed inside a directory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildEntry {
    pub id: String,
    pub name: String,
    /// Human-readable, never parsed or summed.
    pub size: String,
    pub last_modified: String,
}

/// Payload for adding a file; the registry allocates the id.
///
/// `type` and `parentId` travel with the payload the front end sends but are
/// not kept on the stored entry, so a later `find` returns the file with only
/// `id`, `name`, `size` and `lastModified`, unlike the JS store, which kept
/// every payload field on the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub name: String,
    pub size: String,
    pub last_modified: String,
    #[serde(rename = "type", default)]
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl NewEntry {
    /// A file payload with no parent hint.
    pub fn file(
        name: impl Into<String>,
        size: impl Into<String>,
        last_modified: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            size: size.into(),
            last_modified: last_modified.into(),
            kind: EntryKind::File,
            parent_id: None,
        }
    }

    pub(crate) fn into_child(self, id: String) -> ChildEntry {
        ChildEntry {
            id,
            name: self.name,
            size: self.size,
            last_modified: self.last_modified,
        }
    }
}

/// Flattened listing row for the drive view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveObject {
    pub id: String,
    pub name: String,
    pub size: String,
    pub last_modified: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Id of the directory that lists this entry.
    pub parent_id: String,
}

impl DriveObject {
    pub fn from_child(child: &ChildEntry, kind: EntryKind, parent_id: &str) -> Self {
        Self {
            id: child.id.clone(),
            name: child.name.clone(),
            size: child.size.clone(),
            last_modified: child.last_modified.clone(),
            kind,
            parent_id: parent_id.to_string(),
        }
    }
}

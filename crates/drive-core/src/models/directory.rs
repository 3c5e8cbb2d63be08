//! Directory record type.

use super::{ChildEntry, DriveObject, EntryKind};
use serde::{Deserialize, Serialize};

/// A node in the drive hierarchy.
///
/// The parent link is by convention only; nothing checks that `parent_id`
/// names an existing record or that folder entries have matching records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryRecord {
    pub id: String,
    pub folders: Vec<ChildEntry>,
    pub files: Vec<ChildEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl DirectoryRecord {
    /// An empty directory under `parent_id`.
    pub fn empty(id: impl Into<String>, parent_id: Option<String>) -> Self {
        Self {
            id: id.into(),
            folders: Vec::new(),
            files: Vec::new(),
            parent_id,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn children(&self, kind: EntryKind) -> &[ChildEntry] {
        match kind {
            EntryKind::File => &self.files,
            EntryKind::Folder => &self.folders,
        }
    }

    pub(crate) fn children_mut(&mut self, kind: EntryKind) -> &mut Vec<ChildEntry> {
        match kind {
            EntryKind::File => &mut self.files,
            EntryKind::Folder => &mut self.folders,
        }
    }

    pub fn contains(&self, kind: EntryKind, entry_id: &str) -> bool {
        self.children(kind).iter().any(|c| c.id == entry_id)
    }

    /// Drop every child of `kind` whose id is `entry_id`.
    ///
    /// Returns how many entries were removed.
    pub(crate) fn retain_without(&mut self, kind: EntryKind, entry_id: &str) -> usize {
        let children = self.children_mut(kind);
        let before = children.len();
        children.retain(|c| c.id != entry_id);
        before - children.len()
    }

    /// Folders first, then files, as the drive view lists them.
    pub fn objects(&self) -> Vec<DriveObject> {
        self.folders
            .iter()
            .map(|c| DriveObject::from_child(c, EntryKind::Folder, &self.id))
            .chain(
                self.files
                    .iter()
                    .map(|c| DriveObject::from_child(c, EntryKind::File, &self.id)),
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str) -> ChildEntry {
        ChildEntry {
            id: id.into(),
            name: name.into(),
            size: "1 MB".into(),
            last_modified: "01/01/2024".into(),
        }
    }

    #[test]
    fn test_root_has_no_parent_in_json() {
        let root = DirectoryRecord::empty("0", None);
        assert!(root.is_root());
        let value = serde_json::to_value(&root).unwrap();
        assert!(value.get("parentId").is_none());

        let child = DirectoryRecord::empty("1", Some("0".into()));
        let value = serde_json::to_value(&child).unwrap();
        assert_eq!(value["parentId"], "0");
    }

    #[test]
    fn test_retain_without_only_touches_one_kind() {
        let mut dir = DirectoryRecord::empty("0", None);
        dir.folders.push(entry("1", "Folder A"));
        dir.files.push(entry("1", "clash.txt"));

        assert_eq!(dir.retain_without(EntryKind::Folder, "1"), 1);
        assert!(dir.folders.is_empty());
        assert_eq!(dir.files.len(), 1);
        assert_eq!(dir.retain_without(EntryKind::Folder, "1"), 0);
    }

    #[test]
    fn test_objects_lists_folders_before_files() {
        let mut dir = DirectoryRecord::empty("3", Some("0".into()));
        dir.files.push(entry("10", "File 5.zip"));
        dir.folders.push(entry("14", "New"));

        let objects = dir.objects();
        assert_eq!(objects.len(), 2);
        assert_eq!(objects[0].kind, EntryKind::Folder);
        assert_eq!(objects[1].id, "10");
        assert!(objects.iter().all(|o| o.parent_id == "3"));
    }
}

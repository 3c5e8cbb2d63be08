//! Fixed dataset the registry starts from.

use crate::models::{ChildEntry, DirectoryRecord};

// (id, name, size)
type Row = (&'static str, &'static str, &'static str);

// (directory id, parent id, folders, files)
const SEED: &[(&str, Option<&str>, &[Row], &[Row])] = &[
    (
        "0",
        None,
        &[
            ("1", "Folder A", "5.2 MB"),
            ("2", "Folder C", "1.2 MB"),
            ("3", "Folder B", "2 MB"),
            ("4", "Folder Z", "3.9 MB"),
        ],
        &[("6", "File 1.zip", "2 MB")],
    ),
    (
        "1",
        Some("0"),
        &[("5", "Folder D", "1.2 MB")],
        &[("7", "File 2.zip", "2 MB"), ("8", "File 3.zip", "2 MB")],
    ),
    ("2", Some("1"), &[], &[("9", "File 4.zip", "1.2 MB")]),
    ("3", Some("0"), &[], &[("10", "File 5.zip", "2 MB")]),
    ("4", Some("0"), &[], &[("11", "File 6.zip", "3.9 MB")]),
    ("5", Some("1"), &[], &[("12", "File 7.zip", "1.2 MB")]),
];

/// Build the seed directories, stamping every entry with `date`.
pub fn seed_records(date: &str) -> Vec<DirectoryRecord> {
    let rows = |list: &[Row]| -> Vec<ChildEntry> {
        list.iter()
            .map(|(id, name, size)| ChildEntry {
                id: (*id).to_string(),
                name: (*name).to_string(),
                size: (*size).to_string(),
                last_modified: date.to_string(),
            })
            .collect()
    };

    SEED.iter()
        .map(|(id, parent, folders, files)| DirectoryRecord {
            id: (*id).to_string(),
            folders: rows(*folders),
            files: rows(*files),
            parent_id: parent.map(String::from),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DriveConfig;

    #[test]
    fn test_seed_shape() {
        let records = seed_records("01/01/2024");
        assert_eq!(records.len(), 6);
        assert_eq!(records[0].id, DriveConfig::ROOT_ID);
        assert!(records[0].is_root());
        assert!(records[1..].iter().all(|r| r.parent_id.is_some()));
    }

    #[test]
    fn test_seed_ids_stay_below_first_allocated() {
        let records = seed_records("01/01/2024");
        let max = records
            .iter()
            .flat_map(|r| r.folders.iter().chain(r.files.iter()))
            .map(|c| c.id.parse::<u64>().unwrap())
            .max()
            .unwrap();
        assert_eq!(max + 1, DriveConfig::FIRST_ALLOCATED_ID);
    }

    #[test]
    fn test_seed_stamps_dates() {
        let records = seed_records("05/06/2024");
        assert!(records
            .iter()
            .flat_map(|r| r.folders.iter().chain(r.files.iter()))
            .all(|c| c.last_modified == "05/06/2024"));
    }
}

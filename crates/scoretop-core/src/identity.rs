//! Player identity lookup from a playerdata directory.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::nbt::{self, Tag};
use crate::snapshot::SourceSnapshot;

/// A player UUID paired with the last display name the server saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityEntry {
    #[serde(rename = "UUID")]
    pub id: String,
    #[serde(rename = "lastKnownName")]
    pub last_known_name: String,
}

/// Reads every playerdata file in `dir` and pairs UUIDs with names.
///
/// File names must be `<uuid>.dat`; anything else aborts the lookup. The
/// name comes from the `bukkit.lastKnownName` tag, so the server must be
/// running Spigot/Bukkit for this to work. Results are sorted by id so
/// the report is stable across directory iteration orders.
pub fn read_identities<P: AsRef<Path>>(dir: P) -> Result<Vec<IdentityEntry>> {
    let mut entries = Vec::new();
    for dir_entry in fs::read_dir(dir)? {
        let dir_entry = dir_entry?;
        if !dir_entry.file_type()?.is_file() {
            continue;
        }
        let file_name = dir_entry.file_name().to_string_lossy().into_owned();
        let id = file_name
            .strip_suffix(".dat")
            .ok_or_else(|| Error::MalformedIdentityFilename(file_name.clone()))?
            .to_string();

        let snapshot = SourceSnapshot::create(dir_entry.path())?;
        let root = nbt::read_file(snapshot.path())?;
        let name = root
            .get("bukkit")
            .and_then(|b| b.get("lastKnownName"))
            .and_then(Tag::as_str)
            .ok_or_else(|| {
                Error::MalformedData(format!("{} has no lastKnownName", file_name))
            })?;

        entries.push(IdentityEntry { id, last_known_name: name.to_string() });
    }
    entries.sort_by(|a, b| a.id.cmp(&b.id));
    debug!("resolved {} identities", entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tempfile::TempDir;

    use super::*;
    use crate::nbt::encode;

    fn playerdata(name: &str) -> Vec<u8> {
        let mut bukkit = HashMap::new();
        bukkit.insert("lastKnownName".to_string(), Tag::String(name.to_string()));
        let mut root = HashMap::new();
        root.insert("bukkit".to_string(), Tag::Compound(bukkit));
        encode::to_gzipped_bytes(&Tag::Compound(root))
    }

    #[test]
    fn test_read_identities_sorted_by_id() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bbbb.dat"), playerdata("bob")).unwrap();
        fs::write(dir.path().join("aaaa.dat"), playerdata("alice")).unwrap();

        let entries = read_identities(dir.path()).unwrap();
        assert_eq!(
            entries,
            vec![
                IdentityEntry { id: "aaaa".to_string(), last_known_name: "alice".to_string() },
                IdentityEntry { id: "bbbb".to_string(), last_known_name: "bob".to_string() },
            ]
        );
    }

    #[test]
    fn test_read_identities_rejects_unexpected_file_names() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("aaaa.dat"), playerdata("alice")).unwrap();
        fs::write(dir.path().join("notes.txt"), b"not playerdata").unwrap();

        let err = read_identities(dir.path()).unwrap_err();
        assert!(matches!(err, Error::MalformedIdentityFilename(_)));
    }

    #[test]
    fn test_read_identities_requires_last_known_name() {
        let dir = TempDir::new().unwrap();
        let root = Tag::Compound(HashMap::new());
        fs::write(dir.path().join("aaaa.dat"), encode::to_gzipped_bytes(&root)).unwrap();

        let err = read_identities(dir.path()).unwrap_err();
        assert!(matches!(err, Error::MalformedData(_)));
    }
}

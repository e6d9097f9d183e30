//! File-system operations over mounted volumes.
//!
//! Every operation takes internal paths (`DRIVE\sub\file`) and goes through
//! `Volumes::resolve` to reach the host. Errors carry their user-facing
//! strings; see `core::error`.

pub mod delete;
pub mod list;
pub mod textfile;
pub mod transfer;
pub mod tree;
pub mod wildcard;

use std::cmp::Ordering;
use std::fs;
use std::time::SystemTime;

use bitflags::bitflags;

bitflags! {
    /// FAT-style file attribute bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FileAttributes: u32 {
        const READONLY  = 0x01;
        const HIDDEN    = 0x02;
        const SYSTEM    = 0x04;
        const DIRECTORY = 0x10;
        const ARCHIVE   = 0x20;
    }
}

impl FileAttributes {
    /// Derive attributes from host metadata. Regular files carry ARCHIVE,
    /// dot-files map to HIDDEN, and write protection maps to READONLY.
    pub fn from_metadata(name: &str, meta: &fs::Metadata) -> Self {
        let mut attrs = FileAttributes::empty();
        if meta.is_dir() {
            attrs |= FileAttributes::DIRECTORY;
        } else {
            attrs |= FileAttributes::ARCHIVE;
        }
        if meta.permissions().readonly() {
            attrs |= FileAttributes::READONLY;
        }
        if name.starts_with('.') {
            attrs |= FileAttributes::HIDDEN;
        }
        attrs
    }
}

/// One scanned directory entry.
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
    pub size: u64,
    pub modified: SystemTime,
    pub attrs: FileAttributes,
}

impl DirEntry {
    /// Read one entry's metadata. Returns None when the entry cannot be
    /// stat'ed (racing deletes); callers skip such entries.
    pub fn from_fs(entry: &fs::DirEntry) -> Option<Self> {
        let name = entry.file_name().to_string_lossy().into_owned();
        let meta = entry.metadata().ok()?;
        Some(Self {
            is_dir: meta.is_dir(),
            size: if meta.is_dir() { 0 } else { meta.len() },
            modified: meta.modified().unwrap_or(SystemTime::UNIX_EPOCH),
            attrs: FileAttributes::from_metadata(&name, &meta),
            name,
        })
    }
}

/// Apply a `/A`-style attribute filter string.
///
/// Letters `D`, `R`, `H`, `A`, `S` select directory, read-only, hidden,
/// archive and system; a `-` immediately before a letter negates it. The
/// string is scanned left to right and the most recent mention of a letter
/// wins. An empty filter passes everything.
pub fn passes_attribute_filter(entry: &DirEntry, attrib: &str) -> bool {
    if attrib.is_empty() {
        return true;
    }

    // D, R, H, A, S: 0 = don't care, 1 = must have, -1 = must not have.
    let mut must_have = [0i8; 5];
    let bytes = attrib.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        let idx = match b.to_ascii_uppercase() {
            b'D' => 0,
            b'R' => 1,
            b'H' => 2,
            b'A' => 3,
            b'S' => 4,
            _ => continue,
        };
        let exclude = i > 0 && bytes[i - 1] == b'-';
        must_have[idx] = if exclude { -1 } else { 1 };
    }

    let checks = [
        entry.is_dir,
        entry.attrs.contains(FileAttributes::READONLY),
        entry.attrs.contains(FileAttributes::HIDDEN),
        entry.attrs.contains(FileAttributes::ARCHIVE),
        entry.attrs.contains(FileAttributes::SYSTEM),
    ];
    for (want, has) in must_have.iter().zip(checks) {
        if *want == 1 && !has {
            return false;
        }
        if *want == -1 && has {
            return false;
        }
    }
    true
}

/// Listing sort orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Extension,
    Date,
    Size,
}

impl SortKey {
    /// Map a `/O` letter to its key.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'N' => Some(SortKey::Name),
            'E' => Some(SortKey::Extension),
            'D' => Some(SortKey::Date),
            'S' => Some(SortKey::Size),
            _ => None,
        }
    }
}

/// Extension including the dot, or empty when there is none.
fn extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) => &name[dot..],
        None => "",
    }
}

/// Compare two entries for a listing. Name order ignores case; extension
/// ties fall back to the full name.
pub fn compare_entries(a: &DirEntry, b: &DirEntry, key: SortKey, reverse: bool) -> Ordering {
    let cmp = match key {
        SortKey::Name => a.name.to_uppercase().cmp(&b.name.to_uppercase()),
        SortKey::Extension => extension(&a.name)
            .cmp(extension(&b.name))
            .then_with(|| a.name.cmp(&b.name)),
        SortKey::Date => a.modified.cmp(&b.modified),
        SortKey::Size => a.size.cmp(&b.size),
    };
    if reverse { cmp.reverse() } else { cmp }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, is_dir: bool, attrs: FileAttributes) -> DirEntry {
        DirEntry {
            name: name.to_string(),
            is_dir,
            size: 0,
            modified: SystemTime::UNIX_EPOCH,
            attrs,
        }
    }

    #[test]
    fn test_filter_empty_passes_all() {
        let e = entry("a.txt", false, FileAttributes::ARCHIVE);
        assert!(passes_attribute_filter(&e, ""));
    }

    #[test]
    fn test_filter_directory_letter() {
        let dir = entry("sub", true, FileAttributes::DIRECTORY);
        let file = entry("a.txt", false, FileAttributes::ARCHIVE);
        assert!(passes_attribute_filter(&dir, "D"));
        assert!(!passes_attribute_filter(&file, "D"));
        assert!(passes_attribute_filter(&file, "-D"));
        assert!(!passes_attribute_filter(&dir, "-D"));
    }

    #[test]
    fn test_filter_combined_letters() {
        let hidden_dir = entry(
            ".store",
            true,
            FileAttributes::DIRECTORY | FileAttributes::HIDDEN,
        );
        let plain_dir = entry("sub", true, FileAttributes::DIRECTORY);
        assert!(passes_attribute_filter(&plain_dir, "D-H"));
        assert!(!passes_attribute_filter(&hidden_dir, "D-H"));
    }

    #[test]
    fn test_filter_last_mention_wins() {
        let file = entry("a.txt", false, FileAttributes::ARCHIVE);
        // `-A` after `A` flips the requirement.
        assert!(!passes_attribute_filter(&file, "A-A"));
        assert!(passes_attribute_filter(&file, "-AA"));
    }

    #[test]
    fn test_sort_name_case_insensitive() {
        let a = entry("alpha.txt", false, FileAttributes::ARCHIVE);
        let b = entry("BETA.txt", false, FileAttributes::ARCHIVE);
        assert_eq!(
            compare_entries(&a, &b, SortKey::Name, false),
            Ordering::Less
        );
        assert_eq!(
            compare_entries(&a, &b, SortKey::Name, true),
            Ordering::Greater
        );
    }

    #[test]
    fn test_sort_extension_ties_on_name() {
        let a = entry("b.txt", false, FileAttributes::ARCHIVE);
        let b = entry("a.txt", false, FileAttributes::ARCHIVE);
        assert_eq!(
            compare_entries(&a, &b, SortKey::Extension, false),
            Ordering::Greater
        );
    }

    #[test]
    fn test_sort_size() {
        let mut a = entry("a", false, FileAttributes::ARCHIVE);
        let mut b = entry("b", false, FileAttributes::ARCHIVE);
        a.size = 10;
        b.size = 20;
        assert_eq!(
            compare_entries(&a, &b, SortKey::Size, false),
            Ordering::Less
        );
    }

    #[test]
    fn test_sort_key_letters() {
        assert_eq!(SortKey::from_letter('n'), Some(SortKey::Name));
        assert_eq!(SortKey::from_letter('E'), Some(SortKey::Extension));
        assert_eq!(SortKey::from_letter('q'), None);
    }
}

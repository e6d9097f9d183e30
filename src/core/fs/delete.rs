//! File deletion with wildcard expansion and attribute filtering.

use std::fs;
use std::path::Path;

use log::debug;

use super::wildcard::{has_wildcards, wildcard_match};
use super::{DirEntry, FileAttributes, passes_attribute_filter};
use crate::core::drives::Volumes;
use crate::core::error::FsError;
use crate::core::path;

/// A file selected for deletion: its host path plus the internal path used
/// for report lines.
struct Target {
    host: std::path::PathBuf,
    internal: String,
}

/// Delete files matching a path.
///
/// When the last segment carries wildcards, the parent directory is scanned
/// (recursing into subdirectories with `recursive`) and matches are filtered
/// by `attrib`. A plain directory path deletes the files inside it.
/// Read-only files need `force`, which clears the write protection first.
///
/// The walk stops at the first failure. With `report` set, each deleted
/// file's internal path becomes one output line and a mid-walk failure is
/// dropped, returning only the lines accumulated so far.
pub fn delete_path(
    volumes: &Volumes,
    file_path: &str,
    recursive: bool,
    force: bool,
    attrib: &str,
    report: bool,
) -> Result<String, FsError> {
    let stripped = path::strip_trailing(file_path);
    if stripped.is_empty() {
        return Err(FsError::Syntax);
    }

    let mut targets: Vec<Target> = Vec::new();
    if has_wildcards(path::file_name(stripped)) {
        let mut dir = path::parent(stripped).to_string();
        let mut pattern = path::file_name(stripped).to_string();
        if dir == stripped {
            // No directory part at all: scan the path itself.
            dir = stripped.to_string();
            pattern = "*".to_string();
        }
        let host = volumes.resolve(&dir)?;
        collect_files(&host, &dir, &pattern, recursive, attrib, &mut targets);
    } else {
        let host = volumes.resolve(stripped)?;
        let Ok(meta) = fs::metadata(&host) else {
            return Err(FsError::CouldNotFind(stripped.to_string()));
        };
        if meta.is_dir() {
            collect_files(&host, stripped, "", recursive, attrib, &mut targets);
        } else {
            let entry = DirEntry {
                name: path::file_name(stripped).to_string(),
                is_dir: false,
                size: meta.len(),
                modified: meta.modified().unwrap_or(std::time::SystemTime::UNIX_EPOCH),
                attrs: FileAttributes::from_metadata(path::file_name(stripped), &meta),
            };
            if passes_attribute_filter(&entry, attrib) {
                targets.push(Target {
                    host,
                    internal: stripped.to_string(),
                });
            }
        }
    }

    let mut lines = String::new();
    for target in &targets {
        if let Err(err) = delete_one(&target.host, force) {
            debug!("del: stopping at {}: {err}", target.internal);
            if report {
                break;
            }
            return Err(err);
        }
        if report {
            lines.push_str(&target.internal);
            lines.push('\n');
        }
    }
    Ok(lines)
}

/// Gather the files inside a directory that match `pattern` (empty matches
/// everything) and pass the attribute filter. Subdirectories are entered
/// only with `recursive`; unreadable directories contribute nothing.
fn collect_files(
    host_dir: &Path,
    internal_dir: &str,
    pattern: &str,
    recursive: bool,
    attrib: &str,
    out: &mut Vec<Target>,
) {
    let Ok(entries) = fs::read_dir(host_dir) else {
        return;
    };
    for item in entries.flatten() {
        let Some(entry) = DirEntry::from_fs(&item) else {
            continue;
        };
        let internal = format!("{}\\{}", path::strip_trailing(internal_dir), entry.name);
        if entry.is_dir {
            if recursive {
                collect_files(&item.path(), &internal, pattern, true, attrib, out);
            }
            continue;
        }
        if !pattern.is_empty() && !wildcard_match(pattern, &entry.name) {
            continue;
        }
        if !passes_attribute_filter(&entry, attrib) {
            continue;
        }
        out.push(Target {
            host: item.path(),
            internal,
        });
    }
}

/// Delete one file. Directories are silently skipped; read-only files
/// require `force`, which strips the write protection before removal.
fn delete_one(host: &Path, force: bool) -> Result<(), FsError> {
    let meta = fs::metadata(host).map_err(|_| FsError::FileNotFound)?;
    if meta.is_dir() {
        return Ok(());
    }
    if meta.permissions().readonly() {
        if !force {
            return Err(FsError::AccessDenied);
        }
        let mut perms = meta.permissions();
        #[allow(clippy::permissions_set_readonly_false)]
        perms.set_readonly(false);
        fs::set_permissions(host, perms).map_err(|_| FsError::AccessDenied)?;
    }
    fs::remove_file(host).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => FsError::FileNotFound,
        _ => FsError::AccessDenied,
    })
}

// ============================================================================
// Tests
// ============================================================================

//! Directory creation and removal.

use std::fs;
use std::io;
use std::path::Path;

use crate::core::drives::Volumes;
use crate::core::error::FsError;
use crate::core::path;

/// Create a directory path segment by segment, tolerating segments that
/// already exist. A missing drive root surfaces as `PathNotFound`.
pub fn create_dir_path(volumes: &Volumes, dir_path: &str) -> Result<(), FsError> {
    let stripped = path::strip_trailing(dir_path);
    if stripped.is_empty() {
        return Err(FsError::Syntax);
    }

    let segments: Vec<&str> = stripped
        .split(['\\', '/'])
        .filter(|s| !s.is_empty())
        .collect();
    let mut built = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i == 0 {
            // The drive segment is not itself creatable.
            built.push_str(segment);
            continue;
        }
        built.push('\\');
        built.push_str(segment);
        let host = volumes.resolve(&built)?;
        if let Err(err) = fs::create_dir(&host) {
            match err.kind() {
                io::ErrorKind::AlreadyExists => {}
                io::ErrorKind::NotFound => return Err(FsError::PathNotFound),
                _ => return Err(FsError::CreateDir),
            }
        }
    }
    Ok(())
}

/// Remove a directory; with `remove_tree` its contents go first, depth
/// first, stopping on the first failure.
pub fn remove_dir(volumes: &Volumes, dir_path: &str, remove_tree: bool) -> Result<(), FsError> {
    let stripped = path::strip_trailing(dir_path);
    if stripped.is_empty() {
        return Err(FsError::Syntax);
    }
    let host = volumes.resolve(stripped)?;
    let meta = fs::metadata(&host).map_err(|_| FsError::FileNotFound)?;
    if !meta.is_dir() {
        return Err(FsError::InvalidDirectory);
    }
    if remove_tree {
        remove_tree_at(&host)
    } else {
        fs::remove_dir(&host).map_err(map_remove_dir)
    }
}

fn remove_tree_at(dir: &Path) -> Result<(), FsError> {
    let entries = fs::read_dir(dir).map_err(|_| FsError::RemoveDir)?;
    for entry in entries {
        let entry = entry.map_err(|_| FsError::RemoveDir)?;
        let child = entry.path();
        let meta = entry.metadata().map_err(|_| FsError::RemoveDir)?;
        if meta.is_dir() {
            remove_tree_at(&child)?;
        } else {
            fs::remove_file(&child).map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => FsError::PathNotFound,
                _ => FsError::DeleteFile,
            })?;
        }
    }
    fs::remove_dir(dir).map_err(map_remove_dir)
}

fn map_remove_dir(err: io::Error) -> FsError {
    match err.kind() {
        io::ErrorKind::DirectoryNotEmpty => FsError::DirNotEmpty,
        io::ErrorKind::NotFound => FsError::PathNotFound,
        _ => FsError::RemoveDir,
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Copy, append-concatenate and move.

use std::fs::{self, File, OpenOptions};
use std::io;

use crate::core::drives::Volumes;
use crate::core::error::FsError;
use crate::core::path;

use super::tree;

/// Copy a single file. Directories are rejected; the destination's parent
/// directory is created when missing. With `overwrite` false an existing
/// destination fails with `File exists.`
pub fn copy_path(
    volumes: &Volumes,
    src: &str,
    dst: &str,
    overwrite: bool,
) -> Result<(), FsError> {
    if src.is_empty() || dst.is_empty() {
        return Err(FsError::Syntax);
    }
    let src_host = volumes.resolve(src)?;
    let dst_host = volumes.resolve(dst)?;

    let src_meta = fs::metadata(&src_host).map_err(|_| FsError::FileNotFound)?;
    if src_meta.is_dir() {
        return Err(FsError::InvalidDirectory);
    }

    let dst_parent = path::parent(dst);
    if dst_parent != path::strip_trailing(dst) {
        let parent_host = volumes.resolve(dst_parent)?;
        if fs::metadata(&parent_host).is_err() {
            tree::create_dir_path(volumes, dst_parent)?;
        }
    }

    if !overwrite && fs::metadata(&dst_host).is_ok() {
        return Err(FsError::FileExists);
    }
    fs::copy(&src_host, &dst_host).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => FsError::PathNotFound,
        _ => FsError::CopyFile,
    })?;
    Ok(())
}

/// Concatenate sources into `dest`: the first source is copied, the rest are
/// appended in order, leaving no separators between them.
pub fn append_files(volumes: &Volumes, sources: &[String], dest: &str) -> Result<(), FsError> {
    let Some((first, rest)) = sources.split_first() else {
        return Err(FsError::Syntax);
    };
    copy_path(volumes, first, dest, true)?;

    let dest_host = volumes.resolve(dest)?;
    let mut out = OpenOptions::new()
        .append(true)
        .open(&dest_host)
        .map_err(|_| FsError::OpenAppend)?;
    for src in rest {
        let src_host = volumes.resolve(src)?;
        // Directories open fine on unix; reject them before copying.
        let meta = fs::metadata(&src_host).map_err(|_| FsError::FileNotFound)?;
        if meta.is_dir() {
            return Err(FsError::FileNotFound);
        }
        let mut input = File::open(&src_host).map_err(|_| FsError::FileNotFound)?;
        io::copy(&mut input, &mut out).map_err(|_| FsError::WriteDest)?;
    }
    Ok(())
}

/// Move (rename) a file or directory. Overwriting an existing destination
/// file requires `overwrite` and is done as an explicit delete followed by
/// the rename; an existing destination directory is always rejected.
pub fn move_path(
    volumes: &Volumes,
    src: &str,
    dst: &str,
    overwrite: bool,
) -> Result<(), FsError> {
    if src.is_empty() || dst.is_empty() {
        return Err(FsError::Syntax);
    }
    let src_host = volumes.resolve(src)?;
    let dst_host = volumes.resolve(dst)?;

    let src_meta = fs::metadata(&src_host).map_err(|_| FsError::FileNotFound)?;
    let dst_meta = fs::metadata(&dst_host).ok();

    if let Some(dst_meta) = dst_meta {
        if src_meta.is_dir() {
            return if dst_meta.is_dir() {
                Err(FsError::AlreadyExists)
            } else {
                Err(FsError::InvalidDirectory)
            };
        }
        if dst_meta.is_dir() {
            // Callers move into a directory by passing dst\filename.
            return Err(FsError::AlreadyExists);
        }
        if !overwrite {
            return Err(FsError::FileExists);
        }
        fs::remove_file(&dst_host).map_err(|err| match err.kind() {
            io::ErrorKind::PermissionDenied => FsError::AccessDenied,
            _ => FsError::FileExists,
        })?;
    }

    fs::rename(&src_host, &dst_host).map_err(|err| match err.kind() {
        io::ErrorKind::AlreadyExists => FsError::FileExists,
        io::ErrorKind::NotFound => FsError::PathNotFound,
        io::ErrorKind::PermissionDenied => FsError::AccessDenied,
        _ => FsError::MoveFile,
    })?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testfs::TempRoot;

    fn fixture() -> TempRoot {
        let tmp = TempRoot::new("transfer");
        tmp.mkdrive("HDD0-E");
        tmp.write("HDD0-E/a.txt", "alpha");
        tmp.write("HDD0-E/b.txt", "beta");
        tmp
    }

    #[test]
    fn test_copy_creates_missing_parent() {
        let tmp = fixture();
        copy_path(&tmp.volumes(), "HDD0-E\\a.txt", "HDD0-E\\new\\deep\\a.txt", true).unwrap();
        assert_eq!(tmp.read("HDD0-E/new/deep/a.txt"), "alpha");
    }

    #[test]
    fn test_copy_no_overwrite_fails_on_existing() {
        let tmp = fixture();
        let volumes = tmp.volumes();
        assert_eq!(
            copy_path(&volumes, "HDD0-E\\a.txt", "HDD0-E\\b.txt", false),
            Err(FsError::FileExists)
        );
        copy_path(&volumes, "HDD0-E\\a.txt", "HDD0-E\\b.txt", true).unwrap();
        assert_eq!(tmp.read("HDD0-E/b.txt"), "alpha");
    }

    #[test]
    fn test_copy_rejects_directory_source() {
        let tmp = fixture();
        tmp.mkdir("HDD0-E/sub");
        assert_eq!(
            copy_path(&tmp.volumes(), "HDD0-E\\sub", "HDD0-E\\out", true),
            Err(FsError::InvalidDirectory)
        );
        assert_eq!(
            copy_path(&tmp.volumes(), "HDD0-E\\nope.txt", "HDD0-E\\out", true),
            Err(FsError::FileNotFound)
        );
    }

    #[test]
    fn test_append_concatenates_without_separator() {
        let tmp = fixture();
        tmp.write("HDD0-E/c.txt", "gamma");
        let sources = vec![
            "HDD0-E\\a.txt".to_string(),
            "HDD0-E\\b.txt".to_string(),
            "HDD0-E\\c.txt".to_string(),
        ];
        append_files(&tmp.volumes(), &sources, "HDD0-E\\all.txt").unwrap();
        assert_eq!(tmp.read("HDD0-E/all.txt"), "alphabetagamma");
    }

    #[test]
    fn test_append_missing_source_fails() {
        let tmp = fixture();
        let sources = vec!["HDD0-E\\a.txt".to_string(), "HDD0-E\\nope.txt".to_string()];
        assert_eq!(
            append_files(&tmp.volumes(), &sources, "HDD0-E\\all.txt"),
            Err(FsError::FileNotFound)
        );
    }

    #[test]
    fn test_append_directory_source_fails() {
        let tmp = fixture();
        tmp.mkdir("HDD0-E/sub");
        let sources = vec!["HDD0-E\\a.txt".to_string(), "HDD0-E\\sub".to_string()];
        assert_eq!(
            append_files(&tmp.volumes(), &sources, "HDD0-E\\all.txt"),
            Err(FsError::FileNotFound)
        );
    }

    #[test]
    fn test_move_renames_file() {
        let tmp = fixture();
        move_path(&tmp.volumes(), "HDD0-E\\a.txt", "HDD0-E\\moved.txt", false).unwrap();
        assert!(!tmp.0.join("HDD0-E/a.txt").exists());
        assert_eq!(tmp.read("HDD0-E/moved.txt"), "alpha");
    }

    #[test]
    fn test_move_overwrite_gate() {
        let tmp = fixture();
        let volumes = tmp.volumes();
        assert_eq!(
            move_path(&volumes, "HDD0-E\\a.txt", "HDD0-E\\b.txt", false),
            Err(FsError::FileExists)
        );
        move_path(&volumes, "HDD0-E\\a.txt", "HDD0-E\\b.txt", true).unwrap();
        assert_eq!(tmp.read("HDD0-E/b.txt"), "alpha");
    }

    #[test]
    fn test_move_onto_directory_rejected() {
        let tmp = fixture();
        tmp.mkdir("HDD0-E/sub");
        assert_eq!(
            move_path(&tmp.volumes(), "HDD0-E\\a.txt", "HDD0-E\\sub", false),
            Err(FsError::AlreadyExists)
        );
    }

    #[test]
    fn test_move_directory_rename() {
        let tmp = fixture();
        tmp.write("HDD0-E/sub/inner.txt", "x");
        move_path(&tmp.volumes(), "HDD0-E\\sub", "HDD0-E\\renamed", false).unwrap();
        assert_eq!(tmp.read("HDD0-E/renamed/inner.txt"), "x");
    }
}

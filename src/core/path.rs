//! Path resolution.
//!
//! Paths exist in two string forms:
//!
//! - **internal**: `DRIVE\sub\dir\` — what `ShellState.current_dir` stores
//!   and what every fs operation receives. Listing-style consumers keep the
//!   trailing separator; file-style consumers strip it.
//! - **native**: `DRIVE:\sub\dir` — produced by [`to_native`], the form the
//!   volume layer maps onto host paths and the form shown in prompts and
//!   listing headers.
//!
//! [`resolve`] turns a user-typed path argument into an internal path,
//! mounting the named drive as a side effect when the argument carries a
//! `DRIVE:` prefix.

use super::drives::Volumes;
use super::error::FsError;

/// Resolve a user-typed path argument against the current directory.
///
/// Rules, in order:
/// 1. An argument containing `:` names a drive: the part before the colon
///    selects (and mounts) the drive, the remainder is applied beneath its
///    root. An empty drive part falls back to the current directory.
/// 2. `.` is the current directory.
/// 3. `..` pops one segment, never rising above the drive root.
/// 4. Anything else is appended to the current directory; embedded `\`, `/`,
///    `.` and `..` segments are normalized along the way.
///
/// # Returns
///
/// The internal path with a trailing `\`. `Err(DriveNotFound)` when a named
/// drive is unknown or fails to mount.
pub fn resolve(arg: &str, current: &str, volumes: &Volumes) -> Result<String, FsError> {
    let mut segments: Vec<String>;

    if let Some((drive_part, rest)) = arg.split_once(':') {
        if drive_part.is_empty() {
            segments = split_segments(current);
        } else {
            let Some(canonical) = volumes.canonical_name(drive_part) else {
                return Err(FsError::DriveNotFound);
            };
            if !volumes.mount(canonical) {
                return Err(FsError::DriveNotFound);
            }
            segments = vec![canonical.to_string()];
        }
        apply(&mut segments, rest);
    } else {
        segments = split_segments(current);
        apply(&mut segments, arg);
    }

    let mut out = segments.join("\\");
    out.push('\\');
    Ok(out)
}

/// Apply a relative fragment to a segment stack. The first element is the
/// drive name and is never popped.
fn apply(segments: &mut Vec<String>, fragment: &str) {
    for part in fragment.split(['\\', '/']).filter(|s| !s.is_empty()) {
        match part {
            "." => {}
            ".." => {
                if segments.len() > 1 {
                    segments.pop();
                }
            }
            _ => segments.push(part.to_string()),
        }
    }
}

fn split_segments(path: &str) -> Vec<String> {
    path.split(['\\', '/'])
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Drop a trailing separator, if any.
pub fn strip_trailing(path: &str) -> &str {
    path.trim_end_matches(['\\', '/'])
}

/// Convert an internal path to its native form by inserting `:` after the
/// drive segment. A bare drive name becomes `DRIVE:\`.
pub fn to_native(internal: &str) -> String {
    match internal.split_once('\\') {
        Some((drive, rest)) => format!("{drive}:\\{rest}"),
        None => format!("{internal}:\\"),
    }
}

/// First segment of an internal path (the drive name).
pub fn drive_of(internal: &str) -> &str {
    internal.split(['\\', '/']).next().unwrap_or(internal)
}

/// Last segment of an internal path, ignoring any trailing separator.
pub fn file_name(internal: &str) -> &str {
    strip_trailing(internal)
        .rsplit(['\\', '/'])
        .next()
        .unwrap_or("")
}

/// Everything up to (not including) the last segment, without a trailing
/// separator. A bare drive name is its own parent.
pub fn parent(internal: &str) -> &str {
    let stripped = strip_trailing(internal);
    match stripped.rfind(['\\', '/']) {
        Some(idx) => &stripped[..idx],
        None => stripped,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testfs::TempRoot;

    fn fixture() -> TempRoot {
        let tmp = TempRoot::new("path");
        tmp.mkdrive("HDD0-E");
        tmp.mkdrive("HDD0-C");
        tmp
    }

    #[test]
    fn test_resolve_relative_append() {
        let tmp = fixture();
        let volumes = tmp.volumes();
        assert_eq!(
            resolve("games", "HDD0-E\\", &volumes).unwrap(),
            "HDD0-E\\games\\"
        );
        assert_eq!(
            resolve("a\\b", "HDD0-E\\", &volumes).unwrap(),
            "HDD0-E\\a\\b\\"
        );
    }

    #[test]
    fn test_resolve_dot_and_dotdot() {
        let tmp = fixture();
        let volumes = tmp.volumes();
        assert_eq!(
            resolve(".", "HDD0-E\\games\\", &volumes).unwrap(),
            "HDD0-E\\games\\"
        );
        assert_eq!(
            resolve("..", "HDD0-E\\games\\", &volumes).unwrap(),
            "HDD0-E\\"
        );
        // Never rises above the drive root.
        assert_eq!(resolve("..", "HDD0-E\\", &volumes).unwrap(), "HDD0-E\\");
        assert_eq!(
            resolve("..\\..\\..", "HDD0-E\\a\\b\\", &volumes).unwrap(),
            "HDD0-E\\"
        );
    }

    #[test]
    fn test_resolve_drive_prefix_mounts_and_rebases() {
        let tmp = fixture();
        let volumes = tmp.volumes();
        assert_eq!(
            resolve("HDD0-C:\\apps", "HDD0-E\\games\\", &volumes).unwrap(),
            "HDD0-C\\apps\\"
        );
        assert_eq!(
            resolve("hdd0-c:", "HDD0-E\\", &volumes).unwrap(),
            "HDD0-C\\"
        );
    }

    #[test]
    fn test_resolve_unknown_or_unmountable_drive() {
        let tmp = fixture();
        let volumes = tmp.volumes();
        assert_eq!(
            resolve("NOPE:\\x", "HDD0-E\\", &volumes),
            Err(FsError::DriveNotFound)
        );
        // Registered but absent from the volume root.
        assert_eq!(
            resolve("HDD1-C:\\x", "HDD0-E\\", &volumes),
            Err(FsError::DriveNotFound)
        );
    }

    #[test]
    fn test_resolve_empty_drive_part_keeps_current() {
        let tmp = fixture();
        let volumes = tmp.volumes();
        assert_eq!(
            resolve(":\\x", "HDD0-E\\games\\", &volumes).unwrap(),
            "HDD0-E\\games\\x\\"
        );
    }

    #[test]
    fn test_to_native() {
        assert_eq!(to_native("HDD0-E\\games\\"), "HDD0-E:\\games\\");
        assert_eq!(to_native("HDD0-E\\a\\b.txt"), "HDD0-E:\\a\\b.txt");
        assert_eq!(to_native("HDD0-E"), "HDD0-E:\\");
    }

    #[test]
    fn test_segment_accessors() {
        assert_eq!(drive_of("HDD0-E\\a\\b\\"), "HDD0-E");
        assert_eq!(file_name("HDD0-E\\a\\b.txt"), "b.txt");
        assert_eq!(file_name("HDD0-E\\a\\"), "a");
        assert_eq!(parent("HDD0-E\\a\\b.txt"), "HDD0-E\\a");
        assert_eq!(parent("HDD0-E"), "HDD0-E");
    }
}

//! Drive registry and volume access.
//!
//! A static table maps logical drive names (`HDD0-E`, `DVD-ROM`, `MMU0`..
//! `MMU7`) to their backing devices. On the host, the console's device
//! namespace is modeled by a configurable *volume root* directory:
//!
//! - logical drive `NAME` lives at `<root>/NAME`
//! - device paths live under `<root>/.devices/...` (lower-cased, `\` -> `/`)
//!
//! Mounting is kind-specific:
//! - Hard disks are considered mounted when the free-space query on the
//!   drive root succeeds.
//! - Optical drives are unmounted first, then re-linked: `<root>/NAME`
//!   becomes a symlink to the device directory. The mount succeeds once the
//!   link exists, regardless of tray state.
//! - Memory units are slot-presence checks; mounting has no side effects.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::error::FsError;
use super::path;

/// Backing device category for a drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveKind {
    HardDisk,
    Optical,
    MemoryUnit,
}

/// One row of the drive table.
#[derive(Debug, Clone, Copy)]
pub struct DriveEntry {
    pub name: &'static str,
    pub kind: DriveKind,
    pub device: &'static str,
}

/// Nominal capacity of a hard-disk partition volume.
const HARD_DISK_CAPACITY: u64 = 8 * 1024 * 1024 * 1024;
/// Nominal capacity of a memory-unit volume.
const MEMORY_UNIT_CAPACITY: u64 = 8 * 1024 * 1024;

/// All known drives. Names are unique case-insensitively.
pub static DRIVE_TABLE: &[DriveEntry] = &[
    entry("DVD-ROM", DriveKind::Optical, "\\Device\\Cdrom0"),
    entry("HDD0-C", DriveKind::HardDisk, "\\Device\\Harddisk0\\Partition2"),
    entry("HDD0-E", DriveKind::HardDisk, "\\Device\\Harddisk0\\Partition1"),
    entry("HDD0-F", DriveKind::HardDisk, "\\Device\\Harddisk0\\Partition6"),
    entry("HDD0-G", DriveKind::HardDisk, "\\Device\\Harddisk0\\Partition7"),
    entry("HDD0-H", DriveKind::HardDisk, "\\Device\\Harddisk0\\Partition8"),
    entry("HDD0-I", DriveKind::HardDisk, "\\Device\\Harddisk0\\Partition9"),
    entry("HDD0-J", DriveKind::HardDisk, "\\Device\\Harddisk0\\Partition10"),
    entry("HDD0-K", DriveKind::HardDisk, "\\Device\\Harddisk0\\Partition11"),
    entry("HDD0-L", DriveKind::HardDisk, "\\Device\\Harddisk0\\Partition12"),
    entry("HDD0-M", DriveKind::HardDisk, "\\Device\\Harddisk0\\Partition13"),
    entry("HDD0-N", DriveKind::HardDisk, "\\Device\\Harddisk0\\Partition14"),
    entry("HDD0-X", DriveKind::HardDisk, "\\Device\\Harddisk0\\Partition3"),
    entry("HDD0-Y", DriveKind::HardDisk, "\\Device\\Harddisk0\\Partition4"),
    entry("HDD0-Z", DriveKind::HardDisk, "\\Device\\Harddisk0\\Partition5"),
    entry("HDD1-C", DriveKind::HardDisk, "\\Device\\Harddisk1\\Partition2"),
    entry("HDD1-E", DriveKind::HardDisk, "\\Device\\Harddisk1\\Partition1"),
    entry("HDD1-F", DriveKind::HardDisk, "\\Device\\Harddisk1\\Partition6"),
    entry("HDD1-G", DriveKind::HardDisk, "\\Device\\Harddisk1\\Partition7"),
    entry("HDD1-H", DriveKind::HardDisk, "\\Device\\Harddisk1\\Partition8"),
    entry("HDD1-I", DriveKind::HardDisk, "\\Device\\Harddisk1\\Partition9"),
    entry("HDD1-J", DriveKind::HardDisk, "\\Device\\Harddisk1\\Partition10"),
    entry("HDD1-K", DriveKind::HardDisk, "\\Device\\Harddisk1\\Partition11"),
    entry("HDD1-L", DriveKind::HardDisk, "\\Device\\Harddisk1\\Partition12"),
    entry("HDD1-M", DriveKind::HardDisk, "\\Device\\Harddisk1\\Partition13"),
    entry("HDD1-N", DriveKind::HardDisk, "\\Device\\Harddisk1\\Partition14"),
    entry("HDD1-X", DriveKind::HardDisk, "\\Device\\Harddisk1\\Partition3"),
    entry("HDD1-Y", DriveKind::HardDisk, "\\Device\\Harddisk1\\Partition4"),
    entry("HDD1-Z", DriveKind::HardDisk, "\\Device\\Harddisk1\\Partition5"),
    entry("MMU0", DriveKind::MemoryUnit, "H"),
    entry("MMU1", DriveKind::MemoryUnit, "I"),
    entry("MMU2", DriveKind::MemoryUnit, "J"),
    entry("MMU3", DriveKind::MemoryUnit, "K"),
    entry("MMU4", DriveKind::MemoryUnit, "L"),
    entry("MMU5", DriveKind::MemoryUnit, "M"),
    entry("MMU6", DriveKind::MemoryUnit, "N"),
    entry("MMU7", DriveKind::MemoryUnit, "O"),
];

const fn entry(name: &'static str, kind: DriveKind, device: &'static str) -> DriveEntry {
    DriveEntry { name, kind, device }
}

/// Normalize a drive name: uppercase, with the single-letter memory-unit
/// aliases `H`..`O` rewritten to `MMU0`..`MMU7`.
pub fn normalize_drive_name(name: &str) -> String {
    let upper = name.to_uppercase();
    let mut chars = upper.chars();
    if let (Some(c), None) = (chars.next(), chars.next())
        && ('H'..='O').contains(&c)
    {
        return format!("MMU{}", c as u32 - 'H' as u32);
    }
    upper
}

/// Look up a drive by (possibly aliased, case-insensitive) name.
pub fn find_drive(name: &str) -> Option<&'static DriveEntry> {
    if name.is_empty() {
        return None;
    }
    let key = normalize_drive_name(name);
    DRIVE_TABLE.iter().find(|ent| ent.name == key)
}

/// The set of volumes reachable under one volume root.
#[derive(Debug, Clone)]
pub struct Volumes {
    root: PathBuf,
}

impl Volumes {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Canonical (table) name for a drive, if registered.
    pub fn canonical_name(&self, name: &str) -> Option<&'static str> {
        find_drive(name).map(|ent| ent.name)
    }

    /// Host directory backing a logical drive.
    pub fn drive_root(&self, canonical: &str) -> PathBuf {
        self.root.join(canonical)
    }

    /// Host directory backing a physical device path.
    fn device_host(&self, ent: &DriveEntry) -> PathBuf {
        let mut path = self.root.join(".devices");
        for segment in ent.device.split('\\').filter(|s| !s.is_empty()) {
            path.push(segment.to_lowercase());
        }
        path
    }

    /// Mount a drive. Unknown names fail with no side effects.
    pub fn mount(&self, name: &str) -> bool {
        let Some(ent) = find_drive(name) else {
            debug!("mount: unknown drive {name:?}");
            return false;
        };
        match ent.kind {
            DriveKind::HardDisk => self.free_space(ent.name).is_ok(),
            DriveKind::MemoryUnit => self.device_host(ent).is_dir(),
            DriveKind::Optical => {
                self.unmount_optical(ent);
                let link = self.drive_root(ent.name);
                let target = self.device_host(ent);
                match make_drive_link(&target, &link) {
                    Ok(()) => true,
                    Err(err) => {
                        warn!("mount: cannot link {}: {err}", ent.name);
                        false
                    }
                }
            }
        }
    }

    /// Unmount a drive. Hard disks and memory units have nothing to tear
    /// down; optical drives drop their symlink.
    pub fn unmount(&self, name: &str) -> bool {
        let Some(ent) = find_drive(name) else {
            return false;
        };
        match ent.kind {
            DriveKind::HardDisk | DriveKind::MemoryUnit => true,
            DriveKind::Optical => self.unmount_optical(ent),
        }
    }

    fn unmount_optical(&self, ent: &DriveEntry) -> bool {
        let link = self.drive_root(ent.name);
        match fs::symlink_metadata(&link) {
            Ok(meta) if meta.file_type().is_symlink() => fs::remove_file(&link).is_ok(),
            // A real directory is not ours to remove.
            Ok(_) => false,
            Err(_) => false,
        }
    }

    /// Map a native path (`NAME:\sub\dir`) to its host path. This is the
    /// single choke point every file-system operation passes through.
    pub fn host_path(&self, native: &str) -> Result<PathBuf, FsError> {
        let Some((drive, rest)) = native.split_once(':') else {
            return Err(FsError::Syntax);
        };
        let Some(canonical) = self.canonical_name(drive) else {
            return Err(FsError::DriveNotFound);
        };
        let mut host = self.drive_root(canonical);
        for segment in rest.split(['\\', '/']).filter(|s| !s.is_empty()) {
            host.push(segment);
        }
        Ok(host)
    }

    /// Map an internal path (`NAME\sub\dir`) to its host path.
    pub fn resolve(&self, internal: &str) -> Result<PathBuf, FsError> {
        self.host_path(&path::to_native(internal))
    }

    /// Free bytes on a drive: nominal capacity minus scanned usage,
    /// saturating at zero. Fails when the drive root is not a directory.
    pub fn free_space(&self, name: &str) -> io::Result<u64> {
        let Some(ent) = find_drive(name) else {
            return Err(io::Error::new(io::ErrorKind::NotFound, "unknown drive"));
        };
        let root = self.drive_root(ent.name);
        if !fs::metadata(&root)?.is_dir() {
            return Err(io::Error::new(io::ErrorKind::NotADirectory, "not a volume"));
        }
        let capacity = match ent.kind {
            DriveKind::HardDisk => HARD_DISK_CAPACITY,
            DriveKind::MemoryUnit => MEMORY_UNIT_CAPACITY,
            // Read-only media reports no free space.
            DriveKind::Optical => return Ok(0),
        };
        Ok(capacity.saturating_sub(dir_usage(&root)))
    }
}

/// Recursively sum file sizes under a directory. Unreadable entries are
/// skipped so one bad file cannot wedge the free-space query.
fn dir_usage(dir: &Path) -> u64 {
    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };
    let mut total = 0u64;
    for entry in entries.flatten() {
        let Ok(meta) = entry.metadata() else {
            continue;
        };
        if meta.is_dir() {
            total += dir_usage(&entry.path());
        } else {
            total += meta.len();
        }
    }
    total
}

#[cfg(unix)]
fn make_drive_link(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn make_drive_link(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}

// ============================================================================
// Tests
// ============================================================================

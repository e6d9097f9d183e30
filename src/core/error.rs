//! Error types for shell and file-system operations.
//!
//! Each variant's `Display` string is the exact message shown to the user,
//! so handlers can render errors with a plain `format!("{err}\n")`.

use std::io;

use thiserror::Error;

/// Errors produced by path resolution and file-system operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    #[error("The syntax of the command is incorrect.")]
    Syntax,

    #[error("The system cannot find the drive specified.")]
    DriveNotFound,

    #[error("The system cannot find the path specified.")]
    PathNotFound,

    #[error("The system cannot find the file specified.")]
    FileNotFound,

    /// DIR / TYPE flavor of a missing entry.
    #[error("File Not Found")]
    NoSuchEntry,

    /// DEL flavor of a missing entry, echoing the name as given.
    #[error("Could Not Find {0}")]
    CouldNotFind(String),

    #[error("Access is denied.")]
    AccessDenied,

    #[error("File exists.")]
    FileExists,

    #[error("Cannot create a file when that file already exists.")]
    AlreadyExists,

    #[error("The directory is not empty.")]
    DirNotEmpty,

    #[error("The directory name is invalid.")]
    InvalidDirectory,

    #[error("File too large.")]
    FileTooLarge,

    #[error("Error reading directory")]
    ReadDir,

    #[error("Unable to create directory.")]
    CreateDir,

    #[error("Unable to remove directory.")]
    RemoveDir,

    #[error("Unable to delete file.")]
    DeleteFile,

    #[error("Unable to copy file.")]
    CopyFile,

    #[error("Unable to move file.")]
    MoveFile,

    #[error("Unable to open destination for append.")]
    OpenAppend,

    #[error("Unable to write destination.")]
    WriteDest,
}

impl FsError {
    /// Map an I/O error to a domain error, using `fallback` when the kind
    /// carries no specific meaning.
    pub fn from_io(err: &io::Error, fallback: FsError) -> FsError {
        match err.kind() {
            io::ErrorKind::NotFound => FsError::PathNotFound,
            io::ErrorKind::PermissionDenied => FsError::AccessDenied,
            io::ErrorKind::AlreadyExists => FsError::FileExists,
            _ => fallback,
        }
    }
}

/// Errors raised while loading the optional configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Read(#[from] io::Error),

    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Tests
// ============================================================================

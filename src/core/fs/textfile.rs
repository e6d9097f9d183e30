//! Capped text-file access for TYPE and EDIT.

use std::fs::{self, File};

use crate::core::drives::Volumes;
use crate::core::error::FsError;

/// Largest file TYPE or EDIT will load.
pub const MAX_TEXT_SIZE: u64 = 64 * 1024;
/// Line cap for the editor.
pub const MAX_EDIT_LINES: usize = 10_000;

/// Read a file for TYPE: NUL bytes become spaces, invalid UTF-8 is rendered
/// lossily. Missing files report `File Not Found`, directories
/// `Access is denied.`, oversized files `File too large.`
pub fn read_text(volumes: &Volumes, file_path: &str) -> Result<String, FsError> {
    let host = volumes.resolve(file_path)?;
    let meta = fs::metadata(&host).map_err(|_| FsError::NoSuchEntry)?;
    if meta.is_dir() {
        return Err(FsError::AccessDenied);
    }
    if meta.len() > MAX_TEXT_SIZE {
        return Err(FsError::FileTooLarge);
    }
    let mut bytes = fs::read(&host).map_err(|_| FsError::AccessDenied)?;
    for b in &mut bytes {
        if *b == 0 {
            *b = b' ';
        }
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Load a file as editor lines, creating it empty when absent. CR is
/// stripped so both LF and CRLF input split cleanly. The result always has
/// at least one line.
pub fn load_lines(volumes: &Volumes, file_path: &str) -> Result<Vec<String>, FsError> {
    let host = volumes.resolve(file_path)?;
    match fs::metadata(&host) {
        Err(_) => {
            File::create(&host).map_err(|err| FsError::from_io(&err, FsError::AccessDenied))?;
            return Ok(vec![String::new()]);
        }
        Ok(meta) => {
            if meta.is_dir() {
                return Err(FsError::AccessDenied);
            }
            if meta.len() > MAX_TEXT_SIZE {
                return Err(FsError::FileTooLarge);
            }
        }
    }

    let content = fs::read_to_string(&host).map_err(|_| FsError::AccessDenied)?;
    let mut lines: Vec<String> = content
        .split('\n')
        .take(MAX_EDIT_LINES)
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect();
    // A trailing newline produces a phantom empty line; drop it.
    if lines.len() > 1 && lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    Ok(lines)
}

/// Write editor lines back with CRLF endings.
pub fn save_lines(volumes: &Volumes, file_path: &str, lines: &[String]) -> Result<(), FsError> {
    let host = volumes.resolve(file_path)?;
    let mut content = String::new();
    for line in lines {
        content.push_str(line);
        content.push_str("\r\n");
    }
    fs::write(&host, content).map_err(|err| FsError::from_io(&err, FsError::AccessDenied))
}

// ============================================================================
// Tests
// ============================================================================

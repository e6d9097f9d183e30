//! Directory listing for DIR.

use std::fs;

use log::debug;

use super::{DirEntry, compare_entries, passes_attribute_filter};
use crate::core::drives::Volumes;
use crate::core::error::FsError;
use crate::core::path;
use crate::utils::format::{file_time, group_digits, pad_left};

const WIDE_COLUMNS: usize = 5;
const WIDE_COL_WIDTH: usize = 14;

/// Options for one listing, straight from the DIR switches.
#[derive(Debug, Clone, Default)]
pub struct DirOptions {
    pub wide: bool,
    /// `/A` attribute filter letters, empty for none.
    pub attrib: String,
    pub sort: super::SortKey,
    pub sort_reverse: bool,
    /// `--- More ---` marker interval in entry lines; 0 disables paging.
    pub page_lines: usize,
}

/// Produce the DIR output for a directory.
///
/// # Arguments
///
/// * `dir_path` - Internal path of the directory, trailing separator ok
/// * `options` - Filter, sort and layout options
///
/// # Returns
///
/// The full listing text: volume header, entry lines, and the summary. The
/// `bytes free` line is omitted when the free-space query fails.
pub fn list_directory(
    volumes: &Volumes,
    dir_path: &str,
    options: &DirOptions,
) -> Result<String, FsError> {
    let host = volumes.resolve(dir_path)?;
    let read = fs::read_dir(&host).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound | std::io::ErrorKind::NotADirectory => FsError::NoSuchEntry,
        _ => FsError::ReadDir,
    })?;

    let mut entries: Vec<DirEntry> = Vec::new();
    for item in read {
        let item = item.map_err(|_| FsError::ReadDir)?;
        let Some(entry) = DirEntry::from_fs(&item) else {
            debug!("dir: cannot stat {:?}, skipping", item.path());
            continue;
        };
        if passes_attribute_filter(&entry, &options.attrib) {
            entries.push(entry);
        }
    }
    entries.sort_by(|a, b| compare_entries(a, b, options.sort, options.sort_reverse));

    let native = path::to_native(dir_path);
    let mut out = format!(
        " Volume in drive {} has no label.\n Volume Serial Number is 0000-0000\n\n Directory of {}\n\n",
        path::drive_of(dir_path),
        native
    );

    let mut dir_count = 0u64;
    let mut file_count = 0u64;
    let mut total_bytes = 0u64;
    let mut entry_lines = 0usize;

    if options.wide {
        let mut col = 0;
        for entry in &entries {
            if entry.is_dir {
                dir_count += 1;
            } else {
                file_count += 1;
                total_bytes += entry.size;
            }
            let mut cell: String = entry.name.chars().take(WIDE_COL_WIDTH).collect();
            while cell.len() < WIDE_COL_WIDTH {
                cell.push(' ');
            }
            out.push_str(&cell);
            col += 1;
            if col >= WIDE_COLUMNS {
                out.push('\n');
                col = 0;
                entry_lines += 1;
                if options.page_lines > 0 && entry_lines % options.page_lines == 0 {
                    out.push_str("--- More ---\n");
                }
            }
        }
        if col != 0 {
            out.push('\n');
        }
    } else {
        for entry in &entries {
            if entry.is_dir {
                dir_count += 1;
                out.push_str(&format!(
                    "{}    <DIR>          {}\n",
                    file_time(entry.modified),
                    entry.name
                ));
            } else {
                file_count += 1;
                total_bytes += entry.size;
                out.push_str(&format!(
                    "{} {} {}\n",
                    file_time(entry.modified),
                    pad_left(&group_digits(entry.size), 16),
                    entry.name
                ));
            }
            entry_lines += 1;
            if options.page_lines > 0 && entry_lines % options.page_lines == 0 {
                out.push_str("--- More ---\n");
            }
        }
    }

    out.push_str(&format!(
        "               {} File(s) {} bytes\n",
        file_count,
        group_digits(total_bytes)
    ));
    match volumes.free_space(path::drive_of(dir_path)) {
        Ok(free) => out.push_str(&format!(
            "               {} Dir(s)  {} bytes free\n",
            dir_count,
            group_digits(free)
        )),
        Err(_) => out.push_str(&format!("               {} Dir(s)\n", dir_count)),
    }
    Ok(out)
}

// ============================================================================
// Tests
// ============================================================================

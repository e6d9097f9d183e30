//! Formatting utilities for listing output.
//!
//! Provides:
//! - Comma-grouped byte counts (`1234567` -> `"1,234,567"`)
//! - DOS-style file timestamps (`MM/DD/YYYY  hh:mm AM`)

use std::time::SystemTime;

use chrono::{DateTime, Datelike, Local, Timelike};

/// Format a byte count with comma grouping every three digits.
///
/// # Arguments
///
/// * `value` - The byte count to format
///
/// # Returns
///
/// The grouped decimal string, e.g. `1234567` -> `"1,234,567"`.
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Right-align a string within `width` columns, padding with spaces.
pub fn pad_left(text: &str, width: usize) -> String {
    if text.len() >= width {
        text.to_string()
    } else {
        format!("{}{}", " ".repeat(width - text.len()), text)
    }
}

/// Format a file modification time as `MM/DD/YYYY  hh:mm AM`.
///
/// Times before the Unix epoch fall back to the FAT epoch,
/// `01/01/1980  12:00 AM`.
pub fn file_time(time: SystemTime) -> String {
    if time.duration_since(SystemTime::UNIX_EPOCH).is_err() {
        return "01/01/1980  12:00 AM".to_string();
    }
    let local: DateTime<Local> = time.into();
    let (hour, meridiem) = clock_12h(local.hour());
    format!(
        "{:02}/{:02}/{:04}  {:2}:{:02} {}",
        local.month(),
        local.day(),
        local.year(),
        hour,
        local.minute(),
        meridiem
    )
}

/// Convert a 24-hour clock hour to its 12-hour form with meridiem.
pub fn clock_12h(hour: u32) -> (u32, &'static str) {
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    (hour, meridiem)
}

// ============================================================================
// Tests
// ============================================================================

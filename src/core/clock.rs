//! Settable shell clock and date/time parsing.
//!
//! An unprivileged process cannot set the host clock, so DATE and TIME store
//! a signed offset against the system clock instead. Every read goes through
//! [`ShellClock::now`], so a set date or time stays visible for the life of
//! the process.

use std::cell::Cell;

use chrono::{DateTime, Datelike, Duration, Local, TimeZone, Timelike};

/// Clock reads and sets for the DATE/TIME commands.
#[derive(Debug, Default)]
pub struct ShellClock {
    offset_secs: Cell<i64>,
}

impl ShellClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current shell time: system time plus the stored offset.
    pub fn now(&self) -> DateTime<Local> {
        Local::now() + Duration::seconds(self.offset_secs.get())
    }

    /// Current date as `yyyy-mm-dd`.
    pub fn date_string(&self) -> String {
        let now = self.now();
        format!("{:04}-{:02}-{:02}", now.year(), now.month(), now.day())
    }

    /// Current time as `HH:MM:SS.cc`.
    pub fn time_string(&self) -> String {
        let now = self.now();
        format!(
            "{:02}:{:02}:{:02}.{:02}",
            now.hour(),
            now.minute(),
            now.second(),
            now.timestamp_subsec_millis() / 10
        )
    }

    /// Set the date, keeping the current time of day. Fails on dates the
    /// calendar rejects (e.g. February 31st).
    pub fn set_date(&self, year: i32, month: u32, day: u32) -> bool {
        let now = self.now();
        let Some(target) = Local
            .with_ymd_and_hms(year, month, day, now.hour(), now.minute(), now.second())
            .single()
        else {
            return false;
        };
        self.offset_secs
            .set((target - Local::now()).num_seconds());
        true
    }

    /// Set the time of day, keeping the current date.
    pub fn set_time(&self, hour: u32, minute: u32, second: u32) -> bool {
        let now = self.now();
        let Some(target) = Local
            .with_ymd_and_hms(now.year(), now.month(), now.day(), hour, minute, second)
            .single()
        else {
            return false;
        };
        self.offset_secs
            .set((target - Local::now()).num_seconds());
        true
    }

    /// Parse and apply a user-entered date.
    pub fn set_date_from_str(&self, input: &str) -> bool {
        match parse_date(input) {
            Some((year, month, day)) => self.set_date(year, month, day),
            None => false,
        }
    }

    /// Parse and apply a user-entered time.
    pub fn set_time_from_str(&self, input: &str) -> bool {
        match parse_time(input) {
            Some((hour, minute, second)) => self.set_time(hour, minute, second),
            None => false,
        }
    }
}

/// Parse a date in `yy[yy]-mm-dd` or `mm-dd-yy[yy]` form, with `-`, `/` or
/// space separators. Two-digit years 70..99 mean 19xx, the rest 20xx.
/// Accepted years span 1980..=2099.
pub fn parse_date(input: &str) -> Option<(i32, u32, u32)> {
    let fields = split_fields(input, &['-', '/', ' '])?;
    let [a, b, c] = fields[..] else {
        return None;
    };
    // Year-first wins when both readings are plausible.
    check_date(a, b, c).or_else(|| check_date(c, a, b))
}

fn check_date(year: u32, month: u32, day: u32) -> Option<(i32, u32, u32)> {
    let year = match year {
        70..=99 => year + 1900,
        0..=69 => year + 2000,
        y => y,
    };
    if (1980..=2099).contains(&year) && (1..=12).contains(&month) && (1..=31).contains(&day) {
        Some((year as i32, month, day))
    } else {
        None
    }
}

/// Parse a time in `HH:MM[:SS]` form with `:` or `.` separators and an
/// optional `AM`/`PM` suffix.
pub fn parse_time(input: &str) -> Option<(u32, u32, u32)> {
    let trimmed = input.trim();
    let upper = trimmed.to_uppercase();
    let (digits, meridiem) = if let Some(rest) = upper.strip_suffix("AM") {
        (rest.trim_end().to_string(), Some(false))
    } else if let Some(rest) = upper.strip_suffix("PM") {
        (rest.trim_end().to_string(), Some(true))
    } else {
        (upper, None)
    };

    let fields = split_fields(&digits, &[':', '.'])?;
    let (hour, minute, second) = match fields[..] {
        [h, m] => (h, m, 0),
        [h, m, s] => (h, m, s),
        _ => return None,
    };

    let hour = match meridiem {
        None => {
            if hour > 23 {
                return None;
            }
            hour
        }
        Some(pm) => {
            if !(1..=12).contains(&hour) {
                return None;
            }
            match (pm, hour) {
                (false, 12) => 0,
                (false, h) => h,
                (true, 12) => 12,
                (true, h) => h + 12,
            }
        }
    };

    if minute > 59 || second > 59 {
        return None;
    }
    Some((hour, minute, second))
}

/// Split on the given separators and parse every field as a number.
/// Non-numeric fields reject the whole input.
fn split_fields(input: &str, separators: &[char]) -> Option<Vec<u32>> {
    let mut fields = Vec::new();
    for part in input.trim().split(separators).filter(|s| !s.is_empty()) {
        fields.push(part.parse().ok()?);
    }
    if fields.is_empty() { None } else { Some(fields) }
}

// ============================================================================
// Tests
// ============================================================================

//! Release dates and the fixed English calendar name tables

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use std::fmt;

use crate::error::{Result, TagFormatError};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Years `{YYYY}` can render as exactly four digits
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// Calendar date a version was released on, with its derived weekday
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReleaseDate {
    date: NaiveDate,
}

impl ReleaseDate {
    /// Create a release date from year (0-9999), month (1-12) and day (1-31).
    ///
    /// Returns `None` when the combination is not a real calendar date or
    /// the year is out of range.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).and_then(ReleaseDate::checked)
    }

    fn checked(date: NaiveDate) -> Option<Self> {
        YEAR_RANGE
            .contains(&date.year())
            .then_some(ReleaseDate { date })
    }

    /// Parse `YYYY-MM-DD` or an RFC 3339 timestamp such as `2025-07-14T10:00:00Z`.
    ///
    /// Timestamps are converted to UTC before the calendar date is taken.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let date = match NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => DateTime::parse_from_rfc3339(input)
                .map(|dt| dt.with_timezone(&Utc).date_naive())
                .map_err(|e| {
                    TagFormatError::date(format!(
                        "'{}' is neither YYYY-MM-DD nor an RFC 3339 timestamp ({})",
                        input, e
                    ))
                })?,
        };
        ReleaseDate::checked(date).ok_or_else(|| {
            TagFormatError::date(format!(
                "'{}' has year {}, expected 0000-9999",
                input,
                date.year()
            ))
        })
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Month number, 1-12
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Day of month, 1-31
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.date.month0() as usize]
    }

    pub fn month_abbreviation(&self) -> &'static str {
        MONTH_ABBREVIATIONS[self.date.month0() as usize]
    }

    pub fn weekday_name(&self) -> &'static str {
        WEEKDAY_NAMES[self.weekday().num_days_from_monday() as usize]
    }

    pub fn weekday_abbreviation(&self) -> &'static str {
        WEEKDAY_ABBREVIATIONS[self.weekday().num_days_from_monday() as usize]
    }
}

impl TryFrom<NaiveDate> for ReleaseDate {
    type Error = TagFormatError;

    fn try_from(date: NaiveDate) -> Result<Self> {
        ReleaseDate::checked(date).ok_or_else(|| {
            TagFormatError::date(format!("year {} is outside 0000-9999", date.year()))
        })
    }
}

impl fmt::Display for ReleaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))
    }
}

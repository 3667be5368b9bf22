//! Time-of-day windows
//!
//! Parsing of "HH:MM" booking/discount times and same-day overlap.
//! Windows never wrap past midnight: a window whose end is not after its
//! start overlaps nothing.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse "HH:MM" (or "HH:MM:SS" as stored by the database) into minutes
/// since midnight. "24:00" is accepted as end of day.
pub fn parse_time_of_day(value: &str) -> Option<u32> {
    let value = value.trim();
    if value == "24:00" || value == "24:00:00" {
        return Some(MINUTES_PER_DAY);
    }
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
        .map(|t| t.hour() * 60 + t.minute())
}

/// Same-day time range in minutes since midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: u32,
    pub end: u32,
}

impl TimeWindow {
    /// Parse a start/end pair; `None` if either side is malformed
    pub fn parse(start: &str, end: &str) -> Option<Self> {
        Some(Self {
            start: parse_time_of_day(start)?,
            end: parse_time_of_day(end)?,
        })
    }

    /// Length in minutes (0 for empty or inverted windows)
    pub fn minutes(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Length in fractional hours
    pub fn hours(&self) -> Decimal {
        Decimal::from(self.minutes()) / Decimal::from(60)
    }

    /// Intersection with another window, if non-empty
    pub fn overlap(&self, other: &TimeWindow) -> Option<TimeWindow> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start < end {
            Some(TimeWindow { start, end })
        } else {
            None
        }
    }
}

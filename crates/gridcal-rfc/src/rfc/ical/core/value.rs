//! Input value shapes for the date, time, and date-time encoders.

use chrono::{Datelike, Timelike, Utc};

/// UTC/zone disposition of a time or date-time value.
///
/// Exactly one of the three forms holds: UTC (`Z` suffix), a named zone
/// (`TZID=` prefix), or floating local time (neither).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ZoneMarker {
    /// Floating local time.
    #[default]
    Floating,
    /// UTC; rendered as a trailing `Z`.
    Utc,
    /// Named zone identifier; rendered as a `TZID=<id>:` prefix.
    Zone(String),
}

impl From<bool> for ZoneMarker {
    fn from(utc: bool) -> Self {
        if utc { Self::Utc } else { Self::Floating }
    }
}

impl From<&str> for ZoneMarker {
    fn from(marker: &str) -> Self {
        match marker {
            "" => Self::Floating,
            "Z" => Self::Utc,
            id => Self::Zone(id.to_string()),
        }
    }
}

impl From<String> for ZoneMarker {
    fn from(marker: String) -> Self {
        match marker.as_str() {
            "" => Self::Floating,
            "Z" => Self::Utc,
            _ => Self::Zone(marker),
        }
    }
}

/// Input to the DATE encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// Already formatted per RFC 5545; passed through unchanged.
    Formatted(String),
    /// Decomposed calendar date. Components are not range-checked.
    Ymd { year: i32, month: u32, day: u32 },
}

impl DateInput {
    /// Builds the decomposed form.
    #[must_use]
    pub const fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self::Ymd { year, month, day }
    }
}

impl From<&str> for DateInput {
    fn from(formatted: &str) -> Self {
        Self::Formatted(formatted.to_string())
    }
}

impl From<String> for DateInput {
    fn from(formatted: String) -> Self {
        Self::Formatted(formatted)
    }
}

impl From<(i32, u32, u32)> for DateInput {
    fn from((year, month, day): (i32, u32, u32)) -> Self {
        Self::Ymd { year, month, day }
    }
}

impl From<chrono::NaiveDate> for DateInput {
    fn from(date: chrono::NaiveDate) -> Self {
        Self::Ymd {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

/// Input to the TIME encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeInput {
    /// Already formatted per RFC 5545; passed through unchanged.
    Formatted(String),
    /// Decomposed time of day. Components are not range-checked.
    Hms {
        hour: u32,
        minute: u32,
        second: u32,
        marker: ZoneMarker,
    },
}

impl TimeInput {
    /// Builds the decomposed form with a UTC/zone marker.
    #[must_use]
    pub fn hms(hour: u32, minute: u32, second: u32, marker: impl Into<ZoneMarker>) -> Self {
        Self::Hms {
            hour,
            minute,
            second,
            marker: marker.into(),
        }
    }
}

impl From<&str> for TimeInput {
    fn from(formatted: &str) -> Self {
        Self::Formatted(formatted.to_string())
    }
}

impl From<String> for TimeInput {
    fn from(formatted: String) -> Self {
        Self::Formatted(formatted)
    }
}

impl From<(u32, u32, u32)> for TimeInput {
    fn from((hour, minute, second): (u32, u32, u32)) -> Self {
        Self::hms(hour, minute, second, ZoneMarker::Floating)
    }
}

impl From<(u32, u32, u32, bool)> for TimeInput {
    fn from((hour, minute, second, utc): (u32, u32, u32, bool)) -> Self {
        Self::hms(hour, minute, second, utc)
    }
}

impl From<(u32, u32, u32, &str)> for TimeInput {
    fn from((hour, minute, second, marker): (u32, u32, u32, &str)) -> Self {
        Self::hms(hour, minute, second, marker)
    }
}

impl From<chrono::NaiveTime> for TimeInput {
    fn from(time: chrono::NaiveTime) -> Self {
        Self::hms(time.hour(), time.minute(), time.second(), ZoneMarker::Floating)
    }
}

/// Input to the DATE-TIME encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateTimeInput {
    /// Already formatted per RFC 5545; passed through unchanged.
    Formatted(String),
    /// Date-only form; encodes as a bare DATE.
    Date { year: i32, month: u32, day: u32 },
    /// Full date and time of day. Components are not range-checked.
    Full {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        marker: ZoneMarker,
    },
}

impl DateTimeInput {
    /// Builds the date-only form.
    #[must_use]
    pub const fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self::Date { year, month, day }
    }

    /// Builds the full form with a UTC/zone marker.
    #[must_use]
    pub fn full(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        marker: impl Into<ZoneMarker>,
    ) -> Self {
        Self::Full {
            year,
            month,
            day,
            hour,
            minute,
            second,
            marker: marker.into(),
        }
    }
}

impl From<&str> for DateTimeInput {
    fn from(formatted: &str) -> Self {
        Self::Formatted(formatted.to_string())
    }
}

impl From<String> for DateTimeInput {
    fn from(formatted: String) -> Self {
        Self::Formatted(formatted)
    }
}

impl From<(i32, u32, u32)> for DateTimeInput {
    fn from((year, month, day): (i32, u32, u32)) -> Self {
        Self::Date { year, month, day }
    }
}

impl From<(i32, u32, u32, u32, u32, u32)> for DateTimeInput {
    fn from((year, month, day, hour, minute, second): (i32, u32, u32, u32, u32, u32)) -> Self {
        Self::full(year, month, day, hour, minute, second, ZoneMarker::Floating)
    }
}

impl From<(i32, u32, u32, u32, u32, u32, bool)> for DateTimeInput {
    fn from(
        (year, month, day, hour, minute, second, utc): (i32, u32, u32, u32, u32, u32, bool),
    ) -> Self {
        Self::full(year, month, day, hour, minute, second, utc)
    }
}

impl From<(i32, u32, u32, u32, u32, u32, &str)> for DateTimeInput {
    fn from(
        (year, month, day, hour, minute, second, marker): (i32, u32, u32, u32, u32, u32, &str),
    ) -> Self {
        Self::full(year, month, day, hour, minute, second, marker)
    }
}

impl From<chrono::NaiveDate> for DateTimeInput {
    fn from(date: chrono::NaiveDate) -> Self {
        Self::Date {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl From<chrono::NaiveDateTime> for DateTimeInput {
    fn from(dt: chrono::NaiveDateTime) -> Self {
        Self::full(
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second(),
            ZoneMarker::Floating,
        )
    }
}

impl From<chrono::DateTime<Utc>> for DateTimeInput {
    fn from(dt: chrono::DateTime<Utc>) -> Self {
        Self::full(
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second(),
            ZoneMarker::Utc,
        )
    }
}

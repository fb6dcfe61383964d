//! DATE, TIME, and DATE-TIME value rendering (RFC 5545 §3.3.4, §3.3.5, §3.3.12).
//!
//! Numeric components are rendered as given; out-of-range values pass
//! through unvalidated.

use crate::rfc::ical::core::{DateInput, DateTimeInput, TimeInput, ZoneMarker};

/// Renders a DATE value as `YYYYMMDD`.
///
/// A preformatted string is returned unchanged. Month and day are
/// zero-padded to two digits; the year is rendered as given.
#[must_use]
pub fn encode_date(input: &DateInput) -> String {
    match input {
        DateInput::Formatted(formatted) => formatted.clone(),
        DateInput::Ymd { year, month, day } => format!("{year}{month:02}{day:02}"),
    }
}

/// Renders a TIME value as `HHMMSS`, with a `TZID=<id>:` prefix for a named
/// zone or a trailing `Z` for UTC. At most one of the two appears; neither
/// does for floating local time.
#[must_use]
pub fn encode_time(input: &TimeInput) -> String {
    match input {
        TimeInput::Formatted(formatted) => formatted.clone(),
        TimeInput::Hms {
            hour,
            minute,
            second,
            marker,
        } => {
            let mut out = String::new();
            if let ZoneMarker::Zone(id) = marker {
                out.push_str("TZID=");
                out.push_str(id);
                out.push(':');
            }
            out.push_str(&format!("{hour:02}{minute:02}{second:02}"));
            if *marker == ZoneMarker::Utc {
                out.push('Z');
            }
            out
        }
    }
}

/// Renders a DATE-TIME value as `[TZID=<id>:]YYYYMMDD` `T` `HHMMSS[Z]`.
///
/// The date-only form delegates to [`encode_date`]. For the full form the
/// zone prefix is computed once for the whole value; the time-of-day part
/// carries only the UTC suffix.
#[must_use]
pub fn encode_datetime(input: &DateTimeInput) -> String {
    match input {
        DateTimeInput::Formatted(formatted) => formatted.clone(),
        DateTimeInput::Date { year, month, day } => {
            encode_date(&DateInput::Ymd {
                year: *year,
                month: *month,
                day: *day,
            })
        }
        DateTimeInput::Full {
            year,
            month,
            day,
            hour,
            minute,
            second,
            marker,
        } => {
            let mut out = String::new();
            if let ZoneMarker::Zone(id) = marker {
                out.push_str("TZID=");
                out.push_str(id);
                out.push(':');
            }
            out.push_str(&encode_date(&DateInput::Ymd {
                year: *year,
                month: *month,
                day: *day,
            }));
            out.push('T');
            let time_marker = if *marker == ZoneMarker::Utc {
                ZoneMarker::Utc
            } else {
                ZoneMarker::Floating
            };
            out.push_str(&encode_time(&TimeInput::Hms {
                hour: *hour,
                minute: *minute,
                second: *second,
                marker: time_marker,
            }));
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_components_zero_padded() {
        assert_eq!(encode_date(&DateInput::ymd(2024, 1, 1)), "20240101");
        assert_eq!(encode_date(&DateInput::ymd(2024, 12, 31)), "20241231");
    }

    #[test]
    fn date_tuple_matches_component_form() {
        assert_eq!(
            encode_date(&DateInput::from((2024, 3, 9))),
            encode_date(&DateInput::ymd(2024, 3, 9))
        );
    }

    #[test]
    fn date_preformatted_passes_through() {
        assert_eq!(encode_date(&DateInput::from("20240101")), "20240101");
    }

    #[test]
    fn time_floating() {
        assert_eq!(encode_time(&TimeInput::from((9, 5, 3))), "090503");
    }

    #[test]
    fn time_utc_suffix() {
        assert_eq!(encode_time(&TimeInput::from((9, 5, 3, true))), "090503Z");
    }

    #[test]
    fn time_zone_prefix() {
        assert_eq!(
            encode_time(&TimeInput::from((9, 5, 3, "America/New_York"))),
            "TZID=America/New_York:090503"
        );
    }

    #[test]
    fn time_z_string_is_utc() {
        assert_eq!(encode_time(&TimeInput::from((9, 5, 3, "Z"))), "090503Z");
    }

    #[test]
    fn datetime_utc() {
        assert_eq!(
            encode_datetime(&DateTimeInput::from((2024, 1, 1, 9, 5, 3, true))),
            "20240101T090503Z"
        );
    }

    #[test]
    fn datetime_zoned_prefix_not_duplicated() {
        assert_eq!(
            encode_datetime(&DateTimeInput::from((2024, 1, 1, 9, 5, 3, "America/New_York"))),
            "TZID=America/New_York:20240101T090503"
        );
    }

    #[test]
    fn datetime_floating() {
        assert_eq!(
            encode_datetime(&DateTimeInput::from((2024, 1, 1, 9, 5, 3))),
            "20240101T090503"
        );
    }

    #[test]
    fn datetime_date_only_form() {
        assert_eq!(
            encode_datetime(&DateTimeInput::ymd(2024, 1, 1)),
            "20240101"
        );
    }

    #[test]
    fn datetime_preformatted_passes_through() {
        assert_eq!(
            encode_datetime(&DateTimeInput::from("20240101T090503Z")),
            "20240101T090503Z"
        );
    }
}

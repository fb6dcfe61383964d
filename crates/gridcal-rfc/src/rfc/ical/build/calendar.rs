//! VCALENDAR component builder (RFC 5545 §3.4).

use gridcal_core::constants::DEFAULT_PRODID;

use super::escape::escape_text;

/// Fixed timezone boilerplate emitted with every calendar. One zone, one
/// set of historical DST rules; not a timezone-database integration.
const TIMEZONE_BLOCK: &str = "X-WR-TIMEZONE:America/New_York
BEGIN:VTIMEZONE
TZID:America/New_York
X-LIC-LOCATION:America/New_York
BEGIN:DAYLIGHT
TZOFFSETFROM:-0500
TZOFFSETTO:-0400
TZNAME:EDT
DTSTART:19700308T020000
RRULE:FREQ=YEARLY;BYMONTH=3;BYDAY=2SU
END:DAYLIGHT
BEGIN:STANDARD
TZOFFSETFROM:-0400
TZOFFSETTO:-0500
TZNAME:EST
DTSTART:19701101T020000
RRULE:FREQ=YEARLY;BYMONTH=11;BYDAY=1SU
END:STANDARD
END:VTIMEZONE";

/// Assembles a VCALENDAR document as an ordered sequence of blocks.
///
/// Each element is either a single content line or a multi-line block with
/// embedded newlines (the timezone boilerplate and the caller-supplied body
/// components). Empty body elements are filtered out. `prodid` defaults to
/// the shared constant when absent; both it and `name` are TEXT-escaped.
#[must_use]
pub fn vcalendar(name: &str, body: &[String], prodid: Option<&str>) -> Vec<String> {
    let prodid = prodid.unwrap_or(DEFAULT_PRODID);
    let mut blocks = Vec::with_capacity(body.len() + 6);
    blocks.push("BEGIN:VCALENDAR".to_string());
    blocks.push(format!("PRODID:{}", escape_text(prodid)));
    blocks.push("VERSION:2.0".to_string());
    blocks.push(format!("X-WR-CALNAME:{}", escape_text(name)));
    blocks.push(TIMEZONE_BLOCK.to_string());
    blocks.extend(body.iter().filter(|block| !block.is_empty()).cloned());
    blocks.push("END:VCALENDAR".to_string());
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_body_between_begin_and_end() {
        let blocks = vcalendar("Test", &[], None);
        assert_eq!(blocks.first().map(String::as_str), Some("BEGIN:VCALENDAR"));
        assert_eq!(blocks.last().map(String::as_str), Some("END:VCALENDAR"));
    }

    #[test]
    fn contains_exactly_one_version_line() {
        let blocks = vcalendar("Test", &[], None);
        let versions = blocks
            .iter()
            .flat_map(|block| block.split('\n'))
            .filter(|line| *line == "VERSION:2.0")
            .count();
        assert_eq!(versions, 1);
    }

    #[test]
    fn default_prodid_is_escaped_constant() {
        let blocks = vcalendar("Test", &[], None);
        assert!(blocks.contains(&format!("PRODID:{DEFAULT_PRODID}")));
    }

    #[test]
    fn name_is_text_escaped() {
        let blocks = vcalendar("Team; calendar", &[], None);
        assert!(blocks.contains(&"X-WR-CALNAME:Team\\; calendar".to_string()));
    }

    #[test]
    fn empty_body_blocks_are_filtered() {
        let body = vec![
            "BEGIN:VEVENT\nEND:VEVENT".to_string(),
            String::new(),
            "BEGIN:VEVENT\nEND:VEVENT".to_string(),
        ];
        let blocks = vcalendar("Test", &body, None);
        let events = blocks
            .iter()
            .filter(|block| block.starts_with("BEGIN:VEVENT"))
            .count();
        assert_eq!(events, 2);
        assert!(!blocks.contains(&String::new()));
    }

    #[test]
    fn timezone_block_pins_new_york_rules() {
        let blocks = vcalendar("Test", &[], None);
        let tz = blocks
            .iter()
            .find(|block| block.starts_with("X-WR-TIMEZONE:"))
            .expect("timezone block present");
        assert!(tz.contains("TZID:America/New_York"));
        assert!(tz.contains("TZNAME:EDT"));
        assert!(tz.contains("TZNAME:EST"));
        assert!(tz.ends_with("END:VTIMEZONE"));
    }
}

//! Content-line assembly (RFC 5545 §3.1).

use super::escape::escape_text;

/// Value treatment applied when a field is appended to a [`PropertyList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoder {
    /// Value emitted as-is.
    Verbatim,
    /// RFC 5545 TEXT escaping.
    Text,
    /// Value already rendered by the date-time encoder; selects the
    /// parameter-vs-value separator.
    DateTime,
}

impl Encoder {
    fn apply(self, raw: &str) -> String {
        match self {
            Self::Verbatim | Self::DateTime => raw.to_string(),
            Self::Text => escape_text(raw),
        }
    }

    /// A date-time value that does not start with a digit carries a `TZID=`
    /// parameter, so the property name is separated with `;` instead of `:`.
    fn separator(self, encoded: &str) -> char {
        match self {
            Self::DateTime if encoded.chars().next().is_some_and(|c| !c.is_ascii_digit()) => ';',
            Self::Verbatim | Self::Text | Self::DateTime => ':',
        }
    }
}

/// Ordered list of rendered content lines for one component.
#[derive(Debug, Default)]
pub struct PropertyList {
    lines: Vec<String>,
}

impl PropertyList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `NAME<sep>value`.
    ///
    /// Absent values and values whose string form is empty are dropped
    /// silently; grid cells routinely yield empty strings for unset fields.
    pub fn push(&mut self, name: &str, value: Option<&str>, encoder: Encoder) {
        let Some(raw) = value else { return };
        if raw.is_empty() {
            return;
        }
        let encoded = encoder.apply(raw);
        let separator = encoder.separator(&encoded);
        self.lines.push(format!("{name}{separator}{encoded}"));
    }

    /// Appends one property line per element, preserving order. Used for
    /// repeatable properties (ATTENDEE, CATEGORIES, EXDATE, ...).
    pub fn push_all(&mut self, name: &str, values: &[String], encoder: Encoder) {
        for value in values {
            self.push(name, Some(value), encoder);
        }
    }

    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_separator_is_colon() {
        let mut props = PropertyList::new();
        props.push("STATUS", Some("CONFIRMED"), Encoder::Verbatim);
        assert_eq!(props.into_lines(), vec!["STATUS:CONFIRMED".to_string()]);
    }

    #[test]
    fn text_encoder_escapes_value() {
        let mut props = PropertyList::new();
        props.push("SUMMARY", Some("a,b;c"), Encoder::Text);
        assert_eq!(props.into_lines(), vec!["SUMMARY:a\\,b\\;c".to_string()]);
    }

    #[test]
    fn zoned_datetime_switches_to_semicolon() {
        let mut props = PropertyList::new();
        props.push(
            "DTSTART",
            Some("TZID=America/New_York:20240101T090503"),
            Encoder::DateTime,
        );
        assert_eq!(
            props.into_lines(),
            vec!["DTSTART;TZID=America/New_York:20240101T090503".to_string()]
        );
    }

    #[test]
    fn plain_datetime_keeps_colon() {
        let mut props = PropertyList::new();
        props.push("DTSTART", Some("20240101T090503Z"), Encoder::DateTime);
        assert_eq!(
            props.into_lines(),
            vec!["DTSTART:20240101T090503Z".to_string()]
        );
    }

    #[test]
    fn absent_and_empty_values_are_dropped() {
        let mut props = PropertyList::new();
        props.push("LOCATION", None, Encoder::Verbatim);
        props.push("LOCATION", Some(""), Encoder::Verbatim);
        assert!(props.into_lines().is_empty());
    }

    #[test]
    fn sequences_expand_in_order() {
        let mut props = PropertyList::new();
        props.push_all(
            "CATEGORIES",
            &["work".to_string(), String::new(), "weekly".to_string()],
            Encoder::Verbatim,
        );
        assert_eq!(
            props.into_lines(),
            vec![
                "CATEGORIES:work".to_string(),
                "CATEGORIES:weekly".to_string(),
            ]
        );
    }
}

//! VEVENT field bag.

use super::DateTimeInput;

/// The full set of VEVENT field values.
///
/// `dtstamp`, `uid`, and `dtstart` are required; every other field is
/// optional and omitted from the output when `None` (or, for the repeatable
/// fields, when empty). Fields whose rendered string form is empty are
/// likewise omitted, since grid cells routinely yield empty strings for
/// unset values.
///
/// Optional fields are populated with struct-update syntax:
///
/// ```
/// use gridcal_rfc::rfc::ical::core::{DateTimeInput, EventRecord};
///
/// let event = EventRecord {
///     summary: Some("Team sync".to_string()),
///     location: Some("Room 4".to_string()),
///     ..EventRecord::new(
///         DateTimeInput::full(2024, 1, 15, 9, 30, 0, true),
///         "team-sync@example.com",
///         DateTimeInput::full(2024, 1, 15, 14, 0, 0, "America/New_York"),
///     )
/// };
/// assert_eq!(event.uid, "team-sync@example.com");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub dtstamp: DateTimeInput,
    pub uid: String,
    pub dtstart: DateTimeInput,

    pub class: Option<String>,
    pub created: Option<String>,
    pub description: Option<String>,
    pub geo: Option<String>,
    pub last_mod: Option<DateTimeInput>,
    pub location: Option<String>,
    pub organizer: Option<String>,
    pub priority: Option<String>,
    pub seq: Option<String>,
    pub status: Option<String>,
    pub summary: Option<String>,
    pub transp: Option<String>,
    pub url: Option<String>,
    pub recurid: Option<String>,
    pub rrule: Option<String>,
    /// Mutually exclusive with `duration`.
    pub dtend: Option<DateTimeInput>,
    /// Mutually exclusive with `dtend`.
    pub duration: Option<String>,

    pub attach: Vec<String>,
    pub attendee: Vec<String>,
    pub categories: Vec<String>,
    pub comment: Vec<String>,
    pub contact: Vec<String>,
    pub exdate: Vec<String>,
    pub rstatus: Vec<String>,
    pub related: Vec<String>,
    pub resources: Vec<String>,
    pub rdate: Vec<String>,
    pub x_prop: Vec<String>,
}

impl EventRecord {
    /// Creates a record with the three required fields set and everything
    /// else absent.
    #[must_use]
    pub fn new(
        dtstamp: impl Into<DateTimeInput>,
        uid: impl Into<String>,
        dtstart: impl Into<DateTimeInput>,
    ) -> Self {
        Self {
            dtstamp: dtstamp.into(),
            uid: uid.into(),
            dtstart: dtstart.into(),
            class: None,
            created: None,
            description: None,
            geo: None,
            last_mod: None,
            location: None,
            organizer: None,
            priority: None,
            seq: None,
            status: None,
            summary: None,
            transp: None,
            url: None,
            recurid: None,
            rrule: None,
            dtend: None,
            duration: None,
            attach: Vec::new(),
            attendee: Vec::new(),
            categories: Vec::new(),
            comment: Vec::new(),
            contact: Vec::new(),
            exdate: Vec::new(),
            rstatus: Vec::new(),
            related: Vec::new(),
            resources: Vec::new(),
            rdate: Vec::new(),
            x_prop: Vec::new(),
        }
    }
}

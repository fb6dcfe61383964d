//! VEVENT component builder (RFC 5545 §3.6.1).

use super::encode::encode_datetime;
use super::property::{Encoder, PropertyList};
use crate::error::{RfcError, RfcResult};
use crate::rfc::ical::core::EventRecord;

/// Renders an [`EventRecord`] as a `BEGIN:VEVENT`..`END:VEVENT` block with
/// newline-joined property lines in canonical order.
///
/// Date-time fields are rendered through the date-time encoder before
/// assembly, so zoned values pick up the `;` separator. Absent and
/// empty-valued fields are omitted.
///
/// ## Errors
/// Returns [`RfcError::DtendDurationConflict`] when both `dtend` and
/// `duration` are set; the two are mutually exclusive.
pub fn vevent(event: &EventRecord) -> RfcResult<String> {
    if event.dtend.is_some() && event.duration.is_some() {
        return Err(RfcError::DtendDurationConflict);
    }

    let dtstamp = encode_datetime(&event.dtstamp);
    let dtstart = encode_datetime(&event.dtstart);
    let dtend = event.dtend.as_ref().map(encode_datetime);
    let last_mod = event.last_mod.as_ref().map(encode_datetime);

    let mut props = PropertyList::new();
    props.push("UID", Some(&event.uid), Encoder::Text);
    props.push("DTSTAMP", Some(&dtstamp), Encoder::DateTime);
    props.push("DTSTART", Some(&dtstart), Encoder::DateTime);
    props.push("CLASS", event.class.as_deref(), Encoder::Verbatim);
    props.push("CREATED", event.created.as_deref(), Encoder::Verbatim);
    props.push("DESCRIPTION", event.description.as_deref(), Encoder::Text);
    props.push("GEO", event.geo.as_deref(), Encoder::Verbatim);
    props.push("LAST-MOD", last_mod.as_deref(), Encoder::DateTime);
    props.push("LOCATION", event.location.as_deref(), Encoder::Verbatim);
    props.push("ORGANIZER", event.organizer.as_deref(), Encoder::Verbatim);
    props.push("PRIORITY", event.priority.as_deref(), Encoder::Verbatim);
    props.push("SEQ", event.seq.as_deref(), Encoder::Verbatim);
    props.push("STATUS", event.status.as_deref(), Encoder::Verbatim);
    props.push("SUMMARY", event.summary.as_deref(), Encoder::Text);
    props.push("TRANSP", event.transp.as_deref(), Encoder::Verbatim);
    props.push("URL", event.url.as_deref(), Encoder::Verbatim);
    props.push("RECURID", event.recurid.as_deref(), Encoder::Verbatim);
    props.push("RRULE", event.rrule.as_deref(), Encoder::Verbatim);
    props.push("DTEND", dtend.as_deref(), Encoder::DateTime);
    props.push("DURATION", event.duration.as_deref(), Encoder::Verbatim);
    props.push_all("ATTACH", &event.attach, Encoder::Verbatim);
    props.push_all("ATTENDEE", &event.attendee, Encoder::Verbatim);
    props.push_all("CATEGORIES", &event.categories, Encoder::Verbatim);
    props.push_all("COMMENT", &event.comment, Encoder::Text);
    props.push_all("CONTACT", &event.contact, Encoder::Verbatim);
    props.push_all("EXDATE", &event.exdate, Encoder::Verbatim);
    props.push_all("RSTATUS", &event.rstatus, Encoder::Verbatim);
    props.push_all("RELATED", &event.related, Encoder::Verbatim);
    props.push_all("RESOURCES", &event.resources, Encoder::Verbatim);
    props.push_all("RDATE", &event.rdate, Encoder::Verbatim);
    props.push_all("X-PROP", &event.x_prop, Encoder::Verbatim);

    let mut lines = vec!["BEGIN:VEVENT".to_string()];
    lines.extend(props.into_lines());
    lines.push("END:VEVENT".to_string());
    Ok(lines.join("\n"))
}

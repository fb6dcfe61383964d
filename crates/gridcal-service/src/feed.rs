//! Feed registration and resolution.
//!
//! A feed is registered under a composed `<source id>.<feed id>` identifier
//! whose store key carries the shared `feed.` prefix. Resolution looks the
//! range reference back up, pulls the rows, drops empty ones, and folds the
//! joined body into wire form.

use gridcal_core::constants::{CALENDAR_MIME_TYPE, FEED_KEY_PREFIX};
use gridcal_rfc::rfc::ical::build::{fold, vcalendar, vevent};
use gridcal_rfc::rfc::ical::core::EventRecord;

use crate::error::{ServiceError, ServiceResult};
use crate::source::RangeSource;
use crate::store::FeedStore;

/// Finished feed payload handed to the transport boundary. Never mutated
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedPayload {
    pub filename: String,
    pub content_type: &'static str,
    pub body: String,
}

/// Result of registering a feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRef {
    /// Composed `<source id>.<feed id>` identifier.
    pub identifier: String,
    pub filename: String,
    /// Subscription URL, when a base URL is known.
    pub url: Option<String>,
}

/// Registers a feed id against a range reference.
///
/// Dots in the caller-supplied id are normalized to underscores so the
/// composed identifier splits unambiguously on its last dot. The filename
/// defaults to `<id>.ics`.
pub fn register_feed(
    store: &dyn FeedStore,
    source_id: &str,
    feed_id: &str,
    range_ref: &str,
    filename: Option<&str>,
    base_url: Option<&str>,
) -> FeedRef {
    let id = feed_id.replace('.', "_");
    let identifier = format!("{source_id}.{id}");
    store.set(&format!("{FEED_KEY_PREFIX}{identifier}"), range_ref);
    let filename = filename.map_or_else(|| format!("{id}.ics"), ToString::to_string);
    let url = base_url.map(|base| format!("{base}?feed={identifier}&filename={filename}"));
    tracing::info!(identifier = %identifier, range = %range_ref, "Registered feed");
    FeedRef {
        identifier,
        filename,
        url,
    }
}

/// Resolves a registered feed into a finished payload.
///
/// ## Errors
/// Returns [`ServiceError::MalformedFeedId`] when the feed parameter does
/// not split into `<source>.<name>`, [`ServiceError::UnknownFeed`] when no
/// registration exists, and [`ServiceError::RangeUnavailable`] when the row
/// source cannot read the registered range.
pub fn resolve_feed(
    store: &dyn FeedStore,
    source: &dyn RangeSource,
    feed: &str,
    filename: Option<&str>,
) -> ServiceResult<FeedPayload> {
    let Some((source_part, name)) = feed.rsplit_once('.') else {
        return Err(ServiceError::MalformedFeedId(feed.to_string()));
    };
    if source_part.is_empty() || name.is_empty() {
        return Err(ServiceError::MalformedFeedId(feed.to_string()));
    }

    let range_ref = store
        .get(&format!("{FEED_KEY_PREFIX}{feed}"))
        .ok_or_else(|| ServiceError::UnknownFeed(feed.to_string()))?;
    tracing::debug!(feed = %feed, range = %range_ref, "Resolved feed registration");

    let rows = source.rows(&range_ref)?;
    let content = rows
        .into_iter()
        .filter(|row| !row.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    let filename = filename.map_or_else(|| format!("{name}.ics"), ToString::to_string);
    Ok(FeedPayload {
        filename,
        content_type: CALENDAR_MIME_TYPE,
        body: fold(&content),
    })
}

/// Renders a named calendar of event records into a finished wire body.
///
/// This is the whole pipeline in one call: each record through the VEVENT
/// builder, the blocks through the VCALENDAR builder, and the joined text
/// through the folder.
///
/// ## Errors
/// Propagates VEVENT construction errors (DTEND/DURATION conflict).
pub fn render_calendar(
    name: &str,
    events: &[EventRecord],
    prodid: Option<&str>,
) -> ServiceResult<String> {
    let body = events.iter().map(vevent).collect::<Result<Vec<_>, _>>()?;
    Ok(fold(&vcalendar(name, &body, prodid).join("\n")))
}

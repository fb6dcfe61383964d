/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const FEED_ROUTE_COMPONENT: &str = "feed";
pub const FEED_ROUTE_PREFIX: &str = const_str::concat!("/", FEED_ROUTE_COMPONENT);

/// MIME type for finished calendar payloads.
pub const CALENDAR_MIME_TYPE: &str = "text/calendar";

/// PRODID emitted when the caller does not supply one.
pub const DEFAULT_PRODID: &str = "Generated by Google Sheets";

/// Key namespace for feed registrations in the key-value store.
pub const FEED_KEY_PREFIX: &str = "feed.";

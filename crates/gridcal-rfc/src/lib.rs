//! RFC 5545 text generation for gridcal.
//!
//! This crate is the pure core of the workspace: it converts structured
//! date/time/text values and event-property bags into wire-exact iCalendar
//! text. Everything here is synchronous, stateless between calls, and safe
//! to invoke from concurrent contexts without coordination.

pub mod error;
pub mod rfc;

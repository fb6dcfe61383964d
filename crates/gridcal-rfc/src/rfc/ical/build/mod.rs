//! iCalendar serialization (RFC 5545).
//!
//! This module provides the rendering pipeline for calendar content:
//! - Escape: TEXT value escaping
//! - Encode: DATE, TIME, and DATE-TIME value rendering
//! - Property: content-line assembly with separator selection
//! - Event/Calendar: VEVENT and VCALENDAR component builders
//! - Fold: content line folding at 75 octets

mod calendar;
mod encode;
mod escape;
mod event;
mod fold;
mod property;

pub use calendar::vcalendar;
pub use encode::{encode_date, encode_datetime, encode_time};
pub use escape::escape_text;
pub use event::vevent;
pub use fold::fold;
pub use property::{Encoder, PropertyList};

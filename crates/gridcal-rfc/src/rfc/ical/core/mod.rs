//! iCalendar input models.
//!
//! These types represent the shapes a grid cell can supply for a calendar
//! value: an already-formatted string, or decomposed numeric components with
//! an optional UTC/zone marker. Interpretation is decided once, by variant,
//! rather than by runtime shape inspection.

mod event;
mod value;

pub use event::EventRecord;
pub use value::{DateInput, DateTimeInput, TimeInput, ZoneMarker};

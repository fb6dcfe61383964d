//! Feed registration and resolution for gridcal.
//!
//! The encoding core receives already-resolved strings; this crate owns the
//! capabilities that resolve them — a key-value registry of feeds and a
//! tabular row source — plus the glue that turns a registered feed into a
//! finished `text/calendar` payload.

pub mod error;
pub mod feed;
pub mod source;
pub mod store;

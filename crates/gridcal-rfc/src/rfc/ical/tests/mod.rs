//! Document-level rendering tests.
//!
//! These tests drive the whole pipeline: event records through the property
//! assembler and component builders, joined and folded into wire form.

mod document;

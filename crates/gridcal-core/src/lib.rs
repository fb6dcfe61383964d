//! Shared kernel for the gridcal workspace: error taxonomy, configuration,
//! and cross-crate constants.

pub mod config;
pub mod constants;
pub mod error;

//! Typed parameter models produced by binding.
//!
//! - [`general`] - Settings shared by all engines: tolerances, enzyme, charges,
//!   modifications and the sequence database
//! - [`algorithms`] - One parameter record per supported engine
//! - [`bundle`] - The aggregate handed to persistence

pub mod algorithms;
pub mod bundle;
pub mod general;

//! # Workflows Module
//!
//! High-level entry points for front ends.
//!
//! - **Generate Workflow** ([`generate`]) - Validates and binds a raw option set, then
//!   persists the resulting bundle to the normalized output path. Requests for the
//!   modification listing return early without touching the filesystem.

pub mod generate;

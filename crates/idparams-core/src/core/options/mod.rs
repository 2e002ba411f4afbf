//! Recognized options and the rules their raw values must satisfy.
//!
//! - [`catalog`] - Ordered static table of every option descriptor
//! - [`validators`] - Primitive, total validators and their diagnostics
//! - [`rules`] - Static map from option id to validation rule
//! - [`raw`] - The caller supplied id to string mapping

pub mod catalog;
pub mod raw;
pub mod rules;
pub mod validators;

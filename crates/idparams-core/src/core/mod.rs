//! # Core Module
//!
//! Stateless building blocks of the parameter engine.
//!
//! ## Architecture
//!
//! - **Options** ([`options`]) - The descriptor catalog, primitive validators, the
//!   per-option rule table and the raw option set supplied by callers
//! - **Catalogs** ([`catalogs`]) - Enzyme and modification lookup interfaces with
//!   in-memory registries loadable from TOML and CSV files
//! - **Models** ([`models`]) - General search settings, per-engine parameter sets and
//!   the aggregate identification parameter bundle
//! - **I/O** ([`io`]) - Persistence of bundles to parameter files

pub mod catalogs;
pub mod io;
pub mod models;
pub mod options;

//! # idparams Core Library
//!
//! Configuration and validation of identification parameters for a multi-engine
//! peptide identification pipeline. A flat set of named string options is checked
//! against a declarative rule table and bound into a strongly typed bundle holding
//! the shared search settings and one parameter set per search engine.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** The option catalog, primitive validators, the
//!   per-option rule table, enzyme and modification catalogs, the typed parameter
//!   models and the parameter file persistence.
//!
//! - **[`engine`]: The Logic Core.** Binders that turn validated raw values into
//!   typed parameters, and the orchestrator state machine that sequences general,
//!   modification and per-option validation before binding.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together: validates,
//!   binds and persists a bundle in a single call.

pub mod core;
pub mod engine;
pub mod workflows;

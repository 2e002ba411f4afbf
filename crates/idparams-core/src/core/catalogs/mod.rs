//! Name-based lookup of enzymes and post-translational modifications.
//!
//! The validation engine only ever sees the [`EnzymeCatalog`] and
//! [`ModificationCatalog`] traits; callers inject whichever implementation they
//! hold. [`EnzymeRegistry`] and [`ModificationRegistry`] are the in-memory
//! implementations shipped with the crate, seeded with built-in definitions and
//! extendable from TOML or CSV files.

pub mod enzyme;
pub mod modification;

pub use enzyme::{Enzyme, EnzymeCatalog, EnzymeRegistry};
pub use modification::{Modification, ModificationCatalog, ModificationKind, ModificationRegistry};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Unsupported catalog file '{path}': expected a .toml or .csv extension")]
    UnsupportedFormat { path: String },
    #[error("Duplicate entry '{name}' in '{path}'")]
    Duplicate { path: String, name: String },
}

//! Persistence of validated parameter bundles.
//!
//! The [`store::ParameterStore`] trait is the narrow interface the workflow
//! writes through. [`store::TomlParameterFile`] is the bundled implementation;
//! it serializes the whole bundle, including every engine's parameter set, so
//! a saved file loads back into an equal bundle.

pub mod store;

use crate::core::catalogs::{Enzyme, Modification};
use crate::core::options::raw::OptionValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassAccuracyType {
    #[serde(rename = "ppm")]
    Ppm,
    #[serde(rename = "Da")]
    Da,
}

impl fmt::Display for MassAccuracyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MassAccuracyType::Ppm => f.write_str("ppm"),
            MassAccuracyType::Da => f.write_str("Da"),
        }
    }
}

impl OptionValue for MassAccuracyType {
    fn from_option(raw: &str) -> Option<Self> {
        match raw {
            "1" => Some(MassAccuracyType::Ppm),
            "2" => Some(MassAccuracyType::Da),
            _ => None,
        }
    }
}

/// Search settings shared by every engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GeneralSearchParameters {
    pub precursor_tolerance: f64,
    pub precursor_accuracy_type: MassAccuracyType,
    pub fragment_tolerance: f64,
    pub fragment_accuracy_type: MassAccuracyType,
    pub enzyme: Enzyme,
    pub missed_cleavages: u32,
    pub min_charge: u32,
    pub max_charge: u32,
    pub forward_ion: String,
    pub rewind_ion: String,
    pub fixed_modifications: Vec<Modification>,
    pub variable_modifications: Vec<Modification>,
    pub database: PathBuf,
}

impl GeneralSearchParameters {
    pub const DEFAULT_PRECURSOR_TOLERANCE: f64 = 10.0;
    pub const DEFAULT_PRECURSOR_ACCURACY: MassAccuracyType = MassAccuracyType::Ppm;
    pub const DEFAULT_FRAGMENT_TOLERANCE: f64 = 0.5;
    pub const DEFAULT_FRAGMENT_ACCURACY: MassAccuracyType = MassAccuracyType::Da;
    pub const DEFAULT_MISSED_CLEAVAGES: u32 = 2;
    pub const DEFAULT_MIN_CHARGE: u32 = 2;
    pub const DEFAULT_MAX_CHARGE: u32 = 4;
    pub const DEFAULT_FORWARD_ION: &'static str = "b";
    pub const DEFAULT_REWIND_ION: &'static str = "y";
    pub const DEFAULT_ENZYME: &'static str = "Trypsin";

    pub fn fixed_modification_names(&self) -> Vec<&str> {
        self.fixed_modifications.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn variable_modification_names(&self) -> Vec<&str> {
        self.variable_modifications
            .iter()
            .map(|m| m.name.as_str())
            .collect()
    }
}

/// Collects general settings during binding.
///
/// The enzyme and database are required; every other setting falls back to the
/// documented default when left unset.
#[derive(Default)]
pub struct GeneralSearchParametersBuilder {
    precursor_tolerance: Option<f64>,
    precursor_accuracy_type: Option<MassAccuracyType>,
    fragment_tolerance: Option<f64>,
    fragment_accuracy_type: Option<MassAccuracyType>,
    enzyme: Option<Enzyme>,
    missed_cleavages: Option<u32>,
    min_charge: Option<u32>,
    max_charge: Option<u32>,
    forward_ion: Option<String>,
    rewind_ion: Option<String>,
    fixed_modifications: Vec<Modification>,
    variable_modifications: Vec<Modification>,
    database: Option<PathBuf>,
}

impl GeneralSearchParametersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn precursor_tolerance(mut self, tolerance: f64) -> Self {
        self.precursor_tolerance = Some(tolerance);
        self
    }
    pub fn precursor_accuracy_type(mut self, unit: MassAccuracyType) -> Self {
        self.precursor_accuracy_type = Some(unit);
        self
    }
    pub fn fragment_tolerance(mut self, tolerance: f64) -> Self {
        self.fragment_tolerance = Some(tolerance);
        self
    }
    pub fn fragment_accuracy_type(mut self, unit: MassAccuracyType) -> Self {
        self.fragment_accuracy_type = Some(unit);
        self
    }
    pub fn enzyme(mut self, enzyme: Enzyme) -> Self {
        self.enzyme = Some(enzyme);
        self
    }
    pub fn missed_cleavages(mut self, count: u32) -> Self {
        self.missed_cleavages = Some(count);
        self
    }
    pub fn min_charge(mut self, charge: u32) -> Self {
        self.min_charge = Some(charge);
        self
    }
    pub fn max_charge(mut self, charge: u32) -> Self {
        self.max_charge = Some(charge);
        self
    }
    pub fn forward_ion(mut self, ion: String) -> Self {
        self.forward_ion = Some(ion);
        self
    }
    pub fn rewind_ion(mut self, ion: String) -> Self {
        self.rewind_ion = Some(ion);
        self
    }
    pub fn fixed_modifications(mut self, modifications: Vec<Modification>) -> Self {
        self.fixed_modifications = modifications;
        self
    }
    pub fn variable_modifications(mut self, modifications: Vec<Modification>) -> Self {
        self.variable_modifications = modifications;
        self
    }
    pub fn database(mut self, path: PathBuf) -> Self {
        self.database = Some(path);
        self
    }

    pub fn build(self) -> Result<GeneralSearchParameters, ConfigError> {
        type P = GeneralSearchParameters;
        Ok(GeneralSearchParameters {
            precursor_tolerance: self
                .precursor_tolerance
                .unwrap_or(P::DEFAULT_PRECURSOR_TOLERANCE),
            precursor_accuracy_type: self
                .precursor_accuracy_type
                .unwrap_or(P::DEFAULT_PRECURSOR_ACCURACY),
            fragment_tolerance: self
                .fragment_tolerance
                .unwrap_or(P::DEFAULT_FRAGMENT_TOLERANCE),
            fragment_accuracy_type: self
                .fragment_accuracy_type
                .unwrap_or(P::DEFAULT_FRAGMENT_ACCURACY),
            enzyme: self.enzyme.ok_or(ConfigError::MissingParameter("enzyme"))?,
            missed_cleavages: self
                .missed_cleavages
                .unwrap_or(P::DEFAULT_MISSED_CLEAVAGES),
            min_charge: self.min_charge.unwrap_or(P::DEFAULT_MIN_CHARGE),
            max_charge: self.max_charge.unwrap_or(P::DEFAULT_MAX_CHARGE),
            forward_ion: self
                .forward_ion
                .unwrap_or_else(|| P::DEFAULT_FORWARD_ION.to_string()),
            rewind_ion: self
                .rewind_ion
                .unwrap_or_else(|| P::DEFAULT_REWIND_ION.to_string()),
            fixed_modifications: self.fixed_modifications,
            variable_modifications: self.variable_modifications,
            database: self
                .database
                .ok_or(ConfigError::MissingParameter("database"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalogs::{EnzymeCatalog, EnzymeRegistry};

    fn trypsin() -> Enzyme {
        EnzymeRegistry::builtin()
            .resolve("Trypsin")
            .cloned()
            .unwrap()
    }

    #[test]
    fn build_applies_defaults_for_unset_settings() {
        let params = GeneralSearchParametersBuilder::new()
            .enzyme(trypsin())
            .database(PathBuf::from("db.fasta"))
            .build()
            .unwrap();

        assert_eq!(params.precursor_tolerance, 10.0);
        assert_eq!(params.precursor_accuracy_type, MassAccuracyType::Ppm);
        assert_eq!(params.fragment_tolerance, 0.5);
        assert_eq!(params.fragment_accuracy_type, MassAccuracyType::Da);
        assert_eq!(params.missed_cleavages, 2);
        assert_eq!((params.min_charge, params.max_charge), (2, 4));
        assert_eq!(params.forward_ion, "b");
        assert_eq!(params.rewind_ion, "y");
        assert!(params.fixed_modifications.is_empty());
    }

    #[test]
    fn build_requires_enzyme_and_database() {
        let missing_enzyme = GeneralSearchParametersBuilder::new()
            .database(PathBuf::from("db.fasta"))
            .build();
        assert_eq!(
            missing_enzyme,
            Err(ConfigError::MissingParameter("enzyme"))
        );

        let missing_db = GeneralSearchParametersBuilder::new()
            .enzyme(trypsin())
            .build();
        assert_eq!(missing_db, Err(ConfigError::MissingParameter("database")));
    }

    #[test]
    fn accuracy_codes_map_to_units() {
        assert_eq!(MassAccuracyType::from_option("1"), Some(MassAccuracyType::Ppm));
        assert_eq!(MassAccuracyType::from_option("2"), Some(MassAccuracyType::Da));
        assert_eq!(MassAccuracyType::from_option("3"), None);
        assert_eq!(MassAccuracyType::Da.to_string(), "Da");
    }
}

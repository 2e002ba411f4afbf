use crate::core::options::raw::OptionValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CometPrecursorRemoval {
    #[default]
    Off,
    On,
    /// Charge-reduced precursors as expected for ETD/ECD spectra.
    ChargeReduced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CometEnzymeType {
    SemiSpecific,
    #[default]
    FullySpecific,
    UnspecificNTerm,
    UnspecificCTerm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CometIsotopeCorrection {
    #[default]
    Off,
    /// -1, 0, +1, +2, +3
    MinusOneToPlusThree,
    /// -8, -4, 0, +4, +8
    MinusEightToPlusEight,
}

impl OptionValue for CometPrecursorRemoval {
    fn from_option(raw: &str) -> Option<Self> {
        match raw {
            "0" => Some(CometPrecursorRemoval::Off),
            "1" => Some(CometPrecursorRemoval::On),
            "2" => Some(CometPrecursorRemoval::ChargeReduced),
            _ => None,
        }
    }
}

impl OptionValue for CometEnzymeType {
    fn from_option(raw: &str) -> Option<Self> {
        match raw {
            "1" => Some(CometEnzymeType::SemiSpecific),
            "2" => Some(CometEnzymeType::FullySpecific),
            "8" => Some(CometEnzymeType::UnspecificNTerm),
            "9" => Some(CometEnzymeType::UnspecificCTerm),
            _ => None,
        }
    }
}

impl OptionValue for CometIsotopeCorrection {
    fn from_option(raw: &str) -> Option<Self> {
        match raw {
            "0" => Some(CometIsotopeCorrection::Off),
            "1" => Some(CometIsotopeCorrection::MinusOneToPlusThree),
            "2" => Some(CometIsotopeCorrection::MinusEightToPlusEight),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CometParameters {
    pub num_spectrum_matches: u32,
    pub max_variable_mods: u32,
    pub require_variable_mods: bool,
    pub min_peaks: u32,
    pub min_peak_intensity: f64,
    pub remove_precursor: CometPrecursorRemoval,
    pub remove_precursor_tolerance: f64,
    pub lower_clear_mz_range: f64,
    pub upper_clear_mz_range: f64,
    pub enzyme_type: CometEnzymeType,
    pub isotope_correction: CometIsotopeCorrection,
    pub min_precursor_mass: f64,
    pub max_precursor_mass: f64,
    pub max_fragment_charge: u32,
    pub remove_methionine: bool,
    /// 0 loads and searches all spectra at once.
    pub batch_size: u32,
    pub theoretical_fragment_ions: bool,
    pub fragment_bin_offset: f64,
    pub use_sparse_matrix: bool,
}

impl Default for CometParameters {
    fn default() -> Self {
        Self {
            num_spectrum_matches: 10,
            max_variable_mods: 10,
            require_variable_mods: false,
            min_peaks: 10,
            min_peak_intensity: 0.0,
            remove_precursor: CometPrecursorRemoval::Off,
            remove_precursor_tolerance: 1.5,
            lower_clear_mz_range: 0.0,
            upper_clear_mz_range: 0.0,
            enzyme_type: CometEnzymeType::FullySpecific,
            isotope_correction: CometIsotopeCorrection::Off,
            min_precursor_mass: 0.0,
            max_precursor_mass: 10000.0,
            max_fragment_charge: 3,
            remove_methionine: false,
            batch_size: 0,
            theoretical_fragment_ions: true,
            fragment_bin_offset: 0.0,
            use_sparse_matrix: true,
        }
    }
}

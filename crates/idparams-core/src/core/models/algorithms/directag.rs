use crate::core::options::raw::OptionValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirecTagDeisotoping {
    #[default]
    Off,
    PrecursorOnly,
    PrecursorAndCandidate,
}

impl OptionValue for DirecTagDeisotoping {
    fn from_option(raw: &str) -> Option<Self> {
        match raw {
            "0" => Some(DirecTagDeisotoping::Off),
            "1" => Some(DirecTagDeisotoping::PrecursorOnly),
            "2" => Some(DirecTagDeisotoping::PrecursorAndCandidate),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DirecTagParameters {
    /// Percentage of the total ion current kept.
    pub tic_cutoff_percentage: u32,
    pub max_peak_count: u32,
    pub intensity_classes: u32,
    pub adjust_precursor_mass: bool,
    pub min_precursor_adjustment: f64,
    pub max_precursor_adjustment: f64,
    pub precursor_adjustment_step: f64,
    pub num_charge_states: u32,
    pub output_suffix: String,
    pub use_charge_state_from_ms: bool,
    pub duplicate_spectra: bool,
    pub deisotoping_mode: DirecTagDeisotoping,
    pub isotope_mz_tolerance: f64,
    pub complement_mz_tolerance: f64,
    pub tag_length: u32,
    pub max_dynamic_mods: u32,
    pub max_tag_count: u32,
    pub intensity_score_weight: f64,
    pub mz_fidelity_score_weight: f64,
    pub complement_score_weight: f64,
}

impl Default for DirecTagParameters {
    fn default() -> Self {
        Self {
            tic_cutoff_percentage: 85,
            max_peak_count: 400,
            intensity_classes: 3,
            adjust_precursor_mass: false,
            min_precursor_adjustment: -2.5,
            max_precursor_adjustment: 2.5,
            precursor_adjustment_step: 0.1,
            num_charge_states: 3,
            output_suffix: String::new(),
            use_charge_state_from_ms: false,
            duplicate_spectra: true,
            deisotoping_mode: DirecTagDeisotoping::Off,
            isotope_mz_tolerance: 0.25,
            complement_mz_tolerance: 0.5,
            tag_length: 3,
            max_dynamic_mods: 2,
            max_tag_count: 20,
            intensity_score_weight: 1.0,
            mz_fidelity_score_weight: 1.0,
            complement_score_weight: 1.0,
        }
    }
}

use crate::core::options::raw::OptionValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MyriMatchOutputFormat {
    #[default]
    #[serde(rename = "mzIdentML")]
    MzIdentMl,
    #[serde(rename = "pepXML")]
    PepXml,
}

impl OptionValue for MyriMatchOutputFormat {
    fn from_option(raw: &str) -> Option<Self> {
        match raw {
            "mzIdentML" => Some(MyriMatchOutputFormat::MzIdentMl),
            "pepXML" => Some(MyriMatchOutputFormat::PepXml),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MyriMatchParameters {
    pub min_peptide_length: u32,
    pub max_peptide_length: u32,
    pub min_precursor_mass: f64,
    pub max_precursor_mass: f64,
    pub lower_isotope_correction: i32,
    pub upper_isotope_correction: i32,
    pub num_spectrum_matches: u32,
    pub max_dynamic_mods: u32,
    /// "CID", "ETD" or a manual ion series list such as "manual:b,y,z".
    pub fragmentation_rule: String,
    pub min_termini: u32,
    pub use_smart_plus_three: bool,
    pub compute_xcorr: bool,
    pub tic_cutoff: f64,
    pub intensity_classes: u32,
    pub class_size_multiplier: u32,
    pub num_batches: u32,
    pub max_peak_count: u32,
    pub output_format: MyriMatchOutputFormat,
}

impl Default for MyriMatchParameters {
    fn default() -> Self {
        Self {
            min_peptide_length: 6,
            max_peptide_length: 30,
            min_precursor_mass: 0.0,
            max_precursor_mass: 10000.0,
            lower_isotope_correction: -1,
            upper_isotope_correction: 2,
            num_spectrum_matches: 10,
            max_dynamic_mods: 2,
            fragmentation_rule: "CID".to_string(),
            min_termini: 2,
            use_smart_plus_three: true,
            compute_xcorr: false,
            tic_cutoff: 0.98,
            intensity_classes: 3,
            class_size_multiplier: 2,
            num_batches: 50,
            max_peak_count: 100,
            output_format: MyriMatchOutputFormat::MzIdentMl,
        }
    }
}

use crate::core::options::raw::OptionValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OmssaOutputFormat {
    #[default]
    Omx,
    Csv,
    PepXml,
}

impl OptionValue for OmssaOutputFormat {
    fn from_option(raw: &str) -> Option<Self> {
        match raw {
            "0" => Some(OmssaOutputFormat::Omx),
            "1" => Some(OmssaOutputFormat::Csv),
            "2" => Some(OmssaOutputFormat::PepXml),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OmssaParameters {
    pub sequences_in_memory: bool,
    /// 0 means monoisotopic only.
    pub number_of_isotopes: u32,
    /// Mass above which the exact neutron mass is used.
    pub neutron_threshold: f64,
    pub low_intensity_cutoff: f64,
    pub high_intensity_cutoff: f64,
    pub intensity_cutoff_increment: f64,
    pub single_charge_window: u32,
    pub double_charge_window: u32,
    pub peaks_in_single_charge_window: u32,
    pub peaks_in_double_charge_window: u32,
    pub min_annotated_intense_peaks: u32,
    pub min_annotated_peaks: u32,
    pub min_peak_count: u32,
    pub cleave_n_terminal_methionine: bool,
    pub max_mz_ladders: u32,
    pub max_fragment_charge: u32,
    pub charge_one_fraction: f64,
    pub determine_charge_plus_one: bool,
    pub positive_fragment_ions: bool,
    pub min_precursors_per_spectrum: u32,
    pub search_forward_ions: bool,
    pub search_rewind_ions: bool,
    pub max_fragments_per_series: u32,
    pub use_correlation_correction: bool,
    pub consecutive_ion_probability: f64,
    pub iterative_sequence_evalue: f64,
    pub iterative_spectrum_evalue: f64,
    pub iterative_replace_evalue: f64,
    pub remove_precursor: bool,
    pub scale_precursor_mass: bool,
    pub estimate_charge: bool,
    pub max_evalue: f64,
    /// 0 keeps every hit.
    pub hitlist_length: u32,
    pub hits_per_spectrum_per_charge: u32,
    pub min_peptide_length: u32,
    pub max_peptide_length: u32,
    pub output_format: OmssaOutputFormat,
}

impl Default for OmssaParameters {
    fn default() -> Self {
        Self {
            sequences_in_memory: true,
            number_of_isotopes: 0,
            neutron_threshold: 1446.94,
            low_intensity_cutoff: 0.0,
            high_intensity_cutoff: 0.2,
            intensity_cutoff_increment: 0.0005,
            single_charge_window: 27,
            double_charge_window: 14,
            peaks_in_single_charge_window: 2,
            peaks_in_double_charge_window: 2,
            min_annotated_intense_peaks: 6,
            min_annotated_peaks: 2,
            min_peak_count: 4,
            cleave_n_terminal_methionine: true,
            max_mz_ladders: 128,
            max_fragment_charge: 2,
            charge_one_fraction: 0.95,
            determine_charge_plus_one: true,
            positive_fragment_ions: true,
            min_precursors_per_spectrum: 1,
            search_forward_ions: false,
            search_rewind_ions: true,
            max_fragments_per_series: 100,
            use_correlation_correction: true,
            consecutive_ion_probability: 0.5,
            iterative_sequence_evalue: 0.0,
            iterative_spectrum_evalue: 0.01,
            iterative_replace_evalue: 0.0,
            remove_precursor: true,
            scale_precursor_mass: false,
            estimate_charge: true,
            max_evalue: 100.0,
            hitlist_length: 0,
            hits_per_spectrum_per_charge: 30,
            min_peptide_length: 6,
            max_peptide_length: 30,
            output_format: OmssaOutputFormat::Omx,
        }
    }
}

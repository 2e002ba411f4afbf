use crate::core::options::raw::OptionValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TideDecoyFormat {
    #[default]
    None,
    Shuffle,
    PeptideReverse,
    ProteinReverse,
}

/// Terminal amino acids kept in place when generating decoys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TideKeptTerminals {
    N,
    C,
    #[default]
    NC,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TideDigestion {
    #[default]
    FullDigest,
    PartialDigest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TideSpectrumCharges {
    One,
    Two,
    Three,
    #[default]
    All,
}

impl OptionValue for TideDecoyFormat {
    fn from_option(raw: &str) -> Option<Self> {
        match raw {
            "none" => Some(TideDecoyFormat::None),
            "shuffle" => Some(TideDecoyFormat::Shuffle),
            "peptide-reverse" => Some(TideDecoyFormat::PeptideReverse),
            "protein-reverse" => Some(TideDecoyFormat::ProteinReverse),
            _ => None,
        }
    }
}

impl OptionValue for TideKeptTerminals {
    fn from_option(raw: &str) -> Option<Self> {
        match raw {
            "N" => Some(TideKeptTerminals::N),
            "C" => Some(TideKeptTerminals::C),
            "NC" => Some(TideKeptTerminals::NC),
            _ => None,
        }
    }
}

impl OptionValue for TideDigestion {
    fn from_option(raw: &str) -> Option<Self> {
        match raw {
            "full-digest" => Some(TideDigestion::FullDigest),
            "partial-digest" => Some(TideDigestion::PartialDigest),
            _ => None,
        }
    }
}

impl OptionValue for TideSpectrumCharges {
    fn from_option(raw: &str) -> Option<Self> {
        match raw {
            "1" => Some(TideSpectrumCharges::One),
            "2" => Some(TideSpectrumCharges::Two),
            "3" => Some(TideSpectrumCharges::Three),
            "all" => Some(TideSpectrumCharges::All),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TideParameters {
    /// `None` means no limit.
    pub max_variable_mods: Option<u32>,
    pub max_variable_mods_per_type: u32,
    pub min_peptide_length: u32,
    pub max_peptide_length: u32,
    pub min_precursor_mass: f64,
    pub max_precursor_mass: f64,
    pub decoy_format: TideDecoyFormat,
    pub kept_terminals: TideKeptTerminals,
    pub decoy_seed: u32,
    pub output_folder: String,
    pub print_peptides: bool,
    pub verbosity: u32,
    pub monoisotopic_precursor: bool,
    pub clip_n_term_methionine: bool,
    pub digestion: TideDigestion,
    pub compute_sp: bool,
    pub max_psms: u32,
    pub compute_exact_p_values: bool,
    pub min_spectrum_mz: f64,
    /// `None` means no limit.
    pub max_spectrum_mz: Option<f64>,
    pub min_spectrum_peaks: u32,
    pub spectrum_charges: TideSpectrumCharges,
    pub remove_precursor: bool,
    pub remove_precursor_tolerance: f64,
    pub progress_indicator: u32,
    pub use_flanking_peaks: bool,
    pub use_neutral_loss_peaks: bool,
    pub mz_bin_width: f64,
    pub mz_bin_offset: f64,
    pub concatenate_target_decoy: bool,
    pub store_spectra_file: Option<String>,
    pub export_text: bool,
    pub export_sqt: bool,
    pub export_pepxml: bool,
    pub export_mzid: bool,
    pub export_pin: bool,
    pub remove_temp_folders: bool,
}

impl Default for TideParameters {
    fn default() -> Self {
        Self {
            max_variable_mods: None,
            max_variable_mods_per_type: 2,
            min_peptide_length: 6,
            max_peptide_length: 30,
            min_precursor_mass: 200.0,
            max_precursor_mass: 7200.0,
            decoy_format: TideDecoyFormat::None,
            kept_terminals: TideKeptTerminals::NC,
            decoy_seed: 1,
            output_folder: "crux-output".to_string(),
            print_peptides: false,
            verbosity: 30,
            monoisotopic_precursor: true,
            clip_n_term_methionine: false,
            digestion: TideDigestion::FullDigest,
            compute_sp: false,
            max_psms: 10,
            compute_exact_p_values: false,
            min_spectrum_mz: 0.0,
            max_spectrum_mz: None,
            min_spectrum_peaks: 20,
            spectrum_charges: TideSpectrumCharges::All,
            remove_precursor: false,
            remove_precursor_tolerance: 1.5,
            progress_indicator: 1000,
            use_flanking_peaks: false,
            use_neutral_loss_peaks: false,
            mz_bin_width: 0.02,
            mz_bin_offset: 0.0,
            concatenate_target_decoy: false,
            store_spectra_file: None,
            export_text: true,
            export_sqt: false,
            export_pepxml: false,
            export_mzid: false,
            export_pin: false,
            remove_temp_folders: true,
        }
    }
}

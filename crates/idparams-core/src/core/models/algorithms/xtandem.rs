use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct XTandemParameters {
    pub dynamic_range: f64,
    pub total_peaks: u32,
    pub min_fragment_mz: f64,
    pub min_peak_count: u32,
    pub use_noise_suppression: bool,
    /// Minimum parent M+H.
    pub min_precursor_mass: f64,
    pub protein_quick_acetyl: bool,
    pub quick_pyrolidone: bool,
    pub stp_bias: bool,
    pub refine: bool,
    pub refine_max_evalue: f64,
    pub refine_unanticipated_cleavage: bool,
    pub refine_semi: bool,
    pub potential_mods_for_full_refinement: bool,
    pub refine_point_mutations: bool,
    pub refine_snaps: bool,
    pub refine_spectrum_synthesis: bool,
    pub max_evalue: f64,
    pub output_proteins: bool,
    pub output_sequences: bool,
    pub output_spectra: bool,
    pub skyline_path: String,
}

impl Default for XTandemParameters {
    fn default() -> Self {
        Self {
            dynamic_range: 100.0,
            total_peaks: 50,
            min_fragment_mz: 200.0,
            min_peak_count: 15,
            use_noise_suppression: false,
            min_precursor_mass: 500.0,
            protein_quick_acetyl: true,
            quick_pyrolidone: true,
            stp_bias: false,
            refine: true,
            refine_max_evalue: 0.01,
            refine_unanticipated_cleavage: true,
            refine_semi: false,
            potential_mods_for_full_refinement: false,
            refine_point_mutations: false,
            refine_snaps: true,
            refine_spectrum_synthesis: true,
            max_evalue: 100.0,
            output_proteins: false,
            output_sequences: false,
            output_spectra: false,
            skyline_path: String::new(),
        }
    }
}

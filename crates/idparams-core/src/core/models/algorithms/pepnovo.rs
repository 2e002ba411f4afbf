use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PepNovoParameters {
    /// Number of de novo solutions reported per spectrum.
    pub hitlist_length: u32,
    pub estimate_charge: bool,
    pub correct_precursor_mass: bool,
    pub discard_low_quality_spectra: bool,
    pub fragmentation_model: String,
    pub generate_blast_query: bool,
}

impl Default for PepNovoParameters {
    fn default() -> Self {
        Self {
            hitlist_length: 10,
            estimate_charge: true,
            correct_precursor_mass: true,
            discard_low_quality_spectra: true,
            fragmentation_model: "CID_IT_TRYP".to_string(),
            generate_blast_query: false,
        }
    }
}

use crate::core::options::raw::OptionValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PNovoActivation {
    #[default]
    #[serde(rename = "HCD")]
    Hcd,
    #[serde(rename = "CID")]
    Cid,
    #[serde(rename = "ETD")]
    Etd,
}

impl OptionValue for PNovoActivation {
    fn from_option(raw: &str) -> Option<Self> {
        match raw {
            "HCD" => Some(PNovoActivation::Hcd),
            "CID" => Some(PNovoActivation::Cid),
            "ETD" => Some(PNovoActivation::Etd),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PNovoParameters {
    pub peptides_per_spectrum: u32,
    pub lower_precursor_mass: f64,
    pub upper_precursor_mass: f64,
    pub activation: PNovoActivation,
}

impl Default for PNovoParameters {
    fn default() -> Self {
        Self {
            peptides_per_spectrum: 10,
            lower_precursor_mass: 300.0,
            upper_precursor_mass: 5000.0,
            activation: PNovoActivation::Hcd,
        }
    }
}

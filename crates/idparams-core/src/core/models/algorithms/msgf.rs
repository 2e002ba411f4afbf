use crate::core::options::raw::OptionValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MsgfInstrument {
    LowResLtq,
    HighResLtq,
    Tof,
    #[default]
    QExactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MsgfFragmentation {
    /// As written in the spectrum, CID when absent.
    AsWritten,
    Cid,
    Etd,
    #[default]
    Hcd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MsgfProtocol {
    #[default]
    Automatic,
    Phosphorylation,
    Itraq,
    ItraqPhospho,
    Tmt,
    Standard,
}

impl OptionValue for MsgfInstrument {
    fn from_option(raw: &str) -> Option<Self> {
        match raw {
            "0" => Some(MsgfInstrument::LowResLtq),
            "1" => Some(MsgfInstrument::HighResLtq),
            "2" => Some(MsgfInstrument::Tof),
            "3" => Some(MsgfInstrument::QExactive),
            _ => None,
        }
    }
}

impl OptionValue for MsgfFragmentation {
    fn from_option(raw: &str) -> Option<Self> {
        match raw {
            "0" => Some(MsgfFragmentation::AsWritten),
            "1" => Some(MsgfFragmentation::Cid),
            "2" => Some(MsgfFragmentation::Etd),
            "3" => Some(MsgfFragmentation::Hcd),
            _ => None,
        }
    }
}

impl OptionValue for MsgfProtocol {
    fn from_option(raw: &str) -> Option<Self> {
        match raw {
            "0" => Some(MsgfProtocol::Automatic),
            "1" => Some(MsgfProtocol::Phosphorylation),
            "2" => Some(MsgfProtocol::Itraq),
            "3" => Some(MsgfProtocol::ItraqPhospho),
            "4" => Some(MsgfProtocol::Tmt),
            "5" => Some(MsgfProtocol::Standard),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MsgfParameters {
    pub search_decoy: bool,
    pub instrument: MsgfInstrument,
    pub fragmentation: MsgfFragmentation,
    pub protocol: MsgfProtocol,
    pub min_peptide_length: u32,
    pub max_peptide_length: u32,
    pub num_spectrum_matches: u32,
    pub additional_output: bool,
    pub lower_isotope_error: i32,
    pub upper_isotope_error: i32,
    /// 0 non-specific, 1 semi-specific, 2 fully specific.
    pub tolerable_termini: u32,
    pub max_ptms: u32,
}

impl Default for MsgfParameters {
    fn default() -> Self {
        Self {
            search_decoy: false,
            instrument: MsgfInstrument::QExactive,
            fragmentation: MsgfFragmentation::Hcd,
            protocol: MsgfProtocol::Automatic,
            min_peptide_length: 6,
            max_peptide_length: 30,
            num_spectrum_matches: 10,
            additional_output: false,
            lower_isotope_error: 0,
            upper_isotope_error: 1,
            tolerable_termini: 2,
            max_ptms: 2,
        }
    }
}

//! Per-engine parameter sets.
//!
//! Each supported search engine owns one plain record of typed fields. The
//! `Default` implementation of every record carries that engine's documented
//! defaults; binding only overwrites fields whose option was supplied.

pub mod comet;
pub mod directag;
pub mod ms_amanda;
pub mod msgf;
pub mod myrimatch;
pub mod omssa;
pub mod pepnovo;
pub mod pnovo;
pub mod tide;
pub mod xtandem;

pub use comet::CometParameters;
pub use directag::DirecTagParameters;
pub use ms_amanda::MsAmandaParameters;
pub use msgf::MsgfParameters;
pub use myrimatch::MyriMatchParameters;
pub use omssa::OmssaParameters;
pub use pepnovo::PepNovoParameters;
pub use pnovo::PNovoParameters;
pub use tide::TideParameters;
pub use xtandem::XTandemParameters;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The external search and de novo engines the parameters are prepared for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Omssa,
    XTandem,
    MsgfPlus,
    MsAmanda,
    MyriMatch,
    Comet,
    Tide,
    PepNovo,
    DirecTag,
    PNovo,
}

impl Algorithm {
    pub const ALL: [Algorithm; 10] = [
        Algorithm::Omssa,
        Algorithm::XTandem,
        Algorithm::MsgfPlus,
        Algorithm::MsAmanda,
        Algorithm::MyriMatch,
        Algorithm::Comet,
        Algorithm::Tide,
        Algorithm::PepNovo,
        Algorithm::DirecTag,
        Algorithm::PNovo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Omssa => "OMSSA",
            Algorithm::XTandem => "X!Tandem",
            Algorithm::MsgfPlus => "MS-GF+",
            Algorithm::MsAmanda => "MS Amanda",
            Algorithm::MyriMatch => "MyriMatch",
            Algorithm::Comet => "Comet",
            Algorithm::Tide => "Tide",
            Algorithm::PepNovo => "PepNovo+",
            Algorithm::DirecTag => "DirecTag",
            Algorithm::PNovo => "pNovo+",
        }
    }

    /// Parameter set holding this engine's defaults.
    pub fn default_parameters(self) -> AlgorithmParameters {
        match self {
            Algorithm::Omssa => AlgorithmParameters::Omssa(OmssaParameters::default()),
            Algorithm::XTandem => AlgorithmParameters::XTandem(XTandemParameters::default()),
            Algorithm::MsgfPlus => AlgorithmParameters::MsgfPlus(MsgfParameters::default()),
            Algorithm::MsAmanda => AlgorithmParameters::MsAmanda(MsAmandaParameters::default()),
            Algorithm::MyriMatch => AlgorithmParameters::MyriMatch(MyriMatchParameters::default()),
            Algorithm::Comet => AlgorithmParameters::Comet(CometParameters::default()),
            Algorithm::Tide => AlgorithmParameters::Tide(TideParameters::default()),
            Algorithm::PepNovo => AlgorithmParameters::PepNovo(PepNovoParameters::default()),
            Algorithm::DirecTag => AlgorithmParameters::DirecTag(DirecTagParameters::default()),
            Algorithm::PNovo => AlgorithmParameters::PNovo(PNovoParameters::default()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One engine's parameter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "kebab-case")]
pub enum AlgorithmParameters {
    Omssa(OmssaParameters),
    XTandem(XTandemParameters),
    MsgfPlus(MsgfParameters),
    MsAmanda(MsAmandaParameters),
    MyriMatch(MyriMatchParameters),
    Comet(CometParameters),
    Tide(TideParameters),
    PepNovo(PepNovoParameters),
    DirecTag(DirecTagParameters),
    PNovo(PNovoParameters),
}

impl AlgorithmParameters {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            AlgorithmParameters::Omssa(_) => Algorithm::Omssa,
            AlgorithmParameters::XTandem(_) => Algorithm::XTandem,
            AlgorithmParameters::MsgfPlus(_) => Algorithm::MsgfPlus,
            AlgorithmParameters::MsAmanda(_) => Algorithm::MsAmanda,
            AlgorithmParameters::MyriMatch(_) => Algorithm::MyriMatch,
            AlgorithmParameters::Comet(_) => Algorithm::Comet,
            AlgorithmParameters::Tide(_) => Algorithm::Tide,
            AlgorithmParameters::PepNovo(_) => Algorithm::PepNovo,
            AlgorithmParameters::DirecTag(_) => Algorithm::DirecTag,
            AlgorithmParameters::PNovo(_) => Algorithm::PNovo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_parameters_match_their_algorithm() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.default_parameters().algorithm(), algorithm);
        }
    }

    #[test]
    fn display_uses_engine_names() {
        assert_eq!(Algorithm::MsgfPlus.to_string(), "MS-GF+");
        assert_eq!(Algorithm::PNovo.to_string(), "pNovo+");
    }
}

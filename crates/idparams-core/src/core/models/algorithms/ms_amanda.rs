use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MsAmandaParameters {
    pub generate_decoy: bool,
    /// Ion types considered, as understood by MS Amanda (e.g. "b, y").
    pub instrument: String,
    pub max_rank: u32,
    pub monoisotopic: bool,
    pub low_memory_mode: bool,
}

impl Default for MsAmandaParameters {
    fn default() -> Self {
        Self {
            generate_decoy: false,
            instrument: "b, y".to_string(),
            max_rank: 10,
            monoisotopic: true,
            low_memory_mode: true,
        }
    }
}

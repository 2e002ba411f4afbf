use super::algorithms::{Algorithm, AlgorithmParameters};
use super::general::GeneralSearchParameters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The fully validated and bound identification parameters of one invocation.
///
/// A bundle is only produced by the binding stage after every applicable rule
/// accepted the raw options, or read back from a parameter file written from
/// such a bundle. It is not modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct IdentificationParameters {
    output_path: PathBuf,
    list_modifications: bool,
    general: GeneralSearchParameters,
    #[serde(with = "algorithm_list")]
    algorithms: BTreeMap<Algorithm, AlgorithmParameters>,
}

impl IdentificationParameters {
    pub(crate) fn new(
        general: GeneralSearchParameters,
        algorithms: BTreeMap<Algorithm, AlgorithmParameters>,
        output_path: PathBuf,
    ) -> Self {
        Self {
            output_path,
            list_modifications: false,
            general,
            algorithms,
        }
    }

    pub fn general(&self) -> &GeneralSearchParameters {
        &self.general
    }

    pub fn algorithms(&self) -> &BTreeMap<Algorithm, AlgorithmParameters> {
        &self.algorithms
    }

    pub fn algorithm(&self, algorithm: Algorithm) -> Option<&AlgorithmParameters> {
        self.algorithms.get(&algorithm)
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn list_modifications(&self) -> bool {
        self.list_modifications
    }
}

/// Engine parameter sets are written as an array of tables tagged by
/// `algorithm`, and re-keyed on read.
mod algorithm_list {
    use super::{Algorithm, AlgorithmParameters};
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S>(
        algorithms: &BTreeMap<Algorithm, AlgorithmParameters>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(algorithms.values())
    }

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<BTreeMap<Algorithm, AlgorithmParameters>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let list = Vec::<AlgorithmParameters>::deserialize(deserializer)?;
        Ok(list
            .into_iter()
            .map(|params| (params.algorithm(), params))
            .collect())
    }
}

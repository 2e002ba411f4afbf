use crate::core::models::bundle::IdentificationParameters;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use thiserror::Error;

/// Persists an [`IdentificationParameters`] bundle and reads it back.
///
/// Implementors supply the stream-level encoding; the path-based helpers open
/// and buffer the file.
pub trait ParameterStore {
    /// The error type for I/O and encoding failures.
    type Error: Error + From<io::Error>;

    /// Reads a bundle from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the content is not a valid bundle.
    fn read_from(reader: &mut impl BufRead) -> Result<IdentificationParameters, Self::Error>;

    /// Writes a bundle to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundle cannot be encoded or written.
    fn write_to(
        parameters: &IdentificationParameters,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    fn load<P: AsRef<Path>>(path: P) -> Result<IdentificationParameters, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    fn save<P: AsRef<Path>>(
        parameters: &IdentificationParameters,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(parameters, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to encode parameters: {0}")]
    Encode(#[from] toml::ser::Error),
    #[error("Failed to decode parameters: {0}")]
    Decode(#[from] toml::de::Error),
}

/// Stores bundles as human-readable TOML documents.
pub struct TomlParameterFile;

impl ParameterStore for TomlParameterFile {
    type Error = StoreError;

    fn read_from(reader: &mut impl BufRead) -> Result<IdentificationParameters, StoreError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Ok(toml::from_str(&content)?)
    }

    fn write_to(
        parameters: &IdentificationParameters,
        writer: &mut impl Write,
    ) -> Result<(), StoreError> {
        let content = toml::to_string_pretty(parameters)?;
        writer.write_all(content.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalogs::{EnzymeCatalog, EnzymeRegistry, ModificationCatalog, ModificationRegistry};
    use crate::core::models::algorithms::{Algorithm, AlgorithmParameters, TideParameters};
    use crate::core::models::general::GeneralSearchParametersBuilder;
    use std::collections::BTreeMap;
    use std::io::Cursor;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn sample_bundle() -> IdentificationParameters {
        let modifications = ModificationRegistry::builtin();
        let general = GeneralSearchParametersBuilder::new()
            .enzyme(EnzymeRegistry::builtin().resolve("Trypsin").cloned().unwrap())
            .database(PathBuf::from("/data/human.fasta"))
            .precursor_tolerance(5.0)
            .fixed_modifications(vec![
                modifications.resolve("Carbamidomethylation of C").cloned().unwrap(),
            ])
            .variable_modifications(vec![
                modifications.resolve("Oxidation of M").cloned().unwrap(),
            ])
            .build()
            .unwrap();

        let mut algorithms: BTreeMap<_, _> = Algorithm::ALL
            .iter()
            .map(|a| (*a, a.default_parameters()))
            .collect();
        let tide = TideParameters {
            max_variable_mods: Some(3),
            max_spectrum_mz: Some(1800.5),
            ..TideParameters::default()
        };
        algorithms.insert(Algorithm::Tide, AlgorithmParameters::Tide(tide));

        IdentificationParameters::new(general, algorithms, PathBuf::from("run1.parameters"))
    }

    #[test]
    fn bundle_round_trips_through_a_stream() {
        let bundle = sample_bundle();
        let mut buffer = Vec::new();
        TomlParameterFile::write_to(&bundle, &mut buffer).unwrap();

        let text = String::from_utf8(buffer.clone()).unwrap();
        assert!(text.contains("[[algorithms]]"));
        assert!(text.contains("algorithm = \"tide\""));

        let restored = TomlParameterFile::read_from(&mut Cursor::new(buffer)).unwrap();
        assert_eq!(restored, bundle);
    }

    #[test]
    fn bundle_round_trips_through_a_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run1.parameters");
        let bundle = sample_bundle();

        TomlParameterFile::save(&bundle, &path).unwrap();
        let restored = TomlParameterFile::load(&path).unwrap();

        assert_eq!(restored, bundle);
        assert_eq!(restored.algorithms().len(), Algorithm::ALL.len());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let result = TomlParameterFile::load(dir.path().join("absent.parameters"));
        assert!(matches!(result, Err(StoreError::Io(_))));
    }

    #[test]
    fn malformed_content_is_a_decode_error() {
        let mut reader = Cursor::new(b"output-path = 3".to_vec());
        let result = TomlParameterFile::read_from(&mut reader);
        assert!(matches!(result, Err(StoreError::Decode(_))));
    }
}

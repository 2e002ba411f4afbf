use super::mods;
use crate::config::AppConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use idparams::core::catalogs::{EnzymeRegistry, ModificationRegistry};
use idparams::engine::error::Rejection;
use idparams::engine::orchestrator::Outcome;
use idparams::engine::progress::ProgressReporter;
use idparams::workflows::generate::{self, Catalogs, WorkflowError};
use std::path::PathBuf;
use tracing::{info, warn};

/// How an invocation ended when no error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    Written(PathBuf),
    Listed,
    Rejected { diagnostics: usize },
}

/// Built-in catalogs extended with the configured enzyme and modification files.
pub fn load_catalogs(config: &AppConfig) -> Result<(EnzymeRegistry, ModificationRegistry)> {
    let mut enzymes = EnzymeRegistry::builtin();
    if let Some(path) = &config.enzymes_path {
        info!("Loading enzymes from {:?}", path);
        enzymes = enzymes.merge(EnzymeRegistry::load(path)?);
    }

    let mut modifications = ModificationRegistry::builtin();
    if let Some(path) = &config.user_modifications_path {
        info!("Loading user modifications from {:?}", path);
        modifications = modifications.with_user_file(path)?;
    }
    Ok((enzymes, modifications))
}

pub fn run(config: AppConfig, quiet: bool) -> Result<Summary> {
    let (enzymes, modifications) = load_catalogs(&config)?;

    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let catalogs = Catalogs {
        enzymes: &enzymes,
        modifications: &modifications,
    };
    let result = generate::run(&config.options, catalogs, config.validation_mode, &reporter);

    match result {
        Ok(Outcome::ListModifications) => {
            mods::run(&modifications)?;
            Ok(Summary::Listed)
        }
        Ok(Outcome::Bound(parameters)) => {
            let path = parameters.output_path().to_path_buf();
            println!("Identification parameters written to {}", path.display());
            Ok(Summary::Written(path))
        }
        Err(WorkflowError::Engine(error)) if error.rejection().is_some() => {
            let diagnostics = error.rejection().map_or(0, report_rejection);
            Ok(Summary::Rejected { diagnostics })
        }
        Err(error) => Err(error.into()),
    }
}

fn report_rejection(rejection: &Rejection) -> usize {
    warn!(stage = %rejection.stage(), "Invocation rejected");
    for diagnostic in rejection.diagnostics() {
        eprintln!("{}", diagnostic);
    }
    eprintln!("Run with -help to list the available options.");
    rejection.diagnostics().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use idparams::core::catalogs::{EnzymeCatalog, ModificationCatalog};
    use idparams::core::io::store::{ParameterStore, TomlParameterFile};
    use idparams::core::options::raw::RawOptionSet;
    use idparams::engine::orchestrator::ValidationMode;
    use std::fs;
    use tempfile::{NamedTempFile, tempdir};

    fn config(options: RawOptionSet) -> AppConfig {
        AppConfig {
            options,
            enzymes_path: None,
            user_modifications_path: None,
            validation_mode: ValidationMode::FailFast,
        }
    }

    #[test]
    fn writes_the_parameter_file() {
        let database = NamedTempFile::new().unwrap();
        let dir = tempdir().unwrap();
        let out = dir.path().join("run1");
        let options = RawOptionSet::new()
            .with("out", out.to_string_lossy())
            .with("db", database.path().to_string_lossy())
            .with("fixed_mods", "Carbamidomethylation of C");

        let summary = run(config(options), true).unwrap();

        let written = dir.path().join("run1.parameters");
        assert_eq!(summary, Summary::Written(written.clone()));
        let loaded = TomlParameterFile::load(&written).unwrap();
        assert_eq!(
            loaded.general().fixed_modification_names(),
            vec!["Carbamidomethylation of C"]
        );
    }

    #[test]
    fn rejection_is_not_an_error() {
        let options = RawOptionSet::new().with("out", "run1");
        let summary = run(config(options), true).unwrap();
        assert_eq!(summary, Summary::Rejected { diagnostics: 1 });
    }

    #[test]
    fn listing_is_reported() {
        let options = RawOptionSet::new().with("mods", "");
        assert_eq!(run(config(options), true).unwrap(), Summary::Listed);
    }

    #[test]
    fn configured_catalog_files_are_merged() {
        let dir = tempdir().unwrap();
        let enzymes_path = dir.path().join("enzymes.toml");
        fs::write(
            &enzymes_path,
            "[[enzyme]]\nname = \"Custom\"\ncleaves-after = \"W\"\n",
        )
        .unwrap();
        let mods_path = dir.path().join("user_mods.toml");
        fs::write(
            &mods_path,
            "[[modification]]\nname = \"Label of W\"\nmass = 12.5\nresidues = \"W\"\n",
        )
        .unwrap();

        let mut app = config(RawOptionSet::new());
        app.enzymes_path = Some(enzymes_path);
        app.user_modifications_path = Some(mods_path);

        let (enzymes, modifications) = load_catalogs(&app).unwrap();
        assert!(enzymes.resolve("Custom").is_some());
        assert!(enzymes.resolve("Trypsin").is_some());
        assert!(modifications.resolve("Label of W").is_some());
        assert_eq!(modifications.user_modifications().len(), 1);
    }

    #[test]
    fn unreadable_catalog_is_an_error() {
        let mut app = config(RawOptionSet::new());
        app.user_modifications_path = Some(PathBuf::from("/no/such/mods.csv"));
        assert!(load_catalogs(&app).is_err());
    }
}

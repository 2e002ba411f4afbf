use crate::core::catalogs::{EnzymeCatalog, ModificationCatalog};
use crate::core::io::store::{ParameterStore, StoreError, TomlParameterFile};
use crate::core::options::raw::RawOptionSet;
use crate::engine::error::{EngineError, Rejection};
use crate::engine::orchestrator::{Orchestrator, Outcome, ValidationMode};
use crate::engine::progress::{Progress, ProgressReporter};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, instrument};

/// The catalogs names are resolved against during one invocation.
#[derive(Clone, Copy)]
pub struct Catalogs<'a> {
    pub enzymes: &'a dyn EnzymeCatalog,
    pub modifications: &'a dyn ModificationCatalog,
}

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Failed to write parameters to '{path}': {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: StoreError,
    },
}

impl WorkflowError {
    /// The validation refusal, if that is what stopped the workflow.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            WorkflowError::Engine(error) => error.rejection(),
            WorkflowError::Persist { .. } => None,
        }
    }
}

/// Validates and binds `options`, then writes the bundle to its output path.
///
/// When the modification listing is requested nothing is written and
/// [`Outcome::ListModifications`] is returned so the caller can print it.
#[instrument(skip_all, name = "generate_workflow")]
pub fn run(
    options: &RawOptionSet,
    catalogs: Catalogs,
    mode: ValidationMode,
    reporter: &ProgressReporter,
) -> Result<Outcome, WorkflowError> {
    info!(options = options.len(), ?mode, "Generating identification parameters.");

    let mut orchestrator =
        Orchestrator::new(catalogs.enzymes, catalogs.modifications, reporter).with_mode(mode);

    let parameters = match orchestrator.run(options)? {
        Outcome::ListModifications => return Ok(Outcome::ListModifications),
        Outcome::Bound(parameters) => parameters,
    };

    let path = parameters.output_path().to_path_buf();
    reporter.phase("Saving parameters", || {
        TomlParameterFile::save(&parameters, &path).map_err(|source| WorkflowError::Persist {
            path: path.clone(),
            source,
        })
    })?;
    orchestrator.finish()?;

    reporter.report(Progress::Message(format!(
        "Identification parameters saved to {}",
        path.display()
    )));
    info!(path = %path.display(), "Workflow complete.");
    Ok(Outcome::Bound(parameters))
}

use idparams::core::options::raw::RawOptionSet;
use idparams::engine::orchestrator::ValidationMode;
use std::path::PathBuf;

/// Everything one `idparams` invocation needs after all layers are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub options: RawOptionSet,
    pub enzymes_path: Option<PathBuf>,
    pub user_modifications_path: Option<PathBuf>,
    pub validation_mode: ValidationMode,
}

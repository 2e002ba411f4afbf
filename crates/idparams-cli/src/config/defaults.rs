use directories::ProjectDirs;
use idparams::engine::orchestrator::ValidationMode;
use std::path::PathBuf;

const USER_MODIFICATIONS_FILE: &str = "user_mods.csv";

pub struct DefaultsConfig {
    pub validation_mode: ValidationMode,
    /// Picked up only when the file exists.
    pub user_modifications_path: Option<PathBuf>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            validation_mode: ValidationMode::FailFast,
            user_modifications_path: default_user_modifications_path(),
        }
    }
}

/// `user_mods.csv` in the per-user configuration directory.
pub fn default_user_modifications_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "idparams", "idparams")
        .map(|dirs| dirs.config_dir().join(USER_MODIFICATIONS_FILE))
}

use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::Cli;
use crate::error::Result;
use idparams::core::options::raw::RawOptionSet;
use idparams::engine::orchestrator::ValidationMode;
use std::path::PathBuf;
use tracing::debug;

/// Merges the layers. Command-line values win over the config file, which wins
/// over built-in defaults.
pub fn build_config(cli: &Cli, defaults: DefaultsConfig) -> Result<AppConfig> {
    let file_config = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };

    let options = merge_options(&file_config, &cli.options)?;

    let file_catalogs = file_config.catalogs.clone().unwrap_or_default();
    let enzymes_path = cli.enzymes.clone().or(file_catalogs.enzymes);
    let user_modifications_path = cli
        .user_modifications
        .clone()
        .or(file_catalogs.modifications)
        .or_else(|| existing(defaults.user_modifications_path));

    let report_all = cli.report_all
        || file_config
            .validation
            .as_ref()
            .and_then(|v| v.report_all)
            .unwrap_or(false);
    let validation_mode = if report_all {
        ValidationMode::AccumulateAll
    } else {
        defaults.validation_mode
    };

    debug!(
        options = options.len(),
        ?enzymes_path,
        ?user_modifications_path,
        ?validation_mode,
        "Configuration merged"
    );

    Ok(AppConfig {
        options,
        enzymes_path,
        user_modifications_path,
        validation_mode,
    })
}

fn merge_options(file_config: &FileConfig, cli_options: &RawOptionSet) -> Result<RawOptionSet> {
    let mut merged: RawOptionSet = file_config.raw_options()?.into_iter().collect();
    for (id, value) in cli_options.iter() {
        merged = merged.with(id, value);
    }
    Ok(merged)
}

fn existing(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| p.is_file())
}

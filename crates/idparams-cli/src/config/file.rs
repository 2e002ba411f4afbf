use crate::error::{CliError, Result};
use idparams::core::options::catalog;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileCatalogsConfig {
    pub enzymes: Option<PathBuf>,
    pub modifications: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileValidationConfig {
    pub report_all: Option<bool>,
}

/// Contents of a `--config` file. Every section is optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub catalogs: Option<FileCatalogsConfig>,
    pub validation: Option<FileValidationConfig>,
    /// Default raw option values, keyed by option id.
    #[serde(default)]
    pub options: BTreeMap<String, toml::Value>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading configuration file {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        let mut config: FileConfig = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        config.resolve_relative_paths(path.parent().unwrap_or_else(|| Path::new("")));
        Ok(config)
    }

    /// Catalog paths in a config file are relative to that file.
    fn resolve_relative_paths(&mut self, base: &Path) {
        if let Some(catalogs) = self.catalogs.as_mut() {
            for path in [&mut catalogs.enzymes, &mut catalogs.modifications]
                .into_iter()
                .flatten()
            {
                if path.is_relative() {
                    *path = base.join(&*path);
                }
            }
        }
    }

    /// The `[options]` table as raw option strings.
    ///
    /// Strings are taken as written, numbers in their decimal form and booleans as
    /// the `1`/`0` flags the option rules expect. A value-less flag such as `mods`
    /// set to `false` is left out, since supplying the flag at all turns it on.
    pub fn raw_options(&self) -> Result<Vec<(String, String)>> {
        let mut raw_options = Vec::with_capacity(self.options.len());
        for (id, value) in &self.options {
            let raw = match value {
                toml::Value::String(s) => s.clone(),
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(false) if is_flag(id) => {
                    debug!(option = %id, "Flag disabled in configuration file");
                    continue;
                }
                toml::Value::Boolean(b) => String::from(if *b { "1" } else { "0" }),
                other => {
                    return Err(CliError::Config(format!(
                        "Option '{}' must be a string, number or boolean, found {}",
                        id,
                        other.type_str()
                    )));
                }
            };
            raw_options.push((id.clone(), raw));
        }
        Ok(raw_options)
    }
}

fn is_flag(id: &str) -> bool {
    catalog::lookup(id).is_some_and(|descriptor| !descriptor.takes_value)
}

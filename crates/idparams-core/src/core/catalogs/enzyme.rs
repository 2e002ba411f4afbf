use super::CatalogError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// A proteolytic enzyme described by its cleavage sites.
///
/// Residues are given as one-letter amino acid codes. `cleaves_after` lists the
/// residues at the C-terminal side of which the enzyme cuts, `cleaves_before` the
/// residues at whose N-terminal side it cuts. The restriction lists block a cut
/// when the neighbouring residue matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Enzyme {
    pub name: String,
    #[serde(default)]
    pub cleaves_after: String,
    #[serde(default)]
    pub cleaves_before: String,
    #[serde(default)]
    pub restricted_after: String,
    #[serde(default)]
    pub restricted_before: String,
}

impl Enzyme {
    fn builtin(name: &str, after: &str, before: &str, restricted_after: &str) -> Self {
        Self {
            name: name.to_string(),
            cleaves_after: after.to_string(),
            cleaves_before: before.to_string(),
            restricted_after: restricted_after.to_string(),
            restricted_before: String::new(),
        }
    }
}

pub trait EnzymeCatalog {
    /// Exact, case-sensitive lookup by enzyme name.
    fn resolve(&self, name: &str) -> Option<&Enzyme>;
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EnzymeFile {
    #[serde(default)]
    enzyme: Vec<Enzyme>,
}

/// In-memory enzyme catalog preserving definition order.
#[derive(Debug, Clone, Default)]
pub struct EnzymeRegistry {
    enzymes: Vec<Enzyme>,
}

impl EnzymeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The enzymes available without any catalog file.
    pub fn builtin() -> Self {
        let enzymes = vec![
            Enzyme::builtin("Trypsin", "RK", "", "P"),
            Enzyme::builtin("Trypsin (no P rule)", "RK", "", ""),
            Enzyme::builtin("Arg-C", "R", "", "P"),
            Enzyme::builtin("Arg-C (no P rule)", "R", "", ""),
            Enzyme::builtin("Arg-N", "", "R", ""),
            Enzyme::builtin("Glu-C", "E", "", ""),
            Enzyme::builtin("Lys-C", "K", "", "P"),
            Enzyme::builtin("Lys-C (no P rule)", "K", "", ""),
            Enzyme::builtin("Lys-N", "", "K", ""),
            Enzyme::builtin("Asp-N", "", "D", ""),
            Enzyme::builtin("Asp-N (ambic)", "", "DE", ""),
            Enzyme::builtin("Chymotrypsin", "FYWL", "", "P"),
            Enzyme::builtin("Chymotrypsin (no P rule)", "FYWL", "", ""),
            Enzyme::builtin("Pepsin A", "FL", "", ""),
            Enzyme::builtin("CNBr", "M", "", ""),
            Enzyme::builtin("Thermolysin", "", "AFILMV", ""),
            Enzyme::builtin("LysargiNase", "", "RK", ""),
        ];
        Self { enzymes }
    }

    /// Loads enzymes from a TOML file of `[[enzyme]]` tables.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        debug!("Loading enzyme catalog from {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let file: EnzymeFile = toml::from_str(&content).map_err(|e| CatalogError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

        let mut registry = Self::new();
        for enzyme in file.enzyme {
            if registry.resolve(&enzyme.name).is_some() {
                return Err(CatalogError::Duplicate {
                    path: path.to_string_lossy().to_string(),
                    name: enzyme.name,
                });
            }
            registry.enzymes.push(enzyme);
        }
        Ok(registry)
    }

    /// Adds or replaces enzymes by name; entries of `other` win.
    pub fn merge(mut self, other: EnzymeRegistry) -> Self {
        for enzyme in other.enzymes {
            match self.enzymes.iter_mut().find(|e| e.name == enzyme.name) {
                Some(existing) => *existing = enzyme,
                None => self.enzymes.push(enzyme),
            }
        }
        self
    }

    pub fn len(&self) -> usize {
        self.enzymes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enzymes.is_empty()
    }
}

impl EnzymeCatalog for EnzymeRegistry {
    fn resolve(&self, name: &str) -> Option<&Enzyme> {
        self.enzymes.iter().find(|e| e.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn builtin_catalog_resolves_trypsin_exactly() {
        let registry = EnzymeRegistry::builtin();
        let trypsin = registry.resolve("Trypsin").unwrap();
        assert_eq!(trypsin.cleaves_after, "RK");
        assert_eq!(trypsin.restricted_after, "P");
        assert!(registry.resolve("trypsin").is_none());
        assert!(registry.resolve("Trypsin ").is_none());
    }

    #[test]
    fn load_reads_enzyme_tables() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("enzymes.toml");
        fs::write(
            &path,
            r#"
            [[enzyme]]
            name = "Custom"
            cleaves-after = "W"
            restricted-after = "P"

            [[enzyme]]
            name = "Trypsin"
            cleaves-after = "K"
            "#,
        )
        .unwrap();

        let loaded = EnzymeRegistry::load(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.resolve("Custom").unwrap().restricted_after, "P");

        let merged = EnzymeRegistry::builtin().merge(loaded);
        assert_eq!(merged.resolve("Trypsin").unwrap().cleaves_after, "K");
        assert!(merged.resolve("Custom").is_some());
        assert_eq!(merged.len(), EnzymeRegistry::builtin().len() + 1);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = EnzymeRegistry::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn load_fails_for_unknown_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("enzymes.toml");
        fs::write(&path, "[[enzyme]]\nname = \"X\"\ncuts = \"K\"\n").unwrap();
        assert!(matches!(
            EnzymeRegistry::load(&path),
            Err(CatalogError::Toml { .. })
        ));
    }

    #[test]
    fn load_rejects_duplicate_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("enzymes.toml");
        fs::write(
            &path,
            "[[enzyme]]\nname = \"X\"\n\n[[enzyme]]\nname = \"X\"\n",
        )
        .unwrap();
        assert!(matches!(
            EnzymeRegistry::load(&path),
            Err(CatalogError::Duplicate { .. })
        ));
    }
}

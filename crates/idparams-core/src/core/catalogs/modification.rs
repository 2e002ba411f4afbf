use super::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModificationKind {
    /// On the listed residues anywhere in the peptide.
    #[default]
    Residue,
    PeptideNTerm,
    PeptideCTerm,
    ProteinNTerm,
    ProteinCTerm,
}

impl fmt::Display for ModificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ModificationKind::Residue => "residue",
            ModificationKind::PeptideNTerm => "peptide N-term",
            ModificationKind::PeptideCTerm => "peptide C-term",
            ModificationKind::ProteinNTerm => "protein N-term",
            ModificationKind::ProteinCTerm => "protein C-term",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Modification {
    pub name: String,
    /// Monoisotopic mass shift in Dalton.
    pub mass: f64,
    #[serde(default)]
    pub kind: ModificationKind,
    /// One-letter codes of the targeted residues, empty for unrestricted termini.
    #[serde(default)]
    pub residues: String,
}

impl Modification {
    fn builtin(name: &str, mass: f64, kind: ModificationKind, residues: &str) -> Self {
        Self {
            name: name.to_string(),
            mass,
            kind,
            residues: residues.to_string(),
        }
    }
}

pub trait ModificationCatalog {
    /// Exact, case-sensitive lookup across default and user modifications.
    fn resolve(&self, name: &str) -> Option<&Modification>;

    fn default_modifications(&self) -> Vec<&Modification>;

    fn user_modifications(&self) -> Vec<&Modification>;
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModificationFile {
    #[serde(default)]
    modification: Vec<Modification>,
}

#[derive(Debug, Clone, Default)]
pub struct ModificationRegistry {
    defaults: Vec<Modification>,
    user: Vec<Modification>,
}

impl ModificationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        use ModificationKind::*;
        let defaults = vec![
            Modification::builtin("Acetylation of K", 42.010565, Residue, "K"),
            Modification::builtin("Acetylation of peptide N-term", 42.010565, PeptideNTerm, ""),
            Modification::builtin("Acetylation of protein N-term", 42.010565, ProteinNTerm, ""),
            Modification::builtin("Carbamidomethylation of C", 57.021464, Residue, "C"),
            Modification::builtin("Carbamidomethylation of E", 57.021464, Residue, "E"),
            Modification::builtin("Carbamidomethylation of K", 57.021464, Residue, "K"),
            Modification::builtin("Oxidation of M", 15.994915, Residue, "M"),
            Modification::builtin("Oxidation of P", 15.994915, Residue, "P"),
            Modification::builtin("Oxidation of K", 15.994915, Residue, "K"),
            Modification::builtin("Oxidation of C", 15.994915, Residue, "C"),
            Modification::builtin("Dioxidation of M", 31.989829, Residue, "M"),
            Modification::builtin("Dioxidation of W", 31.989829, Residue, "W"),
            Modification::builtin("Trioxidation of C", 47.984744, Residue, "C"),
            Modification::builtin("Phosphorylation of S", 79.966331, Residue, "S"),
            Modification::builtin("Phosphorylation of T", 79.966331, Residue, "T"),
            Modification::builtin("Phosphorylation of Y", 79.966331, Residue, "Y"),
            Modification::builtin("Deamidation of N", 0.984016, Residue, "N"),
            Modification::builtin("Deamidation of Q", 0.984016, Residue, "Q"),
            Modification::builtin("Pyrolidone from Q", -17.026549, PeptideNTerm, "Q"),
            Modification::builtin("Pyrolidone from E", -18.010565, PeptideNTerm, "E"),
            Modification::builtin("Methylation of K", 14.01565, Residue, "K"),
            Modification::builtin("Dimethylation of K", 28.0313, Residue, "K"),
            Modification::builtin("Arginine 13C(6)", 6.020129, Residue, "R"),
            Modification::builtin("Arginine 13C(6) 15N(4)", 10.008269, Residue, "R"),
            Modification::builtin("Lysine 2H(4)", 4.025107, Residue, "K"),
            Modification::builtin("Lysine 13C(6)", 6.020129, Residue, "K"),
            Modification::builtin("Lysine 13C(6) 15N(2)", 8.014199, Residue, "K"),
            Modification::builtin("18O(2) of peptide C-term", 4.008491, PeptideCTerm, ""),
            Modification::builtin("iTRAQ 4-plex of K", 144.102063, Residue, "K"),
            Modification::builtin("iTRAQ 4-plex of peptide N-term", 144.102063, PeptideNTerm, ""),
            Modification::builtin("TMT 6-plex of K", 229.162932, Residue, "K"),
            Modification::builtin("TMT 6-plex of peptide N-term", 229.162932, PeptideNTerm, ""),
        ];
        Self {
            defaults,
            user: Vec::new(),
        }
    }

    /// Adds user-defined modifications read from a `.csv` or `.toml` file.
    ///
    /// CSV files carry a `name,mass,kind,residues` header; TOML files hold
    /// `[[modification]]` tables with the same keys. A name that is already
    /// known, default or user, is rejected.
    pub fn with_user_file(mut self, path: &Path) -> Result<Self, CatalogError> {
        debug!("Loading user modifications from {:?}", path);
        let loaded = match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Self::read_csv(path)?,
            Some("toml") => Self::read_toml(path)?,
            _ => {
                return Err(CatalogError::UnsupportedFormat {
                    path: path.to_string_lossy().to_string(),
                });
            }
        };
        for modification in loaded {
            if self.resolve(&modification.name).is_some() {
                return Err(CatalogError::Duplicate {
                    path: path.to_string_lossy().to_string(),
                    name: modification.name,
                });
            }
            self.user.push(modification);
        }
        Ok(self)
    }

    fn read_csv(path: &Path) -> Result<Vec<Modification>, CatalogError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| CatalogError::Csv {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;

        let mut modifications = Vec::new();
        for result in reader.deserialize::<Modification>() {
            let record = result.map_err(|e| CatalogError::Csv {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
            modifications.push(record);
        }
        Ok(modifications)
    }

    fn read_toml(path: &Path) -> Result<Vec<Modification>, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let file: ModificationFile = toml::from_str(&content).map_err(|e| CatalogError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Ok(file.modification)
    }
}

impl ModificationCatalog for ModificationRegistry {
    fn resolve(&self, name: &str) -> Option<&Modification> {
        self.defaults
            .iter()
            .chain(self.user.iter())
            .find(|m| m.name == name)
    }

    fn default_modifications(&self) -> Vec<&Modification> {
        self.defaults.iter().collect()
    }

    fn user_modifications(&self) -> Vec<&Modification> {
        self.user.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn builtin_catalog_resolves_common_modifications() {
        let registry = ModificationRegistry::builtin();
        let oxidation = registry.resolve("Oxidation of M").unwrap();
        assert_eq!(oxidation.mass, 15.994915);
        assert_eq!(oxidation.residues, "M");
        assert!(registry.resolve("oxidation of m").is_none());
        assert!(registry.user_modifications().is_empty());
    }

    #[test]
    fn user_modifications_load_from_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("user.csv");
        fs::write(
            &path,
            "name,mass,kind,residues\nMy label, 12.5, residue, K\nMy cap,3.0,peptide-n-term,\n",
        )
        .unwrap();

        let registry = ModificationRegistry::builtin().with_user_file(&path).unwrap();
        let user = registry.user_modifications();
        assert_eq!(user.len(), 2);
        assert_eq!(user[0].name, "My label");
        assert_eq!(user[0].residues, "K");
        assert_eq!(user[1].kind, ModificationKind::PeptideNTerm);
        assert!(registry.resolve("My cap").is_some());
        assert!(registry.resolve("Oxidation of M").is_some());
    }

    #[test]
    fn user_modifications_load_from_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("user.toml");
        fs::write(
            &path,
            r#"
            [[modification]]
            name = "Sulfation of Y"
            mass = 79.956815
            residues = "Y"
            "#,
        )
        .unwrap();

        let registry = ModificationRegistry::new().with_user_file(&path).unwrap();
        let sulfation = registry.resolve("Sulfation of Y").unwrap();
        assert_eq!(sulfation.kind, ModificationKind::Residue);
        assert!(registry.default_modifications().is_empty());
    }

    #[test]
    fn user_file_cannot_redefine_known_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("user.csv");
        fs::write(&path, "name,mass,kind,residues\nOxidation of M,16.0,residue,M\n").unwrap();
        let result = ModificationRegistry::builtin().with_user_file(&path);
        assert!(matches!(result, Err(CatalogError::Duplicate { .. })));
    }

    #[test]
    fn malformed_csv_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("user.csv");
        fs::write(&path, "name,mass\nBroken,not-a-number\n").unwrap();
        let result = ModificationRegistry::builtin().with_user_file(&path);
        assert!(matches!(result, Err(CatalogError::Csv { .. })));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("user.json");
        fs::write(&path, "{}").unwrap();
        let result = ModificationRegistry::builtin().with_user_file(&path);
        assert!(matches!(result, Err(CatalogError::UnsupportedFormat { .. })));
    }
}

use crate::error::Result;
use idparams::core::catalogs::{Modification, ModificationCatalog};
use std::io::{self, Write};

/// Prints the default and user modifications to stdout.
pub fn run(catalog: &dyn ModificationCatalog) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_listing(catalog, &mut out)?;
    out.flush()?;
    Ok(())
}

pub fn write_listing(catalog: &dyn ModificationCatalog, out: &mut impl Write) -> io::Result<()> {
    write_group(out, "Default modifications:", &catalog.default_modifications())?;
    writeln!(out)?;
    write_group(out, "User modifications:", &catalog.user_modifications())
}

fn write_group(out: &mut impl Write, title: &str, modifications: &[&Modification]) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    if modifications.is_empty() {
        return writeln!(out, "  (none)");
    }
    for modification in modifications {
        write!(
            out,
            "  {} ({:+.6} Da, {}",
            modification.name, modification.mass, modification.kind
        )?;
        if !modification.residues.is_empty() {
            write!(out, " {}", modification.residues)?;
        }
        writeln!(out, ")")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use idparams::core::catalogs::ModificationRegistry;
    use std::fs;
    use tempfile::tempdir;

    fn listing(catalog: &dyn ModificationCatalog) -> String {
        let mut buffer = Vec::new();
        write_listing(catalog, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn builtin_listing_has_both_groups() {
        let text = listing(&ModificationRegistry::builtin());

        assert!(text.starts_with("Default modifications:\n"));
        assert!(text.contains("  Oxidation of M (+15.994915 Da, residue M)\n"));
        assert!(text.contains("  Acetylation of protein N-term (+42.010565 Da, protein N-term)\n"));
        assert!(text.ends_with("User modifications:\n  (none)\n"));
    }

    #[test]
    fn user_modifications_are_listed_separately() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("user_mods.csv");
        fs::write(&path, "name,mass,kind,residues\nMy label of K,100.5,residue,K\n").unwrap();
        let catalog = ModificationRegistry::builtin().with_user_file(&path).unwrap();

        let text = listing(&catalog);
        let user_section = text.split("User modifications:").nth(1).unwrap();
        assert!(user_section.contains("My label of K (+100.500000 Da, residue K)"));
        assert!(!user_section.contains("Oxidation of M"));
    }
}

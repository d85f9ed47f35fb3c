use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

/// Lit un fichier de mots : une entrée par ligne, lignes vides et
/// commentaires `#` ignorés. Les entrées sont retournées brutes, le
/// nettoyage appartient à [`crate::clean::prepare`].
///
/// # Errors
/// Returns an error if the file cannot be read.
///
/// # Example
/// ```no_run
/// use mc_words::list::load_words;
/// use std::path::Path;
/// let entries = load_words(Path::new("mots.txt")).unwrap();
/// ```
pub fn load_words(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let entries: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    debug!("{} entrée(s) lue(s) depuis {}", entries.len(), path.display());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_words_skips_blanks_and_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mots.txt");
        std::fs::write(&path, "# animaux\ngato\n\n  cachorro  \n# fin\ncoelho\n").unwrap();

        let entries = load_words(&path).unwrap();
        assert_eq!(entries, vec!["gato", "cachorro", "coelho"]);
    }

    #[test]
    fn load_words_missing_file_fails() {
        assert!(load_words(Path::new("/nonexistent/mots.txt")).is_err());
    }
}

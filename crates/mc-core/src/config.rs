use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::pool::{LetterPool, preset};

/// Côté minimal d'une grille acceptée par la configuration.
pub const MIN_SIDE: u16 = 10;
/// Côté maximal d'une grille acceptée par la configuration.
pub const MAX_SIDE: u16 = 25;

/// Configuration complète d'une génération de grille.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use mc_core::config::PuzzleConfig;
/// let config = PuzzleConfig::default();
/// assert_eq!(config.width, 15);
/// assert_eq!(config.pool_preset, "portugues");
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PuzzleConfig {
    // === Grille ===
    /// Largeur de la grille [10, 25].
    pub width: u16,
    /// Hauteur de la grille [10, 25].
    pub height: u16,

    // === Pool de lettres ===
    /// Preset de fréquences : "portugues" | "francais" | "english".
    pub pool_preset: String,
    /// Table (lettre, poids) explicite. Prioritaire sur le preset.
    pub pool_weights: Option<Vec<PoolWeight>>,

    // === Sortie ===
    /// Format de sortie.
    pub format: OutputFormat,
    /// Titre imprimé en tête de la feuille.
    pub title: String,

    // === Générateur ===
    /// Graine du générateur aléatoire. `None` = graine ambiante.
    pub seed: Option<u64>,
}

/// Une entrée de la table de poids du pool, côté TOML.
///
/// # Example
/// ```
/// use mc_core::config::PoolWeight;
/// let entry = PoolWeight { letter: 'A', weight: 14 };
/// assert_eq!(entry.letter, 'A');
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PoolWeight {
    /// Lettre majuscule (latin accentué accepté).
    pub letter: char,
    /// Poids relatif. Les poids nuls sont ignorés.
    pub weight: u32,
}

/// Format de sortie de la feuille générée.
///
/// # Example
/// ```
/// use mc_core::config::OutputFormat;
/// let format = OutputFormat::default();
/// assert!(matches!(format, OutputFormat::Text));
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Feuille imprimable : grille + liste des mots.
    #[default]
    Text,
    /// Document JSON : grille, placements, mots écartés.
    Json,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            width: 15,
            height: 15,
            pool_preset: "portugues".to_string(),
            pool_weights: None,
            format: OutputFormat::Text,
            title: "Mots cachés".to_string(),
            seed: None,
        }
    }
}

impl PuzzleConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.width = self.width.clamp(MIN_SIDE, MAX_SIDE);
        self.height = self.height.clamp(MIN_SIDE, MAX_SIDE);
    }

    /// Construit le pool de lettres : table explicite si présente, preset
    /// nommé sinon.
    ///
    /// # Errors
    /// Retourne [`CoreError::UnknownPreset`] si le nom de preset est inconnu,
    /// [`CoreError::EmptyPool`] si la table n'a aucun poids positif.
    ///
    /// # Example
    /// ```
    /// use mc_core::config::PuzzleConfig;
    /// let pool = PuzzleConfig::default().build_pool().unwrap();
    /// assert!(!pool.is_empty());
    /// ```
    pub fn build_pool(&self) -> Result<LetterPool, CoreError> {
        if let Some(weights) = &self.pool_weights {
            let table: Vec<(char, u32)> = weights
                .iter()
                .map(|entry| (entry.letter, entry.weight))
                .collect();
            return LetterPool::from_weights(&table);
        }
        let table = preset(&self.pool_preset).ok_or_else(|| CoreError::UnknownPreset {
            name: self.pool_preset.clone(),
        })?;
        LetterPool::from_weights(table)
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    grid: Option<GridSection>,
    pool: Option<PoolSection>,
    output: Option<OutputSection>,
    generator: Option<GeneratorSection>,
}

/// Grid section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct GridSection {
    width: Option<u16>,
    height: Option<u16>,
}

/// Pool section of the TOML config, all fields optional.
#[derive(Deserialize)]
struct PoolSection {
    preset: Option<String>,
    weights: Option<Vec<PoolWeight>>,
}

/// Output section of the TOML config, all fields optional.
#[derive(Deserialize)]
struct OutputSection {
    format: Option<OutputFormat>,
    title: Option<String>,
}

/// Generator section of the TOML config, all fields optional.
#[derive(Deserialize)]
struct GeneratorSection {
    seed: Option<u64>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use mc_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<PuzzleConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))?;

    let mut config = PuzzleConfig::default();

    if let Some(g) = file.grid {
        if let Some(v) = g.width {
            config.width = v;
        }
        if let Some(v) = g.height {
            config.height = v;
        }
    }

    if let Some(p) = file.pool {
        if let Some(v) = p.preset {
            config.pool_preset = v;
        }
        if let Some(v) = p.weights {
            config.pool_weights = Some(v);
        }
    }

    if let Some(o) = file.output {
        if let Some(v) = o.format {
            config.format = v;
        }
        if let Some(v) = o.title {
            config.title = v;
        }
    }

    if let Some(g) = file.generator {
        if let Some(v) = g.seed {
            config.seed = Some(v);
        }
    }

    config.clamp_all();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_in_range() {
        let mut config = PuzzleConfig::default();
        let before = (config.width, config.height);
        config.clamp_all();
        assert_eq!((config.width, config.height), before);
    }

    #[test]
    fn clamp_all_enforces_grid_range() {
        let mut config = PuzzleConfig {
            width: 3,
            height: 200,
            ..PuzzleConfig::default()
        };
        config.clamp_all();
        assert_eq!(config.width, MIN_SIDE);
        assert_eq!(config.height, MAX_SIDE);
    }

    #[test]
    fn load_config_merges_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "[grid]\nwidth = 12\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.width, 12);
        assert_eq!(config.height, PuzzleConfig::default().height);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn load_config_reads_inline_weights() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weights.toml");
        std::fs::write(
            &path,
            "[pool]\nweights = [{ letter = \"A\", weight = 3 }, { letter = \"B\", weight = 1 }]\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        let pool = config.build_pool().unwrap();
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn load_config_reads_output_and_generator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("full.toml");
        std::fs::write(
            &path,
            "[output]\nformat = \"json\"\ntitle = \"Animaux\"\n\n[generator]\nseed = 7\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.title, "Animaux");
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn build_pool_rejects_unknown_preset() {
        let config = PuzzleConfig {
            pool_preset: "klingon".to_string(),
            ..PuzzleConfig::default()
        };
        assert!(matches!(
            config.build_pool(),
            Err(CoreError::UnknownPreset { .. })
        ));
    }

    #[test]
    fn load_config_missing_file_fails() {
        assert!(load_config(Path::new("/nonexistent/motscaches.toml")).is_err());
    }
}

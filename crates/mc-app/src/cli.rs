use std::path::PathBuf;

use clap::Parser;

/// motscaches — Générateur de grilles de mots cachés.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Mots à cacher. Nettoyés et passés en majuscules automatiquement.
    pub words: Vec<String>,

    /// Fichier de mots : une entrée par ligne, commentaires `#` ignorés.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Largeur de la grille [10, 25].
    #[arg(long)]
    pub width: Option<u16>,

    /// Hauteur de la grille [10, 25].
    #[arg(long)]
    pub height: Option<u16>,

    /// Pool de lettres de remplissage : portugues, francais, english.
    #[arg(long)]
    pub pool: Option<String>,

    /// Graine du générateur aléatoire, pour une grille reproductible.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Format de sortie : text, json.
    #[arg(long)]
    pub format: Option<String>,

    /// Fichier de sortie. Défaut : stdout.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Titre imprimé en tête de la feuille.
    #[arg(long)]
    pub title: Option<String>,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Charger un preset nommé depuis config/presets/ (ignore --config).
    #[arg(long)]
    pub preset: Option<String>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Validate that at least one word source is provided.
    ///
    /// # Errors
    /// Returns an error if neither positional words nor --file are given.
    pub fn validate_words(&self) -> anyhow::Result<()> {
        if self.words.is_empty() && self.file.is_none() {
            anyhow::bail!(
                "Aucun mot fourni. Passez des mots en arguments ou utilisez --file."
            );
        }
        Ok(())
    }
}

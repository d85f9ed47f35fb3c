use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mc_core::config::{OutputFormat, PuzzleConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub mod cli;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Valider l'entrée
    cli.validate_words()?;

    // 4. Charger la config
    let mut config = resolve_config(&cli)?;

    // 4b. Appliquer les overrides CLI
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if let Some(ref pool) = cli.pool {
        config.pool_preset = pool.clone();
        config.pool_weights = None;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(ref format) = cli.format {
        config.format = match format.as_str() {
            "text" => OutputFormat::Text,
            "json" => OutputFormat::Json,
            _ => {
                log::warn!("Format inconnu '{format}', utilisation du défaut.");
                config.format
            }
        };
    }
    if let Some(ref title) = cli.title {
        config.title = title.clone();
    }
    config.clamp_all();

    // 5. Rassembler et préparer les mots
    let mut entries = cli.words.clone();
    if let Some(ref path) = cli.file {
        entries.extend(mc_words::load_words(path)?);
    }
    let words = mc_words::prepare(&entries)?;
    mc_words::check_lengths(&words, config.width, config.height)?;
    log::info!(
        "{} mot(s) à placer sur une grille {}x{}",
        words.len(),
        config.width,
        config.height
    );

    // 6. Construire le pool et générer
    let pool = config.build_pool()?;
    let puzzle = match config.seed {
        Some(seed) => {
            log::info!("Graine fixée : {seed}");
            let mut rng = StdRng::seed_from_u64(seed);
            mc_engine::generate_with(&words, config.width, config.height, &pool, &mut rng)
        }
        None => mc_engine::generate(&words, config.width, config.height, &pool),
    };

    for skipped in &puzzle.skipped {
        log::warn!("Mot écarté ({}) : {}", skipped.reason.name(), skipped.word);
    }

    // 7. Rendre la sortie
    let output = match config.format {
        OutputFormat::Text => mc_export::render_sheet(&puzzle, &config.title),
        OutputFormat::Json => {
            let doc = mc_export::PuzzleDocument::from_puzzle(&puzzle, &words, &config.title);
            let mut json = doc.to_json()?;
            json.push('\n');
            json
        }
    };

    // 8. Écrire la feuille
    match cli.out {
        Some(ref path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
            log::info!("Sortie écrite dans {}", path.display());
        }
        None => print!("{output}"),
    }

    Ok(())
}

/// Resolve config: preset takes priority over --config.
fn resolve_config(cli: &cli::Cli) -> Result<PuzzleConfig> {
    if let Some(ref name) = cli.preset {
        let path = PathBuf::from(format!("config/presets/{name}.toml"));
        if path.exists() {
            mc_core::config::load_config(&path)
        } else {
            anyhow::bail!("Preset inconnu : {name}. Voir config/presets/ (ex: francais, english)");
        }
    } else if cli.config.exists() {
        mc_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(PuzzleConfig::default())
    }
}

use log::debug;
use mc_core::grid::LetterGrid;
use mc_core::pool::LetterPool;
use mc_core::puzzle::{Puzzle, SkipReason, SkippedWord};
use rand::Rng;

use crate::filler::fill_blanks;
use crate::placement::place_word;

/// Génère une grille complète avec le générateur aléatoire ambiant.
///
/// Sortie non reproductible. Pour une grille rejouable, passer par
/// [`generate_with`] avec un générateur à graine fixe.
///
/// # Example
/// ```
/// use mc_core::pool::LetterPool;
/// use mc_engine::generator::generate;
///
/// let words = vec!["SOL".to_string(), "LUA".to_string()];
/// let pool = LetterPool::from_weights(&[('A', 1)]).unwrap();
/// let puzzle = generate(&words, 10, 10, &pool);
/// assert!(puzzle.grid.is_filled());
/// ```
#[must_use]
pub fn generate(words: &[String], width: u16, height: u16, pool: &LetterPool) -> Puzzle {
    generate_with(words, width, height, pool, &mut rand::rng())
}

/// Génère une grille complète avec le générateur fourni.
///
/// Pipeline linéaire : placement de chaque mot dans l'ordre d'entrée, puis
/// remplissage des cellules restées vides. Ne retourne jamais d'erreur :
/// les mots non plaçables sortent dans `skipped` avec leur raison.
///
/// Aucune validation de plage sur `width`/`height` ni de normalisation des
/// mots : ces préconditions appartiennent aux couches d'entrée.
///
/// # Example
/// ```
/// use mc_core::pool::LetterPool;
/// use mc_engine::generator::generate_with;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let words = vec!["SOL".to_string(), "LUA".to_string()];
/// let pool = LetterPool::from_weights(&[('A', 1)]).unwrap();
/// let mut rng = StdRng::seed_from_u64(1);
/// let puzzle = generate_with(&words, 10, 10, &pool, &mut rng);
/// assert_eq!(puzzle.placements.len(), 2);
/// assert!(puzzle.skipped.is_empty());
/// ```
#[must_use]
pub fn generate_with<R: Rng>(
    words: &[String],
    width: u16,
    height: u16,
    pool: &LetterPool,
    rng: &mut R,
) -> Puzzle {
    let mut grid = LetterGrid::new(width, height);
    let mut placements = Vec::with_capacity(words.len());
    let mut skipped = Vec::new();
    let max_side = usize::from(width.max(height));

    // 1. Placement : chaque mot dans l'ordre d'entrée.
    for word in words {
        let len = word.chars().count();
        if len == 0 {
            skipped.push(SkippedWord {
                word: word.clone(),
                reason: SkipReason::EmptyWord,
            });
            continue;
        }
        // Plus long que le plus grand côté : aucune orientation possible,
        // inutile de consommer le budget de tirages.
        if len > max_side {
            skipped.push(SkippedWord {
                word: word.clone(),
                reason: SkipReason::TooLong,
            });
            continue;
        }
        match place_word(&mut grid, word, rng) {
            Some(placement) => placements.push(placement),
            None => skipped.push(SkippedWord {
                word: word.clone(),
                reason: SkipReason::NoSpace,
            }),
        }
    }

    // 2. Remplissage : les cellules restées vides reçoivent une lettre du pool.
    fill_blanks(&mut grid, pool, rng);

    debug!(
        "Grille {width}x{height} : {} mot(s) placé(s), {} écarté(s)",
        placements.len(),
        skipped.len()
    );

    Puzzle {
        grid,
        placements,
        skipped,
    }
}

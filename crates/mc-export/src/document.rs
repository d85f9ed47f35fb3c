use anyhow::{Context, Result};
use mc_core::puzzle::Puzzle;
use serde::{Deserialize, Serialize};

/// Document machine-lisible d'une génération, prêt pour un pipeline
/// d'impression ou un surligneur de solution en aval.
///
/// Les placements y figurent en clair : c'est le canal prévu pour le
/// corrigé, la feuille texte n'en montre jamais.
///
/// # Example
/// ```
/// use mc_core::grid::LetterGrid;
/// use mc_core::puzzle::Puzzle;
/// use mc_export::document::PuzzleDocument;
///
/// let puzzle = Puzzle {
///     grid: LetterGrid::new(10, 10),
///     placements: vec![],
///     skipped: vec![],
/// };
/// let doc = PuzzleDocument::from_puzzle(&puzzle, &[], "Essai");
/// assert_eq!(doc.width, 10);
/// assert_eq!(doc.rows.len(), 10);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PuzzleDocument {
    /// Titre de la feuille.
    pub title: String,
    /// Largeur de la grille.
    pub width: u16,
    /// Hauteur de la grille.
    pub height: u16,
    /// Lignes de la grille, une chaîne par rangée.
    pub rows: Vec<String>,
    /// Mots demandés par l'appelant, avant placement.
    pub requested: Vec<String>,
    /// Mots effectivement écrits, avec leur position.
    pub placements: Vec<PlacementRecord>,
    /// Mots écartés, avec leur raison.
    pub skipped: Vec<SkippedRecord>,
}

/// Un placement sérialisé : départ + identifiant stable de direction.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PlacementRecord {
    pub word: String,
    pub x: u16,
    pub y: u16,
    /// "right", "down-left", ... (voir `Direction::name`).
    pub direction: String,
}

/// Un mot écarté sérialisé : identifiant stable de raison.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SkippedRecord {
    pub word: String,
    /// "too-long", "empty-word" ou "no-space".
    pub reason: String,
}

impl PuzzleDocument {
    /// Construit le document depuis le résultat du moteur et la liste des
    /// mots demandés.
    #[must_use]
    pub fn from_puzzle(puzzle: &Puzzle, requested: &[String], title: &str) -> Self {
        let rows: Vec<String> = puzzle.grid.rows().map(|row| row.iter().collect()).collect();
        let placements = puzzle
            .placements
            .iter()
            .map(|p| PlacementRecord {
                word: p.word.clone(),
                x: p.x,
                y: p.y,
                direction: p.direction.name().to_string(),
            })
            .collect();
        let skipped = puzzle
            .skipped
            .iter()
            .map(|s| SkippedRecord {
                word: s.word.clone(),
                reason: s.reason.name().to_string(),
            })
            .collect();

        Self {
            title: title.to_string(),
            width: puzzle.grid.width,
            height: puzzle.grid.height,
            rows,
            requested: requested.to_vec(),
            placements,
            skipped,
        }
    }

    /// Sérialise le document en JSON indenté.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Impossible de sérialiser le document JSON")
    }
}

#[cfg(test)]
mod tests {
    use mc_core::grid::LetterGrid;
    use mc_core::puzzle::{Direction, Placement, SkipReason, SkippedWord};

    use super::*;

    fn sample_puzzle() -> Puzzle {
        let mut grid = LetterGrid::new(3, 2);
        for (i, ch) in "SOLXYZ".chars().enumerate() {
            grid.set((i % 3) as u16, (i / 3) as u16, ch);
        }
        Puzzle {
            grid,
            placements: vec![Placement::new("SOL".to_string(), 0, 0, Direction::Right)],
            skipped: vec![SkippedWord {
                word: "TARTARUGA".to_string(),
                reason: SkipReason::TooLong,
            }],
        }
    }

    #[test]
    fn document_captures_grid_and_metadata() {
        let requested = vec!["SOL".to_string(), "TARTARUGA".to_string()];
        let doc = PuzzleDocument::from_puzzle(&sample_puzzle(), &requested, "Essai");

        assert_eq!(doc.width, 3);
        assert_eq!(doc.height, 2);
        assert_eq!(doc.rows, vec!["SOL", "XYZ"]);
        assert_eq!(doc.requested, requested);
        assert_eq!(doc.placements.len(), 1);
        assert_eq!(doc.placements[0].direction, "right");
        assert_eq!(doc.skipped.len(), 1);
        assert_eq!(doc.skipped[0].reason, "too-long");
    }

    #[test]
    fn document_survives_a_json_round_trip() {
        let requested = vec!["SOL".to_string()];
        let doc = PuzzleDocument::from_puzzle(&sample_puzzle(), &requested, "Essai");
        let json = doc.to_json().unwrap();

        let parsed: PuzzleDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.title, "Essai");
        assert_eq!(parsed.rows, doc.rows);
        assert_eq!(parsed.placements[0].word, "SOL");
        assert_eq!(parsed.skipped[0].word, "TARTARUGA");
    }
}

use log::debug;
use mc_core::puzzle::Puzzle;

/// Marge gauche des mots dans la banque.
const BANK_INDENT: &str = "  ";
/// Espacement minimal entre deux colonnes de la banque.
const BANK_GAP: usize = 4;

/// Rend la feuille imprimable : titre centré, grille, banque de mots.
///
/// La banque ne liste que les mots effectivement placés, jamais leur
/// position. Une feuille reste donc toujours résoluble même quand des mots
/// ont été écartés.
///
/// # Example
/// ```
/// use mc_core::grid::LetterGrid;
/// use mc_core::puzzle::Puzzle;
/// use mc_export::sheet::render_sheet;
///
/// let puzzle = Puzzle {
///     grid: LetterGrid::new(10, 10),
///     placements: vec![],
///     skipped: vec![],
/// };
/// let sheet = render_sheet(&puzzle, "Animaux");
/// assert!(sheet.starts_with("  "));
/// assert!(sheet.contains("Animaux"));
/// ```
#[must_use]
pub fn render_sheet(puzzle: &Puzzle, title: &str) -> String {
    let width = usize::from(puzzle.grid.width);
    let line_width = if width == 0 { 0 } else { width * 2 - 1 };
    let mut out = String::new();

    // Titre centré sur la largeur de la grille affichée.
    let title_len = title.chars().count();
    let pad = line_width.saturating_sub(title_len) / 2;
    for _ in 0..pad {
        out.push(' ');
    }
    out.push_str(title);
    out.push('\n');
    out.push('\n');

    // Grille, lettres séparées par une espace.
    for row in puzzle.grid.rows() {
        let mut first = true;
        for &ch in row {
            if !first {
                out.push(' ');
            }
            out.push(ch);
            first = false;
        }
        out.push('\n');
    }

    // Banque de mots, en colonnes sous la grille.
    let words: Vec<&str> = puzzle.placed_words().collect();
    debug!(
        "Feuille {}x{} : {} mot(s) dans la banque",
        puzzle.grid.width,
        puzzle.grid.height,
        words.len()
    );
    if !words.is_empty() {
        out.push('\n');
        out.push_str("Mots à trouver :\n\n");

        let longest = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
        let col_width = longest + BANK_GAP;
        let columns = (line_width / col_width.max(1)).max(1);

        for chunk in words.chunks(columns) {
            out.push_str(BANK_INDENT);
            for (i, word) in chunk.iter().enumerate() {
                out.push_str(word);
                if i + 1 < chunk.len() {
                    let padding = col_width - word.chars().count();
                    for _ in 0..padding {
                        out.push(' ');
                    }
                }
            }
            out.push('\n');
        }
    }

    out
}

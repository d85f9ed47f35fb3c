use mc_core::grid::LetterGrid;
use mc_core::puzzle::Direction;

/// Vérifie qu'un mot peut s'écrire depuis `(x, y)` dans `direction`.
///
/// Prédicat pur, aucune écriture. Un mot tient si chaque cellule visée est
/// dans la grille et soit vide, soit déjà occupée par la même lettre
/// (croisement autorisé).
///
/// # Example
/// ```
/// use mc_core::grid::LetterGrid;
/// use mc_core::puzzle::Direction;
/// use mc_engine::fit::fits;
///
/// let grid = LetterGrid::new(10, 10);
/// assert!(fits(&grid, "SOL", 0, 0, Direction::Right));
/// assert!(!fits(&grid, "SOL", 8, 0, Direction::Right)); // déborde à droite
/// ```
#[must_use]
pub fn fits(grid: &LetterGrid, word: &str, x: u16, y: u16, direction: Direction) -> bool {
    let (dx, dy) = direction.delta();
    let width = i32::from(grid.width);
    let height = i32::from(grid.height);

    for (i, letter) in word.chars().enumerate() {
        let step = i as i32;
        let cx = i32::from(x) + dx * step;
        let cy = i32::from(y) + dy * step;
        if cx < 0 || cx >= width || cy < 0 || cy >= height {
            return false;
        }
        let cell = grid.get(cx as u16, cy as u16);
        if cell != LetterGrid::EMPTY && cell != letter {
            return false;
        }
    }
    true
}

use log::debug;
use mc_core::grid::LetterGrid;
use mc_core::puzzle::{Direction, Placement};
use rand::Rng;

use crate::fit::fits;

/// Budget de tirages aléatoires par mot avant le balayage exhaustif.
pub const MAX_ATTEMPTS: u32 = 100;

/// Tente de placer un mot dans la grille.
///
/// D'abord jusqu'à [`MAX_ATTEMPTS`] candidats aléatoires (cellule de départ
/// uniforme, direction uniforme parmi les 8). Si le budget est épuisé, un
/// balayage exhaustif cellule × direction part d'un décalage aléatoire et
/// fait le tour complet de la grille. `None` signifie donc qu'aucun
/// emplacement n'existe dans l'état courant de la grille.
///
/// Écrit le mot dans la grille en cas de succès.
///
/// # Example
/// ```
/// use mc_core::grid::LetterGrid;
/// use mc_engine::placement::place_word;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut grid = LetterGrid::new(10, 10);
/// let mut rng = StdRng::seed_from_u64(1);
/// let placement = place_word(&mut grid, "SOL", &mut rng).unwrap();
/// assert_eq!(placement.word, "SOL");
/// ```
pub fn place_word<R: Rng>(grid: &mut LetterGrid, word: &str, rng: &mut R) -> Option<Placement> {
    if grid.width == 0 || grid.height == 0 {
        return None;
    }

    for attempt in 1..=MAX_ATTEMPTS {
        let x = rng.random_range(0..grid.width);
        let y = rng.random_range(0..grid.height);
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        if fits(grid, word, x, y, direction) {
            let placement = Placement::new(word.to_string(), x, y, direction);
            commit(grid, &placement);
            debug!(
                "Mot \"{word}\" placé en ({x}, {y}) {} après {attempt} tirage(s)",
                direction.name()
            );
            return Some(placement);
        }
    }

    debug!("Budget aléatoire épuisé pour \"{word}\", balayage exhaustif");
    sweep(grid, word, rng)
}

/// Balayage exhaustif : chaque cellule de départ × chaque direction, en
/// partant d'un décalage aléatoire pour ne pas tasser les mots en haut à
/// gauche. Directions dans l'ordre fixe de [`Direction::ALL`].
fn sweep<R: Rng>(grid: &mut LetterGrid, word: &str, rng: &mut R) -> Option<Placement> {
    let cell_count = grid.width as usize * grid.height as usize;
    let offset = rng.random_range(0..cell_count);

    for i in 0..cell_count {
        let index = (offset + i) % cell_count;
        let x = (index % grid.width as usize) as u16;
        let y = (index / grid.width as usize) as u16;
        for direction in Direction::ALL {
            if fits(grid, word, x, y, direction) {
                let placement = Placement::new(word.to_string(), x, y, direction);
                commit(grid, &placement);
                debug!(
                    "Mot \"{word}\" placé en ({x}, {y}) {} par balayage",
                    direction.name()
                );
                return Some(placement);
            }
        }
    }

    debug!("Aucun emplacement pour \"{word}\", mot écarté");
    None
}

/// Écrit les lettres du mot le long du placement validé.
fn commit(grid: &mut LetterGrid, placement: &Placement) {
    for ((cx, cy), letter) in placement.cells().zip(placement.word.chars()) {
        grid.set(cx, cy, letter);
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn read_back(grid: &LetterGrid, placement: &Placement) -> String {
        placement
            .cells()
            .map(|(x, y)| grid.get(x, y))
            .collect()
    }

    #[test]
    fn placed_word_is_readable_from_grid() {
        let mut grid = LetterGrid::new(10, 10);
        let mut rng = StdRng::seed_from_u64(42);
        let placement = place_word(&mut grid, "CORAÇÃO", &mut rng).unwrap();
        assert_eq!(read_back(&grid, &placement), "CORAÇÃO");
    }

    #[test]
    fn last_free_slot_is_found() {
        let mut grid = LetterGrid::new(10, 10);
        for y in 0..10 {
            for x in 0..10 {
                grid.set(x, y, 'Z');
            }
        }
        // Seules trois cellules libres, alignées en haut à gauche.
        grid.set(0, 0, LetterGrid::EMPTY);
        grid.set(1, 0, LetterGrid::EMPTY);
        grid.set(2, 0, LetterGrid::EMPTY);

        let mut rng = StdRng::seed_from_u64(7);
        let placement = place_word(&mut grid, "SOL", &mut rng).unwrap();
        assert_eq!(read_back(&grid, &placement), "SOL");
        assert!(grid.is_filled());
    }

    #[test]
    fn saturated_grid_rejects_without_writing() {
        let mut grid = LetterGrid::new(10, 10);
        for y in 0..10 {
            for x in 0..10 {
                grid.set(x, y, 'Z');
            }
        }
        let mut rng = StdRng::seed_from_u64(3);
        assert!(place_word(&mut grid, "SOL", &mut rng).is_none());
        assert!(grid.cells.iter().all(|&c| c == 'Z'));
    }

    #[test]
    fn degenerate_grid_rejects_without_panicking() {
        let mut grid = LetterGrid::new(0, 10);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(place_word(&mut grid, "SOL", &mut rng).is_none());
    }

    #[test]
    fn crossing_words_share_letters() {
        let mut grid = LetterGrid::new(10, 10);
        // LUA posé à la main, puis SOL forcé à croiser son L.
        grid.set(0, 0, 'L');
        grid.set(1, 0, 'U');
        grid.set(2, 0, 'A');
        let placement = Placement::new("SOL".to_string(), 0, 2, Direction::Up);
        assert!(fits(&grid, "SOL", 0, 2, Direction::Up));
        commit(&mut grid, &placement);
        assert_eq!(grid.get(0, 0), 'L');
        assert_eq!(grid.get(0, 1), 'O');
        assert_eq!(grid.get(0, 2), 'S');
        assert_eq!(grid.get(1, 0), 'U');
    }
}

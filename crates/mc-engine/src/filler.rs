use mc_core::grid::LetterGrid;
use mc_core::pool::LetterPool;
use rand::Rng;

/// Remplit chaque cellule restée vide avec une lettre tirée du pool.
///
/// Les lettres déjà posées ne sont jamais réécrites. Après ce passage la
/// grille ne contient plus aucune cellule vide.
///
/// # Example
/// ```
/// use mc_core::grid::LetterGrid;
/// use mc_core::pool::LetterPool;
/// use mc_engine::filler::fill_blanks;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut grid = LetterGrid::new(10, 10);
/// let pool = LetterPool::from_weights(&[('X', 1)]).unwrap();
/// let mut rng = StdRng::seed_from_u64(1);
/// fill_blanks(&mut grid, &pool, &mut rng);
/// assert!(grid.is_filled());
/// ```
pub fn fill_blanks<R: Rng>(grid: &mut LetterGrid, pool: &LetterPool, rng: &mut R) {
    for cell in &mut grid.cells {
        if *cell == LetterGrid::EMPTY {
            *cell = pool.pick(rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn fill_covers_every_empty_cell() {
        let mut grid = LetterGrid::new(12, 15);
        let pool = LetterPool::from_weights(&[('X', 1)]).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        fill_blanks(&mut grid, &pool, &mut rng);
        assert!(grid.is_filled());
        assert!(grid.cells.iter().all(|&c| c == 'X'));
    }

    #[test]
    fn fill_preserves_placed_letters() {
        let mut grid = LetterGrid::new(10, 10);
        grid.set(3, 4, 'Q');
        grid.set(4, 4, 'Q');
        let pool = LetterPool::from_weights(&[('X', 1)]).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        fill_blanks(&mut grid, &pool, &mut rng);
        assert_eq!(grid.get(3, 4), 'Q');
        assert_eq!(grid.get(4, 4), 'Q');
        let q_count = grid.cells.iter().filter(|&&c| c == 'Q').count();
        assert_eq!(q_count, 2);
        assert!(grid.is_filled());
    }
}

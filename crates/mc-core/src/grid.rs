/// Grille de lettres du puzzle. Créée vierge, possédée exclusivement par
/// l'appel de génération qui la remplit.
///
/// Stocke les cellules en row-major, une `char` par cellule. `x` est la
/// colonne (vers la droite), `y` la ligne (vers le bas).
///
/// # Example
/// ```
/// use mc_core::grid::LetterGrid;
/// let grid = LetterGrid::new(10, 8);
/// assert_eq!(grid.cells.len(), 80);
/// assert_eq!(grid.get(0, 0), LetterGrid::EMPTY);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterGrid {
    /// Flat array of cells, row-major.
    pub cells: Vec<char>,
    /// Width in letters.
    pub width: u16,
    /// Height in letters.
    pub height: u16,
}

impl LetterGrid {
    /// Sentinelle « cellule libre ». Les mots étant normalisés sans espace,
    /// aucune lettre placée ne peut la valoir.
    pub const EMPTY: char = ' ';

    /// Crée une grille entièrement libre aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use mc_core::grid::LetterGrid;
    /// let grid = LetterGrid::new(15, 12);
    /// assert_eq!(grid.width, 15);
    /// assert_eq!(grid.height, 12);
    /// assert!(!grid.is_filled());
    /// ```
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            cells: vec![Self::EMPTY; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Écrit une lettre dans la cellule (x, y).
    ///
    /// # Example
    /// ```
    /// use mc_core::grid::LetterGrid;
    /// let mut grid = LetterGrid::new(10, 10);
    /// grid.set(3, 2, 'A');
    /// assert_eq!(grid.get(3, 2), 'A');
    /// ```
    #[inline(always)]
    pub fn set(&mut self, x: u16, y: u16, ch: char) {
        self.cells[y as usize * self.width as usize + x as usize] = ch;
    }

    /// Lit la lettre en (x, y).
    ///
    /// # Example
    /// ```
    /// use mc_core::grid::LetterGrid;
    /// let grid = LetterGrid::new(10, 10);
    /// assert_eq!(grid.get(9, 9), LetterGrid::EMPTY);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> char {
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// `true` si plus aucune cellule n'est libre.
    ///
    /// Invariant post-génération : le Filler garantit ce résultat.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|&c| c != Self::EMPTY)
    }

    /// Itère les lignes de la grille, du haut vers le bas.
    ///
    /// # Example
    /// ```
    /// use mc_core::grid::LetterGrid;
    /// let grid = LetterGrid::new(4, 3);
    /// assert_eq!(grid.rows().count(), 3);
    /// assert!(grid.rows().all(|row| row.len() == 4));
    /// ```
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks_exact(usize::from(self.width.max(1)))
    }
}

use crate::grid::LetterGrid;

/// Direction d'insertion d'un mot : les 8 vecteurs unitaires de la grille
/// (4 axes + 4 diagonales).
///
/// `x` croît vers la droite, `y` vers le bas.
///
/// # Example
/// ```
/// use mc_core::puzzle::Direction;
/// assert_eq!(Direction::ALL.len(), 8);
/// assert_eq!(Direction::DownRight.delta(), (1, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Left → right.
    Right,
    /// Right → left.
    Left,
    /// Top → bottom.
    Down,
    /// Bottom → top.
    Up,
    /// Diagonal ↘.
    DownRight,
    /// Diagonal ↙.
    DownLeft,
    /// Diagonal ↗.
    UpRight,
    /// Diagonal ↖.
    UpLeft,
}

impl Direction {
    /// Les 8 directions, dans l'ordre du tirage aléatoire et du balayage
    /// exhaustif.
    pub const ALL: [Self; 8] = [
        Self::Right,
        Self::Left,
        Self::Down,
        Self::Up,
        Self::DownRight,
        Self::DownLeft,
        Self::UpRight,
        Self::UpLeft,
    ];

    /// Pas (dx, dy) appliqué entre deux lettres consécutives.
    #[inline]
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Right => (1, 0),
            Self::Left => (-1, 0),
            Self::Down => (0, 1),
            Self::Up => (0, -1),
            Self::DownRight => (1, 1),
            Self::DownLeft => (-1, 1),
            Self::UpRight => (1, -1),
            Self::UpLeft => (-1, -1),
        }
    }

    /// Identifiant stable, utilisé par les logs et l'export JSON.
    ///
    /// # Example
    /// ```
    /// use mc_core::puzzle::Direction;
    /// assert_eq!(Direction::UpLeft.name(), "up-left");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
            Self::Down => "down",
            Self::Up => "up",
            Self::DownRight => "down-right",
            Self::DownLeft => "down-left",
            Self::UpRight => "up-right",
            Self::UpLeft => "up-left",
        }
    }
}

/// Emplacement effectif d'un mot écrit dans la grille : cellule de départ
/// de la première lettre + direction de lecture.
///
/// # Example
/// ```
/// use mc_core::puzzle::{Direction, Placement};
/// let p = Placement::new("SOL".to_string(), 2, 3, Direction::DownRight);
/// let cells: Vec<(u16, u16)> = p.cells().collect();
/// assert_eq!(cells, vec![(2, 3), (3, 4), (4, 5)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Le mot placé, tel qu'écrit dans la grille.
    pub word: String,
    /// Colonne de la première lettre.
    pub x: u16,
    /// Ligne de la première lettre.
    pub y: u16,
    /// Direction de lecture.
    pub direction: Direction,
}

impl Placement {
    /// Crée un placement.
    #[must_use]
    pub fn new(word: String, x: u16, y: u16, direction: Direction) -> Self {
        Self {
            word,
            x,
            y,
            direction,
        }
    }

    /// Cellules couvertes par le mot, dans l'ordre de ses lettres.
    ///
    /// Le moteur ne construit que des placements entièrement dans la grille :
    /// les coordonnées retournées sont donc toujours valides.
    pub fn cells(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        let (dx, dy) = self.direction.delta();
        let len = self.word.chars().count();
        (0..len).map(move |i| {
            let cx = i32::from(self.x) + dx * i as i32;
            let cy = i32::from(self.y) + dy * i as i32;
            (cx as u16, cy as u16)
        })
    }
}

/// Raison d'abandon d'un mot non placé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Plus long que `max(width, height)` : aucune orientation possible,
    /// indépendamment du budget de tentatives.
    TooLong,
    /// Mot vide, rien à écrire.
    EmptyWord,
    /// Aucun emplacement libre dans l'état courant de la grille (constaté
    /// par balayage exhaustif, pas seulement par malchance).
    NoSpace,
}

impl SkipReason {
    /// Identifiant stable, utilisé par les logs et l'export JSON.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TooLong => "too-long",
            Self::EmptyWord => "empty-word",
            Self::NoSpace => "no-space",
        }
    }
}

/// Un mot demandé mais non placé, avec sa raison.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedWord {
    /// Le mot tel que reçu par le moteur.
    pub word: String,
    /// Pourquoi il a été abandonné.
    pub reason: SkipReason,
}

/// Résultat complet d'une génération : grille pleine + métadonnées.
///
/// `placements` et `skipped` partitionnent les mots d'entrée en conservant
/// leur ordre.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    /// La grille, sans cellule vide après le remplissage.
    pub grid: LetterGrid,
    /// Mots effectivement écrits dans la grille.
    pub placements: Vec<Placement>,
    /// Mots abandonnés.
    pub skipped: Vec<SkippedWord>,
}

impl Puzzle {
    /// Mots placés, dans l'ordre d'entrée.
    pub fn placed_words(&self) -> impl Iterator<Item = &str> + '_ {
        self.placements.iter().map(|p| p.word.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_are_distinct_unit_vectors() {
        for (i, a) in Direction::ALL.iter().enumerate() {
            let (dx, dy) = a.delta();
            assert!(dx.abs() <= 1 && dy.abs() <= 1);
            assert!((dx, dy) != (0, 0), "direction nulle : {a:?}");
            for b in &Direction::ALL[i + 1..] {
                assert_ne!(a.delta(), b.delta(), "delta dupliqué : {a:?} / {b:?}");
            }
        }
    }

    #[test]
    fn placement_cells_walk_each_direction() {
        for dir in Direction::ALL {
            let p = Placement::new("AB".to_string(), 5, 5, dir);
            let cells: Vec<(u16, u16)> = p.cells().collect();
            let (dx, dy) = dir.delta();
            assert_eq!(cells[0], (5, 5));
            assert_eq!(
                cells[1],
                ((5 + dx) as u16, (5 + dy) as u16),
                "mauvais pas pour {dir:?}"
            );
        }
    }

    #[test]
    fn placement_cells_count_uses_chars_not_bytes() {
        // « CAFÉ » fait 5 octets mais 4 lettres.
        let p = Placement::new("CAFÉ".to_string(), 0, 0, Direction::Right);
        assert_eq!(p.cells().count(), 4);
    }
}

use rand::Rng;

use crate::error::CoreError;

/// Fréquences portugaises — preset par défaut, accents inclus.
pub const POOL_PORTUGUES: &[(char, u32)] = &[
    ('A', 14),
    ('E', 12),
    ('O', 11),
    ('S', 8),
    ('R', 7),
    ('I', 6),
    ('N', 5),
    ('D', 5),
    ('M', 5),
    ('U', 5),
    ('T', 4),
    ('C', 4),
    ('L', 3),
    ('P', 3),
    ('V', 2),
    ('G', 1),
    ('H', 1),
    ('Q', 1),
    ('B', 1),
    ('F', 1),
    ('Z', 1),
    ('J', 1),
    ('X', 1),
    ('Á', 1),
    ('Â', 1),
    ('Ã', 1),
    ('É', 1),
    ('Ê', 1),
    ('Í', 1),
    ('Ó', 1),
    ('Ô', 1),
    ('Õ', 1),
    ('Ú', 1),
    ('Ç', 1),
];

/// Fréquences françaises, accents usuels inclus.
pub const POOL_FRANCAIS: &[(char, u32)] = &[
    ('E', 15),
    ('A', 8),
    ('S', 8),
    ('I', 8),
    ('T', 7),
    ('N', 7),
    ('R', 7),
    ('U', 6),
    ('L', 5),
    ('O', 5),
    ('D', 4),
    ('C', 3),
    ('M', 3),
    ('P', 3),
    ('V', 2),
    ('É', 2),
    ('Q', 1),
    ('F', 1),
    ('B', 1),
    ('G', 1),
    ('H', 1),
    ('J', 1),
    ('X', 1),
    ('Y', 1),
    ('Z', 1),
    ('È', 1),
    ('Ê', 1),
    ('À', 1),
    ('Â', 1),
    ('Î', 1),
    ('Ô', 1),
    ('Û', 1),
    ('Ç', 1),
];

/// Fréquences anglaises — 26 lettres, sans accent.
pub const POOL_ENGLISH: &[(char, u32)] = &[
    ('E', 12),
    ('T', 9),
    ('A', 8),
    ('O', 8),
    ('I', 7),
    ('N', 7),
    ('S', 6),
    ('H', 6),
    ('R', 6),
    ('D', 4),
    ('L', 4),
    ('C', 3),
    ('U', 3),
    ('M', 2),
    ('W', 2),
    ('F', 2),
    ('G', 2),
    ('Y', 2),
    ('P', 2),
    ('B', 1),
    ('V', 1),
    ('K', 1),
    ('J', 1),
    ('X', 1),
    ('Q', 1),
    ('Z', 1),
];

/// Presets nommés, sélectionnables depuis la configuration.
pub const POOL_PRESETS: &[(&str, &[(char, u32)])] = &[
    ("portugues", POOL_PORTUGUES),
    ("francais", POOL_FRANCAIS),
    ("english", POOL_ENGLISH),
];

/// Table de poids d'un preset nommé, ou `None` s'il n'existe pas.
///
/// # Example
/// ```
/// use mc_core::pool::preset;
/// assert!(preset("portugues").is_some());
/// assert!(preset("klingon").is_none());
/// ```
#[must_use]
pub fn preset(name: &str) -> Option<&'static [(char, u32)]> {
    POOL_PRESETS
        .iter()
        .find(|(preset_name, _)| *preset_name == name)
        .map(|(_, table)| *table)
}

/// Source pondérée de lettres de remplissage.
///
/// Construit une fois à partir d'une table (lettre, poids) : chaque lettre
/// est répétée `poids` fois dans le pool plat, puis le Filler tire un index
/// uniforme. Les lettres fréquentes sortent proportionnellement plus
/// souvent.
///
/// # Example
/// ```
/// use mc_core::pool::{LetterPool, POOL_PORTUGUES};
/// let pool = LetterPool::from_weights(POOL_PORTUGUES).unwrap();
/// let total: usize = POOL_PORTUGUES.iter().map(|&(_, w)| w as usize).sum();
/// assert_eq!(pool.len(), total);
/// ```
#[derive(Clone, Debug)]
pub struct LetterPool {
    letters: Vec<char>,
}

impl LetterPool {
    /// Déplie la table de poids en pool plat.
    ///
    /// Les entrées de poids nul sont ignorées.
    ///
    /// # Errors
    /// Retourne [`CoreError::EmptyPool`] si la table est vide ou si tous les
    /// poids sont nuls.
    ///
    /// # Example
    /// ```
    /// use mc_core::pool::LetterPool;
    /// let pool = LetterPool::from_weights(&[('A', 3), ('B', 1)]).unwrap();
    /// assert_eq!(pool.len(), 4);
    /// assert!(LetterPool::from_weights(&[]).is_err());
    /// ```
    pub fn from_weights(table: &[(char, u32)]) -> Result<Self, CoreError> {
        let total: usize = table.iter().map(|&(_, weight)| weight as usize).sum();
        if total == 0 {
            return Err(CoreError::EmptyPool);
        }

        let mut letters = Vec::with_capacity(total);
        for &(letter, weight) in table {
            for _ in 0..weight {
                letters.push(letter);
            }
        }
        Ok(Self { letters })
    }

    /// Tire une lettre : index uniforme sur le pool déplié.
    ///
    /// # Example
    /// ```
    /// use mc_core::pool::LetterPool;
    /// use rand::SeedableRng;
    /// let pool = LetterPool::from_weights(&[('X', 3)]).unwrap();
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    /// assert_eq!(pool.pick(&mut rng), 'X');
    /// ```
    #[inline]
    pub fn pick<R: Rng>(&self, rng: &mut R) -> char {
        self.letters[rng.random_range(0..self.letters.len())]
    }

    /// Taille du pool déplié (somme des poids).
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Toujours `false` : la construction rejette les tables sans poids.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

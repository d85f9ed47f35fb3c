use log::debug;

use crate::error::WordsError;

/// Séparateurs tolérés dans une entrée brute, retirés au nettoyage.
const SEPARATORS: &[char] = &['-', '\'', '’', '.'];

/// Nettoie une entrée brute en mot normalisé.
///
/// Retire les blancs et les séparateurs ([`SEPARATORS`]), passe en
/// majuscules Unicode. `Ok(None)` si l'entrée ne contient aucune lettre
/// (ligne vide, tiret seul).
///
/// # Errors
/// Retourne [`WordsError::InvalidWord`] si un caractère non alphabétique
/// subsiste après nettoyage (chiffre, symbole).
///
/// # Example
/// ```
/// use mc_words::clean::clean_word;
/// assert_eq!(clean_word("  coração ").unwrap(), Some("CORAÇÃO".to_string()));
/// assert_eq!(clean_word("guarda-chuva").unwrap(), Some("GUARDACHUVA".to_string()));
/// assert_eq!(clean_word("   ").unwrap(), None);
/// assert!(clean_word("R2D2").is_err());
/// ```
pub fn clean_word(raw: &str) -> Result<Option<String>, WordsError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && !SEPARATORS.contains(c))
        .flat_map(char::to_uppercase)
        .collect();

    if cleaned.is_empty() {
        return Ok(None);
    }
    if let Some(character) = cleaned.chars().find(|c| !c.is_alphabetic()) {
        return Err(WordsError::InvalidWord {
            word: raw.trim().to_string(),
            character,
        });
    }
    Ok(Some(cleaned))
}

/// Nettoie une liste d'entrées brutes : normalisation, entrées vides
/// ignorées, doublons retirés en conservant l'ordre de première apparition.
///
/// # Errors
/// Retourne la première [`WordsError::InvalidWord`] rencontrée.
///
/// # Example
/// ```
/// use mc_words::clean::prepare;
/// let raw = ["sol".to_string(), "SOL".to_string(), "lua".to_string()];
/// assert_eq!(prepare(&raw).unwrap(), vec!["SOL", "LUA"]);
/// ```
pub fn prepare(entries: &[String]) -> Result<Vec<String>, WordsError> {
    let mut words: Vec<String> = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(word) = clean_word(entry)? else {
            continue;
        };
        if words.contains(&word) {
            debug!("Doublon ignoré : {word}");
            continue;
        }
        words.push(word);
    }
    Ok(words)
}

/// Vérifie que chaque mot tient dans au moins une orientation de la grille.
///
/// La limite est `max(width, height)`, la plus longue ligne droite
/// disponible (diagonales comprises).
///
/// # Errors
/// Retourne [`WordsError::TooLong`] pour le premier mot hors limite.
///
/// # Example
/// ```
/// use mc_words::clean::check_lengths;
/// let words = vec!["TARTARUGA".to_string()];
/// assert!(check_lengths(&words, 10, 10).is_ok());
/// assert!(check_lengths(&words, 10, 8).is_ok()); // 9 ≤ max(10, 8)
/// assert!(check_lengths(&words, 8, 8).is_err());
/// ```
pub fn check_lengths(words: &[String], width: u16, height: u16) -> Result<(), WordsError> {
    let limit = usize::from(width.max(height));
    for word in words {
        let len = word.chars().count();
        if len > limit {
            return Err(WordsError::TooLong {
                word: word.clone(),
                len,
                limit,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn clean_word_uppercases_accents() {
        assert_eq!(clean_word("coração").unwrap(), Some("CORAÇÃO".to_string()));
        assert_eq!(clean_word("été").unwrap(), Some("ÉTÉ".to_string()));
    }

    #[test]
    fn clean_word_strips_separators() {
        assert_eq!(
            clean_word("guarda - chuva").unwrap(),
            Some("GUARDACHUVA".to_string())
        );
        assert_eq!(clean_word("d'eau").unwrap(), Some("DEAU".to_string()));
        assert_eq!(clean_word("l’été").unwrap(), Some("LÉTÉ".to_string()));
    }

    #[test]
    fn clean_word_rejects_residual_symbols() {
        assert!(matches!(
            clean_word("R2D2"),
            Err(WordsError::InvalidWord { character: '2', .. })
        ));
        assert!(matches!(
            clean_word("sol!"),
            Err(WordsError::InvalidWord { character: '!', .. })
        ));
    }

    #[test]
    fn prepare_dedupes_in_first_seen_order() {
        let entries = raw(&["sol", "SOL", "Sol", "lua", "", "sol"]);
        assert_eq!(prepare(&entries).unwrap(), vec!["SOL", "LUA"]);
    }

    #[test]
    fn check_lengths_uses_longest_side() {
        let words = raw(&["ABCDEFGHIJKL"]); // 12 lettres
        assert!(check_lengths(&words, 12, 10).is_ok());
        assert!(check_lengths(&words, 10, 12).is_ok());
        let err = check_lengths(&words, 10, 11);
        assert!(matches!(
            err,
            Err(WordsError::TooLong {
                len: 12,
                limit: 11,
                ..
            })
        ));
    }

    #[test]
    fn check_lengths_counts_chars_not_bytes() {
        // 10 lettres, 13 octets : doit passer sur une grille de côté 10.
        let words = raw(&["CORAÇÕEZÃO"]);
        assert!(check_lengths(&words, 10, 10).is_ok());
    }
}

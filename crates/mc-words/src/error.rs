use thiserror::Error;

/// Errors originating from word-list preparation.
#[derive(Error, Debug)]
pub enum WordsError {
    #[error("Entrée invalide : \"{word}\" contient le caractère '{character}'")]
    InvalidWord { word: String, character: char },

    #[error(
        "Mot trop long : \"{word}\" fait {len} lettres, maximum {limit} pour cette grille"
    )]
    TooLong {
        word: String,
        len: usize,
        limit: usize,
    },
}

/// Word-list preparation for mots cachés (cleaning, dedup, length checks).

pub mod clean;
pub mod error;
pub mod list;

pub use clean::{check_lengths, clean_word, prepare};
pub use error::WordsError;
pub use list::load_words;

use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Letter pool table with no sampling mass.
    #[error("Pool de lettres vide : aucun poids positif dans la table")]
    EmptyPool,

    /// Referenced pool preset does not exist.
    #[error("Preset de pool inconnu : {name}")]
    UnknownPreset {
        /// Name that was not found.
        name: String,
    },
}

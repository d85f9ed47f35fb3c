/// Moteur de génération de grilles de mots cachés.
///
/// Placement des mots le long des 8 directions, validation des croisements,
/// remplissage pondéré des cellules restantes.

pub mod filler;
pub mod fit;
pub mod generator;
pub mod placement;

pub use generator::{generate, generate_with};

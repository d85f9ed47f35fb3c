/// Export de grilles générées : feuille texte imprimable et document JSON.

pub mod document;
pub mod sheet;

pub use document::PuzzleDocument;
pub use sheet::render_sheet;

/// Configuration, types, and shared structures for mots cachés.
///
/// This crate contains all shared types, presets, and configuration logic
/// used across the motscaches workspace.

pub mod config;
pub mod error;
pub mod grid;
pub mod pool;
pub mod puzzle;

pub use config::{OutputFormat, PoolWeight, PuzzleConfig};
pub use error::CoreError;
pub use grid::LetterGrid;
pub use pool::LetterPool;
pub use puzzle::{Direction, Placement, Puzzle, SkipReason, SkippedWord};

//! Error types for the checkers engine
//!
//! Move generation, application and search never fail: an impossible request
//! yields an empty move list or `None`. Errors only arise when text or
//! configuration is turned into engine values.

use thiserror::Error;

/// Errors raised while parsing or building engine values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Variant name not among american, casual, brazilian, suicide
    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    /// Difficulty name not among easy, medium, hard
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// Board diagram could not be read
    #[error("Invalid board diagram: {reason}")]
    InvalidDiagram { reason: String },

    /// Pieces may only stand on dark squares
    #[error("Piece placed on light square ({row}, {col})")]
    PieceOnLightSquare { row: u8, col: u8 },

    /// Square outside the 8x8 board
    #[error("Invalid position ({row}, {col}) (must be 0-7)")]
    InvalidPosition { row: u8, col: u8 },
}

/// Result type alias for engine parsing operations
pub type EngineResult<T> = Result<T, EngineError>;

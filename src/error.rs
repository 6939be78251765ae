//! Rich diagnostic error types for digit-mirror.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text so callers know exactly which contract
//! was violated and how to fix it.

use miette::Diagnostic;
use thiserror::Error;

use crate::config::ConfigError;
use crate::input::InputError;

/// Top-level error type for digit-mirror.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum MirrorError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {source}")]
    #[diagnostic(
        code(mirror::io),
        help("Reading input or writing output failed. Check that the terminal or pipe is still open.")
    )]
    Io {
        #[from]
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Grid errors
// ---------------------------------------------------------------------------

/// Broad classification of a [`GridError`].
///
/// Both kinds are contract violations by the caller; neither is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value or sequence handed to an operation is not acceptable.
    InvalidArgument,
    /// A cell coordinate lies outside the grid.
    IndexOutOfRange,
}

#[derive(Debug, Error, Diagnostic)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    #[diagnostic(
        code(mirror::grid::out_of_range),
        help("Rows must lie in 0..{rows} and columns in 0..{cols}.")
    )]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("a {rows}x{cols} grid cannot back an entity")]
    #[diagnostic(
        code(mirror::grid::empty),
        help("Entities need at least one row and one column.")
    )]
    EmptyGrid { rows: usize, cols: usize },

    #[error("{operation} needs at least one entity")]
    #[diagnostic(
        code(mirror::grid::empty_sequence),
        help("Pass a non-empty sequence.")
    )]
    EmptySequence { operation: &'static str },

    #[error("digit value {value} is outside 0..=9")]
    #[diagnostic(
        code(mirror::glyph::digit_range),
        help("Only single decimal digits have glyphs.")
    )]
    DigitOutOfRange { value: u8 },

    #[error("row {index} has {actual} cells, expected {expected}")]
    #[diagnostic(
        code(mirror::grid::ragged),
        help("Every row of a grid must have the same width.")
    )]
    RaggedRows {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("character {found:?} at ({row}, {col}) is not a grid symbol")]
    #[diagnostic(
        code(mirror::grid::bad_symbol),
        help("Grids are drawn with '|', '-' and ' ' only.")
    )]
    UnknownSymbol { found: char, row: usize, col: usize },
}

impl GridError {
    /// Classify this error into the two-kind taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GridError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            GridError::EmptyGrid { .. }
            | GridError::EmptySequence { .. }
            | GridError::DigitOutOfRange { .. }
            | GridError::RaggedRows { .. }
            | GridError::UnknownSymbol { .. } => ErrorKind::InvalidArgument,
        }
    }
}

/// Result type for grid, glyph and transformation operations.
pub type GridResult<T> = std::result::Result<T, GridError>;

/// Convenience alias for functions returning digit-mirror results.
pub type MirrorResult<T> = std::result::Result<T, MirrorError>;

//! This module contains the error and result definitions used in this crate.

use thiserror::Error;

/// The closed set of failure reasons reported by this crate. Every variant is
/// non-fatal and locally recoverable; no operation panics on bad input. The
/// `Display` form of each variant is the exact message intended for the user
/// and may be returned to them verbatim.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum SudokuError {

    /// Indicates that a puzzle encoding contains a character other than a
    /// digit `'1'` to `'9'` or the blank marker `'.'`.
    #[error("Invalid characters in puzzle")]
    InvalidCharacters,

    /// Indicates that a puzzle encoding is not exactly 81 characters long.
    #[error("Expected puzzle to be 81 characters long")]
    InvalidLength,

    /// Indicates that two pre-filled cells of a puzzle contradict each other
    /// under the row, column, or region rule. This is detected during
    /// validation, before any search is attempted.
    #[error("Puzzle cannot be solved")]
    ConflictingGivens,

    /// Indicates that a structurally valid puzzle admits no complete
    /// assignment, i.e. exhaustive search ran out of candidates.
    #[error("Puzzle cannot be solved")]
    NoSolution,

    /// Indicates that a coordinate does not name a cell of the grid, either
    /// because a coordinate string fails the letter-plus-digit pattern or
    /// because a numeric column or row lies outside the grid.
    #[error("Invalid coordinate")]
    InvalidCoordinate,

    /// Indicates that a candidate value is not a digit between 1 and 9.
    #[error("Invalid value")]
    InvalidValue,

    /// Indicates that a required input (puzzle, coordinate, or value) was
    /// absent. This is raised by callers which unbundle request fields
    /// before invoking the engine; the engine itself never produces it,
    /// since its inputs are already typed.
    #[error("Required field(s) missing")]
    MissingField
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

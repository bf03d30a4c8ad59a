//! Error types shared by the board model, the text parsers and the solver.

use thiserror::Error;

/// Violations of the board model's invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A tile identity outside `0..9` was used for a lookup.
    #[error("invalid tile identity {0}, expected a value in 0..9")]
    InvalidTileIdentity(usize),

    #[error("tile identity {0} is placed more than once")]
    DuplicateTile(usize),

    #[error("coordinate ({row}, {col}) is outside the 3x3 grid")]
    OutOfBounds { row: i8, col: i8 },

    #[error("coordinate ({row}, {col}) is assigned to more than one tile")]
    DuplicateCoordinate { row: i8, col: i8 },

    /// A replayed path did not begin at the blank's current coordinate.
    #[error("path starts at ({row}, {col}) but the blank is elsewhere")]
    PathStartMismatch { row: i8, col: i8 },

    #[error("the blank cannot slide to ({row}, {col})")]
    IllegalMove { row: i8, col: i8 },
}

/// Failures while reading a configuration from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid number of rows. Expected {expected}, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} characters (expected {expected})")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unrecognized character '{ch}' at row {row} col {col}")]
    UnrecognizedCharacter { ch: char, row: usize, col: usize },

    #[error("tile '{0}' appears more than once")]
    DuplicateTile(char),
}

/// Ways a search can end without a solution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The frontier ran dry, or the start was rejected as unsolvable.
    #[error("no solution exists from the given start configuration")]
    NoSolutionFound,

    #[error("search cancelled after {expanded} expansions")]
    Cancelled { expanded: usize },

    #[error("expansion limit of {limit} reached before the goal")]
    ExpansionLimit { limit: usize },
}

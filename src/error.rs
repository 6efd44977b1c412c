use std::num::ParseIntError;
use thiserror::Error;

/// Why a grid cannot be turned into a [`Board`](crate::Board).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board has no rows")]
    Empty,

    #[error("row {row} has {len} tiles, expected {dimension}")]
    NotSquare {
        row: usize,
        len: usize,
        dimension: usize,
    },

    #[error("a {dimension}x{dimension} board needs {expected} tiles, found {found}")]
    TileCount {
        dimension: usize,
        expected: usize,
        found: usize,
    },

    #[error("board dimension {0} is too large")]
    DimensionTooLarge(usize),

    #[error(
        "tile {value} at row {row}, column {col} is out of range for a {dimension}x{dimension} board"
    )]
    TileOutOfRange {
        value: u32,
        row: usize,
        col: usize,
        dimension: usize,
    },

    #[error("tile {value} appears more than once")]
    DuplicateTile { value: u32 },
}

/// Errors reading the textual board format.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("input is empty, expected the board dimension")]
    MissingDimension,

    #[error("invalid token `{token}`")]
    InvalidToken {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("expected {expected} tiles, found {found}")]
    MissingTiles { expected: usize, found: usize },

    #[error("unexpected token `{token}` after the last tile")]
    TrailingToken { token: String },

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Reasons a solve stopped before reaching a verdict.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("round budget exhausted after {rounds} rounds")]
    BudgetExhausted { rounds: u64 },

    #[error("search cancelled after {rounds} rounds")]
    Cancelled { rounds: u64 },

    #[error("frontier emptied before any goal was reached")]
    FrontierExhausted,
}

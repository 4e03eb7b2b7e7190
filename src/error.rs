use thiserror::Error;

/// Reasons a grid cannot be turned into a puzzle state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("grid is empty")]
    Empty,
    #[error("row {row} has {len} cells, expected {side}")]
    NotSquare { row: usize, len: usize, side: usize },
    #[error("board side {side} is outside the supported range 2..=16")]
    UnsupportedSize { side: usize },
    #[error("tile {value} is outside 0..={max}")]
    TileOutOfRange { value: u32, max: usize },
    #[error("tile {value} appears more than once")]
    DuplicateTile { value: u32 },
    #[error("start is {start}x{start} but goal is {goal}x{goal}")]
    SizeMismatch { start: usize, goal: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("invalid puzzle: {0}")]
    InvalidPuzzle(#[from] PuzzleError),
    #[error("goal is unreachable from start")]
    Unsolvable,
    #[error("search budget exhausted after {expanded} expansions")]
    ResourceExhausted { expanded: usize },
    #[error("search cancelled after {expanded} expansions")]
    Cancelled { expanded: usize },
}

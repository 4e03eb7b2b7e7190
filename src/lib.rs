//! Optimal sliding-tile puzzle solver.
//!
//! Boards are n×n permutations of `0..n²-1` with `0` as the blank. The
//! solver runs A* with the Manhattan distance heuristic and returns a
//! shortest sequence of slides from a start board to a goal board.

pub mod algorithm;
pub mod common;
pub mod config;
pub mod error;
pub mod heuristic;
pub mod report;
pub mod scenario;
pub mod solver;
pub mod stat;

pub use common::{Direction, State};
pub use error::{PuzzleError, SolveError};
pub use solver::{solve, solve_with_observer, CancelToken, SearchObserver, Solution, SolveOptions};

//! # 8-Puzzle Solver Library
//!
//! This library provides the board model for the 3x3 sliding-tile puzzle and an A*
//! solver that finds minimum-move solutions.
//!
//! It is used by two binaries:
//! - `ai_solver`: Takes a board file (or a seed for a random start), solves it and
//!   prints the blank's path together with each intermediate board.
//! - `heuristic_evaluator`: Solves a batch of seeded random boards with every heuristic
//!   and compares path lengths and search effort.
//!
//! ## Modules
//! - `engine`: Coordinates, configurations, the move generator and the `Puzzle` session
//!   (slides, undo, shuffling, replay).
//! - `heuristics`: Distance estimates used to order the search frontier.
//! - `solver`: The A* search (`Search`) and the `solve` entry points.
//! - `utils`: Parsing configurations from text and converting paths to directions.
//! - `error`: Error types for the modules above.
//!
//! ## Example
//! ```
//! use eight_puzzle::engine::Puzzle;
//! use eight_puzzle::solver::solve;
//!
//! let mut puzzle = Puzzle::new();
//! puzzle.shuffle(2024);
//! let solution = solve(puzzle.configuration()).unwrap();
//! puzzle.replay(&solution.path).unwrap();
//! assert!(puzzle.is_solved());
//! ```

pub mod engine;
pub mod error;
pub mod heuristics;
pub mod solver;
pub mod utils;

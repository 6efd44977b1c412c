//! # Slider Solver
//!
//! Finds a minimum-move solution for an n×n sliding-tile puzzle, or proves
//! that none exists.
//!
//! Solvability is decided with the twin trick: swapping two adjacent tiles of
//! a blank-free row turns any board into its twin, and exactly one of the two
//! can reach the goal. The solver searches both at once, one expansion each
//! per round, and whichever reaches the goal first gives the answer.
//!
//! ## Modules
//! - `board`: the immutable `Board`, its distance metrics, neighbors and twin.
//! - `search`: search nodes, the priority frontier and a generic informed
//!   search that a caller advances one step at a time.
//! - `solver`: the lock-step main/twin solve and path reconstruction.
//! - `config`: round budget and cancellation for a solve.
//! - `input` / `report`: the plain-text board format in and the solution
//!   listing out.
//!
//! ```
//! use slider_solver::{Board, Solver};
//!
//! let board: Board = "3\n0 1 3\n4 2 5\n7 8 6".parse().unwrap();
//! let solver = Solver::new(&board);
//! assert_eq!(solver.moves(), Some(4));
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod search;
pub mod solver;

pub use board::{Board, Move};
pub use config::SolverConfig;
pub use error::{BoardError, ParseError, SolveError};
pub use solver::{Outcome, Solver};

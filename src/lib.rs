//! Regina solves Queens-style colour-region placement puzzles: an N×N board
//! is partitioned into N regions, and a solution puts one marker in every
//! row, column and region with no two markers on touching cells (including
//! diagonally).
//!
//! The crate is the solving core only. How a board was obtained (scraped,
//! parsed from a screenshot, typed in) and what happens to a solution
//! (overlay rendering, automation) are the caller's business; the boundary
//! is a [`Board`] value in and a [`Resolution`] value out.
//!
//! # Core Concepts
//!
//! - **[`Board`]**: the immutable puzzle, with a dense region index per cell.
//! - **[`SolverEngine`]**: derives the constraint network from a board and
//!   runs backtracking search with constraint propagation over it. By
//!   default it verifies uniqueness, reporting an ambiguous puzzle as
//!   [`Resolution::MultipleSolutions`] rather than guessing.
//! - **[`validate`]**: an independent re-check of every rule, used as the
//!   test oracle and as a final guard on everything the engine returns.
//!
//! # Example
//!
//! ```
//! use regina::board::Board;
//! use regina::solver::engine::{Resolution, SolveMode, SolverEngine};
//! use regina::validate::validate;
//!
//! // Column-stripe regions: every region is one column.
//! let board: Board = "ABCD\nABCD\nABCD\nABCD".parse().unwrap();
//!
//! let engine = SolverEngine::with_mode(SolveMode::FirstSolution);
//! let (resolution, stats) = engine.solve(&board).unwrap();
//!
//! let Resolution::Solved(placement) = resolution else {
//!     panic!("expected a solution");
//! };
//! assert_eq!(placement.columns(), &[1, 3, 0, 2]);
//! assert!(validate(&board, &placement));
//! assert!(stats.nodes_visited > 0);
//! ```
//!
//! [`Board`]: board::Board
//! [`SolverEngine`]: solver::engine::SolverEngine
//! [`Resolution::MultipleSolutions`]: solver::engine::Resolution::MultipleSolutions
//! [`validate`]: validate::validate

pub mod board;
pub mod cache;
pub mod error;
pub mod placement;
pub mod solver;
pub mod validate;

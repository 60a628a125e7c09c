use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::error::{Result, SolveError};
use crate::placement::Placement;
use crate::solver::model::ConstraintModel;
use crate::solver::solution::CandidateSolution;
use crate::solver::strategy::{BacktrackingSearch, SearchStrategy};
use crate::validate::validate;

pub type VariableId = u32;
pub type ConstraintId = usize;

#[derive(Debug, Clone, Default)]
pub struct PerConstraintStats {
    pub revisions: u64,
    pub prunings: u64,
    pub time_spent_micros: u64,
}

/// Counters collected over one solve.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    pub nodes_visited: u64,
    pub backtracks: u64,
    /// Set when a node budget stopped the search before it was exhaustive.
    pub budget_exhausted: bool,
    pub constraint_stats: HashMap<ConstraintId, PerConstraintStats>,
}

/// How much of the search tree a solve explores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolveMode {
    /// Stop at the first complete placement.
    FirstSolution,
    /// Keep searching for a second placement so an ambiguous puzzle is
    /// reported as [`Resolution::MultipleSolutions`] instead of silently
    /// returning one of its solutions. The default.
    #[default]
    VerifyUnique,
}

/// The outcome of a solve. Finding no placement is an ordinary outcome of a
/// well-posed question, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    Solved(Placement),
    NoSolution,
    MultipleSolutions,
}

/// The main engine for solving a board.
///
/// The engine derives the constraint network from the board, runs a
/// [`SearchStrategy`] over it, and re-checks any placement it is about to
/// surface with the independent [`validate`] before returning it.
///
/// Engines hold no per-solve state, and boards are immutable, so any number
/// of `solve` calls may run concurrently on their own engines.
pub struct SolverEngine {
    strategy: Box<dyn SearchStrategy>,
    mode: SolveMode,
}

impl SolverEngine {
    /// Creates an engine with the default backtracking strategy and
    /// uniqueness verification on.
    pub fn new() -> Self {
        Self::with_mode(SolveMode::default())
    }

    pub fn with_mode(mode: SolveMode) -> Self {
        Self {
            strategy: Box::new(BacktrackingSearch::default()),
            mode,
        }
    }

    pub fn with_strategy(strategy: Box<dyn SearchStrategy>, mode: SolveMode) -> Self {
        Self { strategy, mode }
    }

    pub fn mode(&self) -> SolveMode {
        self.mode
    }

    /// Attempts to solve the given board.
    ///
    /// Returns the [`Resolution`] together with search statistics. The board
    /// is never mutated, and repeated calls return identical results. With
    /// the default strategy a `Solved` placement is the first one in
    /// row-ascending, column-ascending enumeration order.
    ///
    /// # Errors
    ///
    /// Errors only signal a defect inside the solver itself (a state that
    /// never completed or a placement the validator rejects); every honest
    /// search outcome is expressed through the `Resolution`.
    pub fn solve(&self, board: &Board) -> Result<(Resolution, SearchStats)> {
        let model = ConstraintModel::build(board);
        let initial_solution = CandidateSolution::initial(Arc::new(board.clone()));
        let limit = match self.mode {
            SolveMode::FirstSolution => 1,
            SolveMode::VerifyUnique => 2,
        };

        debug!(size = board.size(), mode = ?self.mode, "solving board");
        let (found, stats) = self
            .strategy
            .solve(model.constraints(), initial_solution, limit)?;

        let resolution = match found.as_slice() {
            [] => Resolution::NoSolution,
            [single] => {
                let placement = single
                    .to_placement()
                    .ok_or(SolveError::IncompleteAssignment)?;
                if !validate(board, &placement) {
                    return Err(SolveError::FailedValidation.into());
                }
                debug!(placement = %placement, "board solved");
                Resolution::Solved(placement)
            }
            _ => Resolution::MultipleSolutions,
        };

        Ok((resolution, stats))
    }
}

impl Default for SolverEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::heuristics::restart::RestartAfterNBacktracks;
    use crate::solver::heuristics::value::{AscendingValueHeuristic, ShuffledValueHeuristic};
    use crate::solver::heuristics::variable::RandomVariableHeuristic;
    use crate::solver::strategy::RestartingSearch;

    /// Four single-cell regions pin rows 0..4 to columns 1, 3, 0 and 2; the
    /// background region leaves row 4 only column 4. Unique by construction.
    fn forced_board() -> Board {
        "AEAAA\nAAADA\nCAAAA\nAABAA\nAAAAA".parse().unwrap()
    }

    fn stripes_4() -> Board {
        "ABCD\nABCD\nABCD\nABCD".parse().unwrap()
    }

    #[test]
    fn first_solution_mode_returns_the_lexicographically_first_placement() {
        let _ = tracing_subscriber::fmt::try_init();

        let engine = SolverEngine::with_mode(SolveMode::FirstSolution);
        let (resolution, stats) = engine.solve(&stripes_4()).unwrap();
        assert_eq!(resolution, Resolution::Solved(Placement::new(vec![1, 3, 0, 2])));
        assert!(stats.nodes_visited > 0);
    }

    #[test]
    fn verify_unique_mode_flags_ambiguous_puzzles() {
        // Column-stripe regions admit both [1, 3, 0, 2] and [2, 0, 3, 1].
        let engine = SolverEngine::new();
        let (resolution, _) = engine.solve(&stripes_4()).unwrap();
        assert_eq!(resolution, Resolution::MultipleSolutions);
    }

    #[test]
    fn a_forced_board_has_its_unique_solution_verified() {
        let board = forced_board();
        let (resolution, _) = SolverEngine::new().solve(&board).unwrap();

        let Resolution::Solved(placement) = resolution else {
            panic!("expected a unique solution");
        };
        assert_eq!(placement, Placement::new(vec![1, 3, 0, 2, 4]));
        assert_eq!(
            placement.cells().collect::<Vec<_>>(),
            vec![(0, 1), (1, 3), (2, 0), (3, 2), (4, 4)]
        );
        assert!(validate(&board, &placement));
    }

    #[test]
    fn the_single_cell_board_solves_trivially() {
        let board: Board = "A".parse().unwrap();
        let (resolution, _) = SolverEngine::new().solve(&board).unwrap();
        assert_eq!(resolution, Resolution::Solved(Placement::new(vec![0])));
    }

    #[test]
    fn two_by_two_boards_are_never_solvable() {
        // Any two markers on distinct rows of a 2x2 board touch.
        let board: Board = "AB\nAB".parse().unwrap();
        let (resolution, _) = SolverEngine::new().solve(&board).unwrap();
        assert_eq!(resolution, Resolution::NoSolution);
    }

    #[test]
    fn two_rows_confined_to_one_region_are_unsolvable() {
        // Rows 0 and 1 are entirely region A, so one of them always repeats
        // a region.
        let board: Board = "AAAA\nAAAA\nBBCB\nBBBD".parse().unwrap();
        let (resolution, _) = SolverEngine::new().solve(&board).unwrap();
        assert_eq!(resolution, Resolution::NoSolution);
    }

    #[test]
    fn solving_the_same_board_twice_is_identical() {
        let engine = SolverEngine::new();
        let board = forced_board();
        let (first, _) = engine.solve(&board).unwrap();
        let (second, _) = engine.solve(&board).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn a_transposed_board_solves_to_the_transposed_placement() {
        let board = forced_board();
        let (resolution, _) = SolverEngine::new().solve(&board).unwrap();
        let Resolution::Solved(placement) = resolution else {
            panic!("expected a unique solution");
        };

        let (transposed, _) = SolverEngine::new().solve(&board.transposed()).unwrap();
        assert_eq!(transposed, Resolution::Solved(placement.transposed()));
    }

    #[test]
    fn a_rotated_board_solves_to_the_rotated_placement() {
        let board = forced_board();
        let (resolution, _) = SolverEngine::new().solve(&board).unwrap();
        let Resolution::Solved(placement) = resolution else {
            panic!("expected a unique solution");
        };

        let (rotated, _) = SolverEngine::new().solve(&board.rotated()).unwrap();
        assert_eq!(rotated, Resolution::Solved(placement.rotated()));
    }

    #[test]
    fn randomized_orderings_still_find_the_unique_solution() {
        let strategy = BacktrackingSearch::new(
            Box::new(RandomVariableHeuristic),
            Box::new(ShuffledValueHeuristic::from_seed(7)),
        );
        let engine = SolverEngine::with_strategy(Box::new(strategy), SolveMode::VerifyUnique);
        let (resolution, _) = engine.solve(&forced_board()).unwrap();
        assert_eq!(resolution, Resolution::Solved(Placement::new(vec![1, 3, 0, 2, 4])));
    }

    #[test]
    fn restarting_search_passes_through_the_inner_result() {
        let inner = BacktrackingSearch::new(
            Box::new(RandomVariableHeuristic),
            Box::new(AscendingValueHeuristic),
        );
        let strategy = RestartingSearch::new(
            Box::new(inner),
            Box::new(RestartAfterNBacktracks { max_backtracks: 50 }),
        );
        let engine = SolverEngine::with_strategy(Box::new(strategy), SolveMode::FirstSolution);
        let (resolution, _) = engine.solve(&forced_board()).unwrap();
        assert_eq!(resolution, Resolution::Solved(Placement::new(vec![1, 3, 0, 2, 4])));
    }

    #[test]
    fn a_node_budget_caps_the_search() {
        let strategy = BacktrackingSearch::default().with_node_budget(1);
        let engine = SolverEngine::with_strategy(Box::new(strategy), SolveMode::FirstSolution);
        let (resolution, stats) = engine.solve(&forced_board()).unwrap();
        assert_eq!(resolution, Resolution::NoSolution);
        assert!(stats.budget_exhausted);
    }

    mod prop_tests {
        use proptest::prelude::*;

        use super::*;

        /// Boards with `n` regions scattered arbitrarily; the diagonal
        /// overwrite guarantees all `n` regions are present.
        fn arbitrary_board() -> impl Strategy<Value = Board> {
            (1..=6usize).prop_flat_map(|n| {
                proptest::collection::vec(0..n as u16, n * n).prop_map(move |mut regions| {
                    for row in 0..n {
                        regions[row * n + row] = row as u16;
                    }
                    Board::from_regions(n, &regions).expect("generated board is valid")
                })
            })
        }

        proptest! {
            #[test]
            fn solved_placements_always_validate(board in arbitrary_board()) {
                let engine = SolverEngine::with_mode(SolveMode::FirstSolution);
                let (resolution, _) = engine.solve(&board).unwrap();
                if let Resolution::Solved(placement) = resolution {
                    prop_assert!(validate(&board, &placement));
                }
            }

            #[test]
            fn uniqueness_checking_agrees_with_first_solution_mode(board in arbitrary_board()) {
                let (first, _) = SolverEngine::with_mode(SolveMode::FirstSolution)
                    .solve(&board)
                    .unwrap();
                let (unique, _) = SolverEngine::with_mode(SolveMode::VerifyUnique)
                    .solve(&board)
                    .unwrap();
                match (first, unique) {
                    (Resolution::NoSolution, Resolution::NoSolution) => {}
                    (Resolution::Solved(a), Resolution::Solved(b)) => prop_assert_eq!(a, b),
                    (Resolution::Solved(_), Resolution::MultipleSolutions) => {}
                    (first, unique) => {
                        prop_assert!(false, "inconsistent outcomes: {:?} vs {:?}", first, unique)
                    }
                }
            }

            #[test]
            fn solving_is_idempotent(board in arbitrary_board()) {
                let engine = SolverEngine::new();
                let (first, _) = engine.solve(&board).unwrap();
                let (second, _) = engine.solve(&board).unwrap();
                prop_assert_eq!(first, second);
            }
        }
    }
}

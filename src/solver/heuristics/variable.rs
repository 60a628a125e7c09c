//! Heuristics for selecting which row to branch on next during search.

use crate::solver::engine::VariableId;
use crate::solver::solution::CandidateSolution;

/// A trait for variable-selection heuristics.
///
/// Implementors choose which unassigned row the solver should branch on
/// next. The choice never affects which placements exist, only how quickly
/// the search runs into them. Note that the documented first-solution
/// ordering is only guaranteed by [`SelectFirstHeuristic`].
pub trait VariableSelectionHeuristic {
    /// Selects the next row to be assigned.
    ///
    /// Returns `None` if every row's domain is already a singleton.
    fn select_variable(&self, solution: &CandidateSolution) -> Option<VariableId>;
}

/// Selects the lowest-numbered row that is still unassigned.
///
/// Together with ascending value order this makes the search enumerate
/// placements in row-major lexicographic order, so the first solution found
/// is the lexicographically least one. This is the engine default.
pub struct SelectFirstHeuristic;

impl VariableSelectionHeuristic for SelectFirstHeuristic {
    fn select_variable(&self, solution: &CandidateSolution) -> Option<VariableId> {
        solution
            .domains
            .iter()
            .filter(|(_, domain)| domain.len() > 1)
            .min_by_key(|(var_id, _)| *var_id)
            .map(|(var_id, _)| *var_id)
    }
}

/// Selects the unassigned row with the fewest candidate columns left.
///
/// A "fail-first" strategy: tackling the most constrained row early prunes
/// the search space sooner. Ties go to the lower row index so the choice is
/// deterministic.
pub struct MinimumRemainingValuesHeuristic;

impl VariableSelectionHeuristic for MinimumRemainingValuesHeuristic {
    fn select_variable(&self, solution: &CandidateSolution) -> Option<VariableId> {
        solution
            .domains
            .iter()
            .filter(|(_, domain)| domain.len() > 1)
            .min_by_key(|(var_id, domain)| (domain.len(), **var_id))
            .map(|(var_id, _)| *var_id)
    }
}

/// Selects an unassigned row at random. Useful together with restart
/// strategies.
pub struct RandomVariableHeuristic;

impl VariableSelectionHeuristic for RandomVariableHeuristic {
    fn select_variable(&self, solution: &CandidateSolution) -> Option<VariableId> {
        use rand::seq::IteratorRandom;

        let unassigned: Vec<VariableId> = solution
            .domains
            .iter()
            .filter(|(_, domain)| domain.len() > 1)
            .map(|(var_id, _)| *var_id)
            .collect();

        unassigned.into_iter().choose(&mut rand::thread_rng())
    }
}

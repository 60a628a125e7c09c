use std::collections::HashMap;

use tracing::debug;

use crate::error::Result;
use crate::solver::constraint::Constraint;
use crate::solver::engine::{ConstraintId, SearchStats, VariableId};
use crate::solver::heuristics::restart::RestartPolicy;
use crate::solver::heuristics::value::{AscendingValueHeuristic, ValueOrderingHeuristic};
use crate::solver::heuristics::variable::{SelectFirstHeuristic, VariableSelectionHeuristic};
use crate::solver::solution::{CandidateSolution, ColumnSet};
use crate::solver::work_list::WorkList;

/// A complete search procedure over a constraint network.
///
/// `solve` collects up to `limit` fully assigned states; the engine maps
/// zero, one, and two collected states to the public result. Passing a
/// limit of two is how uniqueness checking is expressed: the search stops
/// as soon as a second placement proves the puzzle ambiguous.
pub trait SearchStrategy {
    fn solve(
        &self,
        constraints: &[Box<dyn Constraint>],
        initial_solution: CandidateSolution,
        limit: usize,
    ) -> Result<(Vec<CandidateSolution>, SearchStats)>;
}

/// Depth-first backtracking with constraint propagation after every guess.
///
/// Recursion depth is bounded by the number of rows and the branching
/// factor by the number of columns, so the search always terminates. With
/// the default heuristics the tree is explored in row-major lexicographic
/// order.
pub struct BacktrackingSearch {
    variable_heuristic: Box<dyn VariableSelectionHeuristic>,
    value_heuristic: Box<dyn ValueOrderingHeuristic>,
    node_budget: Option<u64>,
}

impl BacktrackingSearch {
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic>,
        value_heuristic: Box<dyn ValueOrderingHeuristic>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
            node_budget: None,
        }
    }

    /// Caps the number of search nodes visited. When the cap is hit the
    /// search stops expanding and reports `budget_exhausted` in its stats,
    /// so a caller can treat the outcome as "nothing found within budget".
    pub fn with_node_budget(mut self, node_budget: u64) -> Self {
        self.node_budget = Some(node_budget);
        self
    }

    fn search(
        &self,
        constraints: &[Box<dyn Constraint>],
        solution: CandidateSolution,
        limit: usize,
        found: &mut Vec<CandidateSolution>,
        stats: &mut SearchStats,
    ) -> Result<()> {
        stats.nodes_visited += 1;
        if let Some(budget) = self.node_budget {
            if stats.nodes_visited > budget {
                stats.budget_exhausted = true;
                return Ok(());
            }
        }

        if solution.is_complete() {
            found.push(solution);
            return Ok(());
        }

        let Some(var_to_branch) = self.variable_heuristic.select_variable(&solution) else {
            // Unreachable when `is_complete` is false, but harmless.
            found.push(solution);
            return Ok(());
        };

        let domain = *solution.domains.get(&var_to_branch).unwrap();

        for value in self.value_heuristic.order_values(&domain) {
            let new_domains = solution
                .domains
                .update(var_to_branch, ColumnSet::singleton(value));
            let guess_solution = solution.clone_with_domains(new_domains);

            if let Some(propagated_solution) =
                self.arc_consistency(constraints, guess_solution, stats)?
            {
                self.search(constraints, propagated_solution, limit, found, stats)?;
                if found.len() >= limit || stats.budget_exhausted {
                    return Ok(());
                }
            }
            stats.backtracks += 1;
        }

        Ok(())
    }

    /// Runs the propagation worklist to a fixpoint.
    ///
    /// Every revision only removes columns that can appear in no completion
    /// of the currently fixed rows, so `Ok(None)` (an emptied domain) proves
    /// the state inconsistent, and a state whose domains all collapse to
    /// singletons is a valid placement.
    pub fn arc_consistency(
        &self,
        constraints: &[Box<dyn Constraint>],
        initial_solution: CandidateSolution,
        stats: &mut SearchStats,
    ) -> Result<Option<CandidateSolution>> {
        let mut solution = initial_solution;

        let mut dependency_graph: HashMap<VariableId, Vec<ConstraintId>> = HashMap::new();
        for (i, constraint) in constraints.iter().enumerate() {
            for var_id in constraint.variables() {
                dependency_graph.entry(*var_id).or_default().push(i);
            }
        }

        let mut worklist = WorkList::new();
        for (constraint_id, constraint) in constraints.iter().enumerate() {
            for var_id in constraint.variables() {
                worklist.push_back(*var_id, constraint_id);
            }
        }

        while let Some((target_var, constraint_id)) = worklist.pop_front() {
            let constraint = &constraints[constraint_id];
            let constraint_stats = stats.constraint_stats.entry(constraint_id).or_default();

            let start_time = std::time::Instant::now();
            constraint_stats.revisions += 1;

            if let Some(new_solution) = constraint.revise(&target_var, &solution)? {
                let old_domain_size = solution.domains.get(&target_var).unwrap().len();
                let new_domain_size = new_solution.domains.get(&target_var).unwrap().len();

                if new_domain_size == 0 {
                    return Ok(None);
                }

                if new_domain_size < old_domain_size {
                    constraint_stats.prunings += 1;
                    solution = new_solution;

                    // The domain of `target_var` shrank; re-check every other
                    // constraint that involves it.
                    if let Some(dependent_constraints) = dependency_graph.get(&target_var) {
                        for &dep_constraint_id in dependent_constraints {
                            for &neighbor_var in constraints[dep_constraint_id].variables() {
                                if neighbor_var != target_var {
                                    worklist.push_back(neighbor_var, dep_constraint_id);
                                }
                            }
                        }
                    }
                }
            }
            constraint_stats.time_spent_micros += start_time.elapsed().as_micros() as u64;
        }

        debug!("propagation reached a fixpoint");

        Ok(Some(solution))
    }
}

impl Default for BacktrackingSearch {
    fn default() -> Self {
        Self::new(
            Box::new(SelectFirstHeuristic),
            Box::new(AscendingValueHeuristic),
        )
    }
}

impl SearchStrategy for BacktrackingSearch {
    fn solve(
        &self,
        constraints: &[Box<dyn Constraint>],
        initial_solution: CandidateSolution,
        limit: usize,
    ) -> Result<(Vec<CandidateSolution>, SearchStats)> {
        let mut stats = SearchStats::default();
        let mut found = Vec::new();

        let Some(solution) = self.arc_consistency(constraints, initial_solution, &mut stats)?
        else {
            return Ok((found, stats));
        };
        if solution.is_complete() {
            // Root propagation only removes columns no placement can use, so
            // a state forced here is the puzzle's one solution.
            found.push(solution);
            return Ok((found, stats));
        }

        self.search(constraints, solution, limit, &mut found, &mut stats)?;
        Ok((found, stats))
    }
}

/// Wraps a strategy and re-runs it while a [`RestartPolicy`] asks for
/// another attempt. Only meaningful over randomized, budgeted searches.
pub struct RestartingSearch {
    inner_strategy: Box<dyn SearchStrategy>,
    restart_policy: Box<dyn RestartPolicy>,
}

impl RestartingSearch {
    pub fn new(
        inner_strategy: Box<dyn SearchStrategy>,
        restart_policy: Box<dyn RestartPolicy>,
    ) -> Self {
        Self {
            inner_strategy,
            restart_policy,
        }
    }
}

impl SearchStrategy for RestartingSearch {
    fn solve(
        &self,
        constraints: &[Box<dyn Constraint>],
        initial_solution: CandidateSolution,
        limit: usize,
    ) -> Result<(Vec<CandidateSolution>, SearchStats)> {
        let mut cumulative_stats = SearchStats::default();

        loop {
            let (found, search_stats) =
                self.inner_strategy
                    .solve(constraints, initial_solution.clone(), limit)?;

            cumulative_stats.nodes_visited += search_stats.nodes_visited;
            cumulative_stats.backtracks += search_stats.backtracks;
            cumulative_stats.budget_exhausted |= search_stats.budget_exhausted;
            for (id, stats) in &search_stats.constraint_stats {
                let merged = cumulative_stats.constraint_stats.entry(*id).or_default();
                merged.revisions += stats.revisions;
                merged.prunings += stats.prunings;
                merged.time_spent_micros += stats.time_spent_micros;
            }

            if !found.is_empty() || !self.restart_policy.should_restart(&search_stats) {
                return Ok((found, cumulative_stats));
            }
        }
    }
}

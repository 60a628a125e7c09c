use crate::error::Result;
use crate::solver::engine::VariableId;
use crate::solver::solution::CandidateSolution;

#[derive(Debug, Clone)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

/// A rule that every placement must satisfy, expressed over row variables.
///
/// Constraints participate in propagation through [`revise`]: given a target
/// row, a constraint may prune columns from that row's domain that cannot
/// appear in any completion of the peers already fixed in `solution`.
/// Soundness of every `revise` is what lets the engine trust a fully
/// assigned state without re-checking it.
///
/// [`revise`]: Constraint::revise
pub trait Constraint: std::fmt::Debug {
    /// The rows this constraint ranges over.
    fn variables(&self) -> &[VariableId];

    fn descriptor(&self) -> ConstraintDescriptor;

    /// Narrows the target row's domain against the current state.
    ///
    /// Returns `Ok(Some(state))` with the target's domain pruned when the
    /// constraint removed at least one column, and `Ok(None)` when it has
    /// nothing to say.
    fn revise(
        &self,
        target_var: &VariableId,
        solution: &CandidateSolution,
    ) -> Result<Option<CandidateSolution>>;
}

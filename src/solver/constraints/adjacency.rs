use crate::error::Result;
use crate::solver::constraint::{Constraint, ConstraintDescriptor};
use crate::solver::engine::VariableId;
use crate::solver::solution::CandidateSolution;

/// Keeps the markers of two consecutive rows out of touching cells.
///
/// Markers live one per row, so 8-adjacency can only occur between rows
/// `r` and `r+1`; the model instantiates this constraint for exactly those
/// pairs. When one row is fixed at column `c`, the other loses `c-1`, `c`
/// and `c+1`.
#[derive(Debug, Clone)]
pub struct AdjacentRowsConstraint {
    vars: [VariableId; 2],
}

impl AdjacentRowsConstraint {
    pub fn new(upper: VariableId, lower: VariableId) -> Self {
        debug_assert_eq!(lower, upper + 1, "rows must be consecutive");
        Self {
            vars: [upper, lower],
        }
    }
}

impl Constraint for AdjacentRowsConstraint {
    fn variables(&self) -> &[VariableId] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "AdjacentRows".to_string(),
            description: format!("no touching markers in rows {} and {}", self.vars[0], self.vars[1]),
        }
    }

    fn revise(
        &self,
        target_var: &VariableId,
        solution: &CandidateSolution,
    ) -> Result<Option<CandidateSolution>> {
        let other_var = if *target_var == self.vars[0] {
            self.vars[1]
        } else {
            self.vars[0]
        };

        let other_domain = solution.domains.get(&other_var).unwrap();
        let Some(other_col) = other_domain.get_singleton_value() else {
            return Ok(None);
        };

        let target_domain = *solution.domains.get(target_var).unwrap();
        let new_domain = target_domain.retain(|col| col.abs_diff(other_col) > 1);
        if new_domain.len() < target_domain.len() {
            let new_domains = solution.domains.update(*target_var, new_domain);
            Ok(Some(solution.clone_with_domains(new_domains)))
        } else {
            Ok(None)
        }
    }
}

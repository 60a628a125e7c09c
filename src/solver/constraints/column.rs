use crate::error::Result;
use crate::solver::constraint::{Constraint, ConstraintDescriptor};
use crate::solver::engine::VariableId;
use crate::solver::solution::{CandidateSolution, ColumnSet};

/// Requires every row's marker to sit in a distinct column.
///
/// Consistency is achieved by waiting for a row in the set to become a
/// singleton and then pruning that column from the domains of all other
/// rows. Stronger all-different propagators exist, but with one marker per
/// row this is both simple and effective.
#[derive(Debug, Clone)]
pub struct ColumnAllDifferentConstraint {
    vars: Vec<VariableId>,
}

impl ColumnAllDifferentConstraint {
    pub fn new(vars: Vec<VariableId>) -> Self {
        Self { vars }
    }
}

impl Constraint for ColumnAllDifferentConstraint {
    fn variables(&self) -> &[VariableId] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "ColumnAllDifferent".to_string(),
            description: format!("distinct columns across rows 0..{}", self.vars.len()),
        }
    }

    fn revise(
        &self,
        target_var: &VariableId,
        solution: &CandidateSolution,
    ) -> Result<Option<CandidateSolution>> {
        // Columns already claimed by fixed peers in this group.
        let mut used = ColumnSet::empty();
        for var in &self.vars {
            if var == target_var {
                continue;
            }
            if let Some(col) = solution
                .domains
                .get(var)
                .and_then(|domain| domain.get_singleton_value())
            {
                used = used.insert(col);
            }
        }
        if used.is_empty() {
            return Ok(None);
        }

        let target_domain = *solution.domains.get(target_var).unwrap();
        let new_domain = target_domain.retain(|col| !used.contains(col));
        if new_domain.len() < target_domain.len() {
            let new_domains = solution.domains.update(*target_var, new_domain);
            Ok(Some(solution.clone_with_domains(new_domains)))
        } else {
            Ok(None)
        }
    }
}

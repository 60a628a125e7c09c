use crate::error::Result;
use crate::solver::constraint::{Constraint, ConstraintDescriptor};
use crate::solver::engine::VariableId;
use crate::solver::solution::CandidateSolution;

/// Requires every row's marker to sit in a distinct colour region.
///
/// Regions are looked up through the board carried by the state: once a
/// peer row is fixed, every cell of its region becomes off limits for the
/// target row. With N regions on N rows, distinctness also forces every
/// region to be used, so no separate coverage rule is needed.
#[derive(Debug, Clone)]
pub struct RegionAllDifferentConstraint {
    vars: Vec<VariableId>,
}

impl RegionAllDifferentConstraint {
    pub fn new(vars: Vec<VariableId>) -> Self {
        Self { vars }
    }
}

impl Constraint for RegionAllDifferentConstraint {
    fn variables(&self) -> &[VariableId] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "RegionAllDifferent".to_string(),
            description: format!("distinct regions across rows 0..{}", self.vars.len()),
        }
    }

    fn revise(
        &self,
        target_var: &VariableId,
        solution: &CandidateSolution,
    ) -> Result<Option<CandidateSolution>> {
        let board = &solution.board;

        // Bitmask of regions claimed by fixed peers; region indexes are
        // dense, so one u16 covers the largest board.
        let mut used_regions: u16 = 0;
        for var in &self.vars {
            if var == target_var {
                continue;
            }
            if let Some(col) = solution
                .domains
                .get(var)
                .and_then(|domain| domain.get_singleton_value())
            {
                used_regions |= 1 << board.region_at(*var as usize, col).index();
            }
        }
        if used_regions == 0 {
            return Ok(None);
        }

        let row = *target_var as usize;
        let target_domain = *solution.domains.get(target_var).unwrap();
        let new_domain = target_domain
            .retain(|col| used_regions & (1 << board.region_at(row, col).index()) == 0);
        if new_domain.len() < target_domain.len() {
            let new_domains = solution.domains.update(*target_var, new_domain);
            Ok(Some(solution.clone_with_domains(new_domains)))
        } else {
            Ok(None)
        }
    }
}

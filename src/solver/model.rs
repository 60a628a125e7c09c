use crate::board::Board;
use crate::solver::constraint::Constraint;
use crate::solver::constraints::adjacency::AdjacentRowsConstraint;
use crate::solver::constraints::column::ColumnAllDifferentConstraint;
use crate::solver::constraints::region::RegionAllDifferentConstraint;
use crate::solver::engine::VariableId;

/// The constraint network derived from a board.
///
/// Rows are the variables and columns the values, which turns the puzzle's
/// rules into exactly three constraint families: one column all-different
/// over every row, one region all-different over every row, and one
/// adjacency constraint per consecutive row pair.
pub struct ConstraintModel {
    constraints: Vec<Box<dyn Constraint>>,
}

impl ConstraintModel {
    pub fn build(board: &Board) -> Self {
        let rows: Vec<VariableId> = (0..board.size() as VariableId).collect();

        let mut constraints: Vec<Box<dyn Constraint>> = vec![
            Box::new(ColumnAllDifferentConstraint::new(rows.clone())),
            Box::new(RegionAllDifferentConstraint::new(rows.clone())),
        ];
        for pair in rows.windows(2) {
            constraints.push(Box::new(AdjacentRowsConstraint::new(pair[0], pair[1])));
        }

        Self { constraints }
    }

    pub fn constraints(&self) -> &[Box<dyn Constraint>] {
        &self.constraints
    }
}

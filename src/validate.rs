use crate::board::Board;
use crate::placement::Placement;

/// Checks a placement against every puzzle rule, from scratch.
///
/// Returns `true` iff the placement covers exactly one marker per row and
/// satisfies all three constraint families: distinct columns, distinct
/// regions, and no two markers on 8-adjacent cells. The check shares no
/// state or code with the solver, so it can vouch for solver output and
/// serve as the oracle in tests.
pub fn validate(board: &Board, placement: &Placement) -> bool {
    let n = board.size();
    if placement.len() != n {
        return false;
    }
    let cols = placement.columns();
    if cols.iter().any(|&col| col >= n) {
        return false;
    }

    let mut seen_cols = vec![false; n];
    for &col in cols {
        if seen_cols[col] {
            return false;
        }
        seen_cols[col] = true;
    }

    let mut seen_regions = vec![false; n];
    for (row, &col) in cols.iter().enumerate() {
        let region = board.region_at(row, col).index();
        if seen_regions[region] {
            return false;
        }
        seen_regions[region] = true;
    }

    // Adjacency over every distinct pair of markers. One marker per row
    // means only consecutive rows can ever collide, but the point of this
    // function is to not assume that.
    for (r1, &c1) in cols.iter().enumerate() {
        for (r2, &c2) in cols.iter().enumerate().skip(r1 + 1) {
            if r2 - r1 <= 1 && c1.abs_diff(c2) <= 1 {
                return false;
            }
        }
    }

    true
}

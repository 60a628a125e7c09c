use std::fmt;
use std::sync::Arc;

use im::HashMap;

use crate::board::Board;
use crate::placement::Placement;
use crate::solver::engine::VariableId;

/// Per-row column domains, keyed by row variable.
pub type Domains = HashMap<VariableId, ColumnSet>;

/// A single, immutable state in the solver's search space.
///
/// Each row of the board is a variable whose domain is the set of columns
/// its marker may still occupy. Because the domain map is a persistent data
/// structure, snapshotting a state for a guess is cheap and backtracking is
/// just dropping the failed state.
#[derive(Clone, Debug)]
pub struct CandidateSolution {
    /// A map from each row to its current domain of candidate columns.
    pub domains: Domains,
    /// Read-only access to the board being solved, shared across all states.
    pub board: Arc<Board>,
}

impl CandidateSolution {
    /// The root state: every row may still use every column.
    pub fn initial(board: Arc<Board>) -> Self {
        let full = ColumnSet::full(board.size());
        let domains = (0..board.size() as VariableId)
            .map(|row| (row, full))
            .collect();
        Self { domains, board }
    }

    pub fn clone_with_domains(&self, domains: Domains) -> Self {
        Self {
            domains,
            board: self.board.clone(),
        }
    }

    /// Checks if every row's domain is a singleton.
    pub fn is_complete(&self) -> bool {
        self.domains.values().all(|domain| domain.is_singleton())
    }

    /// Extracts the placement from a complete state; `None` if any row is
    /// still unassigned.
    pub fn to_placement(&self) -> Option<Placement> {
        let mut cols = Vec::with_capacity(self.board.size());
        for row in 0..self.board.size() as VariableId {
            cols.push(self.domains.get(&row)?.get_singleton_value()?);
        }
        Some(Placement::new(cols))
    }
}

/// A row's candidate columns, packed into a `u16` bitmask.
///
/// Boards are capped at [`MAX_SIZE`](crate::board::MAX_SIZE) columns, so one
/// machine word covers the whole domain and pruning is a couple of bit
/// operations. The set is a value type: operations return new sets rather
/// than mutating.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnSet(u16);

impl ColumnSet {
    pub fn empty() -> Self {
        Self(0)
    }

    /// The set `{0, .., n-1}`.
    pub fn full(n: usize) -> Self {
        debug_assert!(n <= 16);
        Self(((1u32 << n) - 1) as u16)
    }

    pub fn singleton(col: usize) -> Self {
        Self::empty().insert(col)
    }

    pub fn contains(self, col: usize) -> bool {
        col < 16 && self.0 & (1 << col) != 0
    }

    pub fn insert(self, col: usize) -> Self {
        debug_assert!(col < 16);
        Self(self.0 | 1 << col)
    }

    pub fn remove(self, col: usize) -> Self {
        debug_assert!(col < 16);
        Self(self.0 & !(1 << col))
    }

    /// Returns the number of candidate columns in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the set contains exactly one column.
    pub fn is_singleton(self) -> bool {
        self.len() == 1
    }

    /// If the set is a singleton, returns the single column. Otherwise `None`.
    pub fn get_singleton_value(self) -> Option<usize> {
        if self.is_singleton() {
            Some(self.0.trailing_zeros() as usize)
        } else {
            None
        }
    }

    /// Creates a new set containing only the columns that satisfy the
    /// predicate.
    pub fn retain(self, keep: impl Fn(usize) -> bool) -> Self {
        let mut out = Self::empty();
        for col in self.iter() {
            if keep(col) {
                out = out.insert(col);
            }
        }
        out
    }

    /// Iterates the columns in ascending order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..16).filter(move |&col| self.contains(col))
    }
}

impl fmt::Debug for ColumnSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

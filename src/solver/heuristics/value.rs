//! Heuristics for ordering the candidate columns tried for a row.

use std::cell::RefCell;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::solver::solution::ColumnSet;

/// A trait for strategies that determine the order in which a row's
/// candidate columns are tried.
pub trait ValueOrderingHeuristic {
    /// Returns the domain's columns in the order they should be tried.
    fn order_values(&self, domain: &ColumnSet) -> Vec<usize>;
}

/// Tries columns in ascending order. This is the engine default and the
/// ordering the first-solution guarantee is documented against.
pub struct AscendingValueHeuristic;

impl ValueOrderingHeuristic for AscendingValueHeuristic {
    fn order_values(&self, domain: &ColumnSet) -> Vec<usize> {
        domain.iter().collect()
    }
}

/// Tries columns in a pseudo-random order drawn from a seeded ChaCha
/// stream, so randomized runs stay reproducible.
pub struct ShuffledValueHeuristic {
    rng: RefCell<ChaCha8Rng>,
}

impl ShuffledValueHeuristic {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: RefCell::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl ValueOrderingHeuristic for ShuffledValueHeuristic {
    fn order_values(&self, domain: &ColumnSet) -> Vec<usize> {
        let mut values: Vec<usize> = domain.iter().collect();
        values.shuffle(&mut *self.rng.borrow_mut());
        values
    }
}

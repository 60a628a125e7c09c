use linked_hash_map::LinkedHashMap;

use crate::board::Board;
use crate::error::Result;
use crate::solver::engine::{Resolution, SolverEngine};

/// A bounded, least-recently-used memo of solved boards.
///
/// Purely additive over [`SolverEngine::solve`]: a caller that re-solves
/// the same puzzles (say, a batch runner revisiting fetched levels) can
/// front the engine with a cache instead of repeating the search. Boards
/// are canonical values (region identifiers are densely remapped at
/// construction), so the board itself is the cache key and equal puzzles
/// hit regardless of input labelling.
pub struct SolveCache {
    capacity: usize,
    entries: LinkedHashMap<Board, Resolution>,
}

impl SolveCache {
    /// Creates a cache holding at most `capacity` resolutions. A capacity
    /// of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: LinkedHashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a board, marking the entry as recently used.
    pub fn get(&mut self, board: &Board) -> Option<&Resolution> {
        self.entries.get_refresh(board).map(|hit| &*hit)
    }

    /// Stores a resolution, evicting the least recently used entries once
    /// the capacity is exceeded.
    pub fn insert(&mut self, board: Board, resolution: Resolution) {
        self.entries.insert(board, resolution);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Returns the cached resolution for `board`, solving and caching it on
    /// a miss.
    pub fn solve_with(&mut self, engine: &SolverEngine, board: &Board) -> Result<Resolution> {
        if let Some(hit) = self.entries.get_refresh(board) {
            return Ok(hit.clone());
        }
        let (resolution, _stats) = engine.solve(board)?;
        self.insert(board.clone(), resolution.clone());
        Ok(resolution)
    }
}

//! Shortest-path search (in piece-moves) over the implicit graph whose
//! out-edges at each square are exactly what the move generator returns.
//!
//! The algorithm is a recursive depth-first search with [branch-and-bound]
//! pruning: a branch is abandoned as soon as it cannot improve on the best
//! path found so far.
//!
//! [branch-and-bound]: https://en.wikipedia.org/wiki/Branch_and_bound

use std::collections::HashMap;

use arrayvec::ArrayVec;
use log::{debug, trace};

use crate::chess::board::Board;
use crate::chess::core::Square;
use crate::chess::movegen::generate_moves;
use crate::error::Error;

/// Hard ceiling on the search depth. No shortest path on a 64-square board
/// visits a square twice, so a longer path can never be optimal.
pub const MAX_PATH: usize = 64;

/// One shortest-path query: the best-so-far bound and the visit-depth map
/// threaded through the recursion. Each query owns its state, so independent
/// searches (e.g. per-candidate evaluation during a tour) do not interfere.
pub struct PathFinder<'a> {
    board: &'a Board,
    target: Square,
    /// Best complete path found so far; its length is the pruning bound.
    best: Option<Vec<Square>>,
    /// Path length at which each square was first reached. A square is
    /// revisited only via a strictly shorter prefix.
    seen: HashMap<Square, usize>,
    expanded: u64,
}

impl<'a> PathFinder<'a> {
    #[allow(missing_docs)]
    #[must_use]
    pub fn new(board: &'a Board, target: Square) -> Self {
        Self {
            board,
            target,
            best: None,
            seen: HashMap::new(),
            expanded: 0,
        }
    }

    /// Finds a shortest path from `origin` to the target, both inclusive.
    ///
    /// # Errors
    ///
    /// [`Error::NoPathToTarget`] when every branch is exhausted without
    /// reaching the target; [`Error::IllegalPosition`] propagated from move
    /// generation.
    pub fn shortest_path(mut self, origin: Square) -> Result<Vec<Square>, Error> {
        let mut path = ArrayVec::new();
        self.explore(origin, &mut path)?;
        debug!(
            "path search {origin} -> {}: {} nodes expanded, best {:?}",
            self.target,
            self.expanded,
            self.best.as_ref().map(Vec::len)
        );
        self.best.ok_or(Error::NoPathToTarget {
            from: origin,
            to: self.target,
        })
    }

    fn bound(&self) -> usize {
        self.best.as_ref().map_or(usize::MAX, Vec::len)
    }

    fn explore(
        &mut self,
        current: Square,
        path: &mut ArrayVec<Square, MAX_PATH>,
    ) -> Result<(), Error> {
        if path.is_full() {
            return Ok(());
        }
        path.push(current);
        let _ = self.seen.insert(current, path.len());
        self.expanded += 1;
        let moves = generate_moves(self.board, current)?;
        if moves.contains(&self.target) {
            if path.len() + 1 < self.bound() {
                let mut candidate: Vec<Square> = path.iter().copied().collect();
                candidate.push(self.target);
                trace!("improved candidate path: {candidate:?}");
                self.best = Some(candidate);
            }
        } else {
            for square in moves {
                // Any path through this branch is at least two moves longer
                // than the current prefix: once the prefix is within one move
                // of the bound, nothing below can improve on it.
                if path.len() + 1 >= self.bound() {
                    break;
                }
                let depth = path.len() + 1;
                if self.seen.get(&square).is_some_and(|&earlier| earlier <= depth) {
                    continue;
                }
                self.explore(square, path)?;
            }
        }
        let _ = path.pop();
        Ok(())
    }
}

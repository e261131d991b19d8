//! Target selection and search orchestration: "capture the farthest enemy"
//! and the greedy nearest-neighbor "capture every enemy" tour.

use log::debug;
use rand::Rng;

use crate::chess::board::Board;
use crate::chess::core::{PieceKind, Square};
use crate::error::Error;
use crate::search::path::PathFinder;

/// Picks the enemy farthest from the piece by Euclidean distance, after
/// piece-specific filtering. Candidates are scanned file-major and the first
/// maximum wins ties. `None` when filtering eliminates every enemy.
#[must_use]
pub fn farthest_target(board: &Board) -> Option<Square> {
    let origin = board.position();
    let mut farthest: Option<Square> = None;
    for candidate in candidate_targets(board) {
        if farthest
            .map_or(true, |best| origin.distance_squared(candidate) > origin.distance_squared(best))
        {
            farthest = Some(candidate);
        }
    }
    farthest
}

/// Enemies the piece could conceivably capture, in board scan order.
///
/// A bishop is bound to squares of its own color. A pawn only ever captures
/// one file to the side and forward, and cannot pass an enemy sitting lower
/// in the candidate's file.
fn candidate_targets(board: &Board) -> Vec<Square> {
    let origin = board.position();
    let enemies = board.enemies();
    match board.piece() {
        PieceKind::Bishop => enemies
            .iter()
            .copied()
            .filter(|enemy| enemy.same_color(origin))
            .collect(),
        PieceKind::Pawn => enemies
            .iter()
            .copied()
            .filter(|candidate| pawn_can_reach(origin, *candidate, &enemies))
            .collect(),
        _ => enemies,
    }
}

fn pawn_can_reach(origin: Square, candidate: Square, enemies: &[Square]) -> bool {
    // Capture-file adjacency is the reachability test for tour purposes.
    if (candidate.file() as i8 - origin.file() as i8).abs() != 1 {
        return false;
    }
    if candidate.rank() <= origin.rank() {
        return false;
    }
    // An enemy lower in the candidate's file blocks the forward path.
    !enemies.iter().any(|enemy| {
        *enemy != candidate && enemy.file() == candidate.file() && enemy.rank() < candidate.rank()
    })
}

/// Finds the fewest-move path from the piece's position to the farthest
/// valid enemy. When filtering leaves no valid target, enemy placement is
/// re-randomized until one exists (the 8-of-64 placement always leaves room).
///
/// # Errors
///
/// Propagates [`Error::NoPathToTarget`] and [`Error::IllegalPosition`] from
/// the search.
pub fn capture_farthest(board: &mut Board, rng: &mut impl Rng) -> Result<Vec<Square>, Error> {
    let target = loop {
        match farthest_target(board) {
            Some(target) => break target,
            None => {
                debug!("no valid target for a {}, re-placing enemies", board.piece());
                board.scatter_enemies(rng);
            },
        }
    };
    PathFinder::new(board, target).shortest_path(board.position())
}

/// Visits every enemy with a greedy nearest-neighbor tour: repeatedly search
/// the shortest path to each remaining target, move along the best one and
/// re-derive the remaining set (enemies captured en route count as visited).
/// Returns the tour as path segments; every segment after the first omits
/// its starting square, so concatenating the segments yields the full route.
///
/// This is a heuristic: the total tour length is not guaranteed minimal.
///
/// # Errors
///
/// [`Error::UnsupportedTour`] for pawns and bishops, which cannot reach
/// every square class; search errors are propagated.
pub fn capture_all(board: &mut Board) -> Result<Vec<Vec<Square>>, Error> {
    let kind = board.piece();
    if matches!(kind, PieceKind::Pawn | PieceKind::Bishop) {
        return Err(Error::UnsupportedTour { kind });
    }
    let mut segments: Vec<Vec<Square>> = vec![];
    loop {
        let remaining = board.enemies();
        let mut nearest: Option<Vec<Square>> = None;
        for target in remaining {
            let path = PathFinder::new(board, target).shortest_path(board.position())?;
            if nearest.as_ref().map_or(true, |best| path.len() < best.len()) {
                nearest = Some(path);
            }
        }
        let Some(path) = nearest else {
            break;
        };
        debug!("tour segment: {path:?}");
        for step in path.iter().skip(1) {
            board.advance(*step);
        }
        if segments.is_empty() {
            segments.push(path);
        } else {
            segments.push(path[1..].to_vec());
        }
    }
    Ok(segments)
}

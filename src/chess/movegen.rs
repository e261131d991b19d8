//! Move generation for a single piece over a [`Board`] occupancy model:
//! [rays] for the sliding pieces, enumerated offsets for the knight and the
//! king, and the pawn's asymmetric push/capture rules.
//!
//! [rays]: https://www.chessprogramming.org/Rays

use crate::chess::board::Board;
use crate::chess::core::{Direction, Occupancy, PieceKind, Rank, Square, BOARD_WIDTH};
use crate::error::Error;

/// Ray cast order for the rook (and the first half of the queen).
const ROOK_DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

/// Ray cast order for the bishop (and the second half of the queen).
const BISHOP_DIRECTIONS: [Direction; 4] = [
    Direction::UpLeft,
    Direction::UpRight,
    Direction::DownLeft,
    Direction::DownRight,
];

/// Step order for the king: clockwise from Up.
const KING_DIRECTIONS: [Direction; 8] = [
    Direction::Up,
    Direction::UpRight,
    Direction::Right,
    Direction::DownRight,
    Direction::Down,
    Direction::DownLeft,
    Direction::Left,
    Direction::UpLeft,
];

/// The knight's eight compound offsets: two steps in the first direction,
/// then one in the second.
const KNIGHT_OFFSETS: [(Direction, Direction); 8] = [
    (Direction::Up, Direction::Left),
    (Direction::Up, Direction::Right),
    (Direction::Down, Direction::Left),
    (Direction::Down, Direction::Right),
    (Direction::Left, Direction::Up),
    (Direction::Left, Direction::Down),
    (Direction::Right, Direction::Up),
    (Direction::Right, Direction::Down),
];

/// A lazy walk from an origin square in one direction, up to `limit` steps.
///
/// The walk ends without error when the limit is reached, when the next step
/// would leave the board, or when the current square holds an enemy (a
/// capture ends the ray on the enemy's square). The enemy check is skipped
/// before the first step so that a walk can leave an origin square that is
/// transiently marked [`Occupancy::Enemy`] during capture simulation.
pub struct Ray<'a> {
    board: &'a Board,
    current: Square,
    direction: Direction,
    limit: u8,
    yielded: u8,
}

impl<'a> Ray<'a> {
    /// A ray capped only by the board edge: no straight line on an 8×8 board
    /// is longer than `BOARD_WIDTH - 1` steps.
    #[must_use]
    pub fn new(board: &'a Board, origin: Square, direction: Direction) -> Self {
        Self::with_limit(board, origin, direction, BOARD_WIDTH - 1)
    }

    /// A ray of at most `limit` steps, for short-range pieces.
    #[must_use]
    pub const fn with_limit(
        board: &'a Board,
        origin: Square,
        direction: Direction,
        limit: u8,
    ) -> Self {
        Self {
            board,
            current: origin,
            direction,
            limit,
            yielded: 0,
        }
    }
}

impl Iterator for Ray<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.yielded >= self.limit {
            return None;
        }
        if self.yielded > 0 && self.board.at(self.current) == Occupancy::Enemy {
            return None;
        }
        self.current = self.current.shift(self.direction)?;
        self.yielded += 1;
        Some(self.current)
    }
}

/// Produces the squares the board's piece could move to from `origin`,
/// in generation order: direction-major for rays, enumerated-offset order
/// for the knight and the king. Duplicate-free by construction.
///
/// The occupancy model decides blocking vs. capture: rays include an enemy
/// square as their final square, the pawn pushes only onto empty squares and
/// captures only diagonally.
///
/// # Errors
///
/// [`Error::IllegalPosition`] when a pawn is queried from its own back rank.
pub fn generate_moves(board: &Board, origin: Square) -> Result<Vec<Square>, Error> {
    Ok(match board.piece() {
        PieceKind::Rook => cast_rays(board, origin, &ROOK_DIRECTIONS),
        PieceKind::Bishop => cast_rays(board, origin, &BISHOP_DIRECTIONS),
        PieceKind::Queen => {
            let mut moves = cast_rays(board, origin, &ROOK_DIRECTIONS);
            moves.extend(cast_rays(board, origin, &BISHOP_DIRECTIONS));
            moves
        },
        PieceKind::King => KING_DIRECTIONS
            .iter()
            .flat_map(|direction| Ray::with_limit(board, origin, *direction, 1))
            .collect(),
        PieceKind::Knight => KNIGHT_OFFSETS
            .iter()
            .filter_map(|(first, second)| {
                origin
                    .shift(*first)
                    .and_then(|square| square.shift(*first))
                    .and_then(|square| square.shift(*second))
            })
            .collect(),
        PieceKind::Pawn => return pawn_moves(board, origin),
    })
}

fn cast_rays(board: &Board, origin: Square, directions: &[Direction]) -> Vec<Square> {
    directions
        .iter()
        .flat_map(|direction| Ray::new(board, origin, *direction))
        .collect()
}

/// A white pawn pushes straight onto empty squares (two from its starting
/// rank when both squares ahead are empty) and captures one square
/// diagonally forward. Check order: right-diagonal capture, left-diagonal
/// capture, single push, double push.
fn pawn_moves(board: &Board, origin: Square) -> Result<Vec<Square>, Error> {
    if origin.rank() == Rank::BACKRANK {
        return Err(Error::IllegalPosition {
            kind: PieceKind::Pawn,
            square: origin,
        });
    }
    let mut moves = vec![];
    if origin.rank() == Rank::LAST {
        return Ok(moves);
    }
    for capture in [Direction::UpRight, Direction::UpLeft] {
        if let Some(diagonal) = origin.shift(capture) {
            if board.at(diagonal) == Occupancy::Enemy {
                moves.push(diagonal);
            }
        }
    }
    if let Some(ahead) = origin.shift(Direction::Up) {
        if board.at(ahead) == Occupancy::Empty {
            moves.push(ahead);
            if origin.rank() == Rank::PAWNS_STARTING {
                if let Some(double) = ahead.shift(Direction::Up) {
                    if board.at(double) == Occupancy::Empty {
                        moves.push(double);
                    }
                }
            }
        }
    }
    Ok(moves)
}

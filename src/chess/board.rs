//! Square-centric board state for a single moving piece: an 8×8 occupancy
//! grid, the piece's kind and position and the set of enemy squares captured
//! at setup time ("targets").
//!
//! A [`Board`] is created once per query and mutated in place only when
//! simulating movement along a discovered path. It is exclusively owned by
//! one logical query: concurrent searches construct independent instances.

use std::fmt;

use rand::Rng;
use strum::IntoEnumIterator;

use crate::chess::core::{File, Occupancy, PieceKind, Rank, Square, BOARD_SIZE};

/// The number of enemy pieces placed by the random setup.
pub const RANDOM_ENEMIES: usize = 8;

/// Occupancy grid plus the moving piece. Squares are indexed by
/// [`Square`] discriminants (A1 = 0, H8 = 63).
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Occupancy; BOARD_SIZE as usize],
    piece: PieceKind,
    position: Square,
}

impl Board {
    /// Creates a board holding only the moving piece.
    #[must_use]
    pub fn new(piece: PieceKind, position: Square) -> Self {
        let mut squares = [Occupancy::Empty; BOARD_SIZE as usize];
        squares[position as usize] = Occupancy::Friendly;
        Self {
            squares,
            piece,
            position,
        }
    }

    /// Creates a board with [`RANDOM_ENEMIES`] enemy pieces placed on
    /// distinct random squares, none of which is the moving piece's own.
    pub fn with_random_enemies(piece: PieceKind, position: Square, rng: &mut impl Rng) -> Self {
        let mut board = Self::new(piece, position);
        board.scatter_enemies(rng);
        board
    }

    /// Clears all enemies and places a fresh random set. Used when
    /// piece-specific filtering leaves no valid target: terminates because
    /// only [`RANDOM_ENEMIES`] of the 64 squares are needed.
    pub fn scatter_enemies(&mut self, rng: &mut impl Rng) {
        for cell in &mut self.squares {
            if *cell == Occupancy::Enemy {
                *cell = Occupancy::Empty;
            }
        }
        let mut placed = 0;
        while placed < RANDOM_ENEMIES {
            let index = rng.gen_range(0..BOARD_SIZE);
            if self.squares[index as usize] == Occupancy::Empty {
                self.squares[index as usize] = Occupancy::Enemy;
                placed += 1;
            }
        }
    }

    /// Marks a square as holding an enemy piece.
    ///
    /// # Panics
    ///
    /// Panics when the square is the moving piece's own.
    pub fn place_enemy(&mut self, square: Square) {
        assert_ne!(square, self.position, "enemy placed on the moving piece");
        self.squares[square as usize] = Occupancy::Enemy;
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn piece(&self) -> PieceKind {
        self.piece
    }

    /// The moving piece's current square.
    #[must_use]
    pub const fn position(&self) -> Square {
        self.position
    }

    /// What occupies the given square.
    #[must_use]
    pub const fn at(&self, square: Square) -> Occupancy {
        self.squares[square as usize]
    }

    /// All squares currently holding an enemy, scanned file-major (all of the
    /// a-file bottom to top, then the b-file and so on). Callers breaking
    /// distance ties rely on this order.
    #[must_use]
    pub fn enemies(&self) -> Vec<Square> {
        File::iter()
            .flat_map(|file| Rank::iter().map(move |rank| Square::new(file, rank)))
            .filter(|square| self.at(*square) == Occupancy::Enemy)
            .collect()
    }

    /// Moves the piece to the given square, capturing whatever occupied it.
    /// The old cell becomes empty; the remaining enemy set is re-derived from
    /// occupancy by the caller via [`Board::enemies`].
    pub fn advance(&mut self, to: Square) {
        self.squares[self.position as usize] = Occupancy::Empty;
        self.squares[to as usize] = Occupancy::Friendly;
        self.position = to;
    }
}

impl fmt::Display for Board {
    /// Renders the grid with rank 8 at the top and the a-file on the left:
    /// `[<letter>]` for the moving piece, `[x]` for an enemy and `[ ]` for an
    /// empty cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            for file in File::iter() {
                match self.at(Square::new(file, rank)) {
                    Occupancy::Friendly => write!(f, "[{}]", self.piece.letter()),
                    occupancy => write!(f, "[{occupancy}]"),
                }?;
            }
            if rank != Rank::One {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{self}")?;
        writeln!(f, "Piece: {} at {}", self.piece, self.position)?;
        write!(f, "Enemies: {:?}", self.enemies())
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn friendly_square_is_set() {
        let board = Board::new(PieceKind::Rook, Square::D3);
        assert_eq!(board.at(Square::D3), Occupancy::Friendly);
        assert_eq!(board.position(), Square::D3);
        assert_eq!(board.enemies(), vec![]);
    }

    #[test]
    fn random_enemies() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::with_random_enemies(PieceKind::Rook, Square::D3, &mut rng);
        let enemies = board.enemies();
        assert_eq!(enemies.len(), RANDOM_ENEMIES);
        assert!(!enemies.contains(&Square::D3));
        assert_eq!(board.at(Square::D3), Occupancy::Friendly);
    }

    #[test]
    fn rescatter_replaces_enemies() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::with_random_enemies(PieceKind::Rook, Square::D3, &mut rng);
        board.scatter_enemies(&mut rng);
        assert_eq!(board.enemies().len(), RANDOM_ENEMIES);
        assert_eq!(board.at(Square::D3), Occupancy::Friendly);
    }

    #[test]
    fn enemies_scan_is_file_major() {
        let mut board = Board::new(PieceKind::Queen, Square::H8);
        board.place_enemy(Square::B1);
        board.place_enemy(Square::A5);
        board.place_enemy(Square::A2);
        assert_eq!(
            board.enemies(),
            vec![Square::A2, Square::A5, Square::B1]
        );
    }

    #[test]
    fn advance_moves_the_friendly_cell() {
        let mut board = Board::new(PieceKind::King, Square::E4);
        board.place_enemy(Square::E5);
        board.advance(Square::E5);
        assert_eq!(board.position(), Square::E5);
        assert_eq!(board.at(Square::E5), Occupancy::Friendly);
        assert_eq!(board.at(Square::E4), Occupancy::Empty);
        assert_eq!(board.enemies(), vec![]);
    }

    #[test]
    fn render() {
        let mut board = Board::new(PieceKind::Knight, Square::A1);
        board.place_enemy(Square::C2);
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 8);
        // Rank 8 on top, rank 1 at the bottom.
        assert_eq!(lines[0], "[ ][ ][ ][ ][ ][ ][ ][ ]");
        assert_eq!(lines[6], "[ ][ ][x][ ][ ][ ][ ][ ]");
        assert_eq!(lines[7], "[N][ ][ ][ ][ ][ ][ ][ ]");
    }
}

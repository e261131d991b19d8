use foray::chess::board::{Board, RANDOM_ENEMIES};
use foray::chess::core::{Occupancy, PieceKind, Square};
use foray::chess::movegen::generate_moves;
use foray::search::path::PathFinder;
use foray::search::tour;
use foray::Error;
use itertools::Itertools;
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use strum::IntoEnumIterator;

fn board_with(piece: PieceKind, position: &str, enemies: &[&str]) -> Board {
    let mut board = Board::new(piece, Square::try_from(position).unwrap());
    for enemy in enemies {
        board.place_enemy(Square::try_from(*enemy).unwrap());
    }
    board
}

fn algebraic(squares: &[Square]) -> Vec<String> {
    squares.iter().map(ToString::to_string).collect()
}

#[test]
fn every_piece_moves_from_every_legal_square() {
    // Move generation is total: any piece on any square either yields moves
    // or fails with the single documented illegal position (pawn, rank 1).
    for piece in [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ] {
        for square in Square::iter() {
            let board = Board::new(piece, square);
            match generate_moves(&board, square) {
                Ok(moves) => {
                    assert!(moves.iter().all_unique(), "{piece} from {square}");
                    assert!(!moves.contains(&square), "{piece} from {square}");
                },
                Err(Error::IllegalPosition { kind, square: at }) => {
                    assert_eq!(kind, PieceKind::Pawn);
                    assert_eq!(at.rank(), foray::chess::core::Rank::One);
                },
                Err(other) => panic!("unexpected error: {other}"),
            }
        }
    }
}

#[test]
fn farthest_capture_scenario() {
    let targets = ["b2", "a5", "b5", "c5", "c4", "c3", "d3", "e3", "e4"];
    let board = board_with(PieceKind::Queen, "a1", &targets);

    assert_eq!(tour::farthest_target(&board), Some(Square::E4));

    let path = PathFinder::new(&board, Square::E4)
        .shortest_path(board.position())
        .unwrap();
    assert_eq!(algebraic(&path), vec!["a1", "h1", "e4"]);
}

#[test]
fn rook_tour_over_random_enemies() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut board = Board::with_random_enemies(PieceKind::Rook, Square::A1, &mut rng);
    let targets = board.enemies();
    assert_eq!(targets.len(), RANDOM_ENEMIES);

    let segments = tour::capture_all(&mut board).unwrap();

    // All enemies captured, piece ends on the last visited target.
    assert_eq!(board.enemies(), vec![]);
    let route: Vec<Square> = segments.concat();
    assert_eq!(route.last().copied(), Some(board.position()));
    for target in targets {
        assert!(route.contains(&target), "{target} should be visited");
        assert_eq!(board.at(target), Occupancy::Empty);
    }
}

#[test]
fn knight_tour_over_random_enemies() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut board = Board::with_random_enemies(PieceKind::Knight, Square::D4, &mut rng);
    let targets = board.enemies();

    let segments = tour::capture_all(&mut board).unwrap();

    let route: Vec<Square> = segments.concat();
    for target in targets {
        assert!(route.contains(&target));
    }
    assert_eq!(board.enemies(), vec![]);
}

#[test]
fn king_reaches_the_far_corner() {
    let mut board = board_with(PieceKind::King, "a1", &["h8"]);
    let mut rng = StdRng::seed_from_u64(0);
    let path = tour::capture_farthest(&mut board, &mut rng).unwrap();
    // Seven diagonal steps is optimal.
    assert_eq!(path.len(), 8);
    assert_eq!(path.first().copied(), Some(Square::A1));
    assert_eq!(path.last().copied(), Some(Square::H8));
}

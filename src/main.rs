//! Command-line front-end: parses the query, sets up a board and prints the
//! requested listing, path or tour.

use anyhow::Result;
use clap::Parser;
use foray::chess::board::Board;
use foray::chess::core::{PieceKind, Square};
use foray::chess::movegen::generate_moves;
use foray::search::tour;
use itertools::Itertools;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Name of the chess piece to move (pawn, rook, knight, bishop, queen or
    /// king).
    #[arg(long, value_parser = parse_piece)]
    piece: PieceKind,

    /// Starting square in algebraic notation, e.g. e4.
    #[arg(long, value_parser = parse_square)]
    square: Square,

    /// Place eight random enemy pieces at setup. Implied by the capture
    /// modes.
    #[arg(long)]
    enemies: bool,

    /// List the squares the piece can move to. This is the default mode.
    #[arg(long, group = "mode")]
    moves: bool,

    /// Show the fewest moves needed to capture the farthest enemy.
    #[arg(long, group = "mode")]
    capture_farthest: bool,

    /// Capture every enemy with a greedy nearest-first tour.
    #[arg(long, group = "mode")]
    capture_all: bool,

    /// Print the board after setup and after each tour segment.
    #[arg(long)]
    show_board: bool,
}

fn parse_piece(token: &str) -> Result<PieceKind, String> {
    PieceKind::try_from(token).map_err(|e| e.to_string())
}

fn parse_square(token: &str) -> Result<Square, String> {
    Square::try_from(token).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = rand::thread_rng();
    let wants_targets = args.enemies || args.capture_farthest || args.capture_all;
    let mut board = if wants_targets {
        Board::with_random_enemies(args.piece, args.square, &mut rng)
    } else {
        Board::new(args.piece, args.square)
    };
    if args.show_board {
        println!("{board}\n");
    }

    if args.moves || !(args.capture_farthest || args.capture_all) {
        let moves = generate_moves(&board, board.position())?;
        if moves.is_empty() {
            println!("No moves are available.");
        } else {
            println!("{}", moves.iter().join(" "));
        }
    } else if args.capture_farthest {
        let path = tour::capture_farthest(&mut board, &mut rng)?;
        print_steps(&path);
    } else {
        let mut replay = board.clone();
        let segments = tour::capture_all(&mut board)?;
        for segment in &segments {
            print_steps_from(replay.position(), segment);
            for step in segment {
                replay.advance(*step);
            }
            if args.show_board {
                println!("{replay}\n");
            }
        }
    }
    Ok(())
}

/// Prints a path as one `from - to` line per move.
fn print_steps(path: &[Square]) {
    for (from, to) in path.iter().tuple_windows() {
        println!("{from} - {to}");
    }
}

/// Prints a tour segment, which omits its starting square unless it is the
/// first one.
fn print_steps_from(position: Square, segment: &[Square]) {
    match segment.first() {
        Some(first) if *first != position => {
            println!("{position} - {first}");
            print_steps(segment);
        },
        _ => print_steps(segment),
    }
}

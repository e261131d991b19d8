//! Computes legal movement squares for a single chess piece on an otherwise
//! mostly-empty board and routes it to randomly placed enemies: a shortest
//! path (in piece-moves) to the farthest enemy, or a greedy tour visiting
//! them all.
//!
//! This is deliberately not a chess engine: there is no opponent, no check
//! detection and no game state beyond one piece and the enemies it hunts.

// Rustc lints.
#![warn(
    absolute_paths_not_starting_with_crate,
    keyword_idents,
    macro_use_extern_crate,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    unused_results,
    variant_size_differences
)]
// Rustdoc lints.
#![warn(
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls
)]
// Clippy lints.
#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::pedantic,
    clippy::nursery
)]

pub mod chess;
pub mod search;

mod error;
pub use error::Error;

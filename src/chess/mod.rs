//! Implementation of the board environment: primitives and notation, the
//! occupancy grid and move generation.

pub mod board;
pub mod core;
pub mod movegen;

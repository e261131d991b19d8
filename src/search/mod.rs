//! Routing over the implicit move graph: single-target shortest paths and
//! multi-target capture tours.

pub mod path;
pub mod tour;

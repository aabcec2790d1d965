//! Algorithms and parsing helpers shared by the daily solvers

pub mod connectivity;
pub mod disjoint_set;
pub mod dp_cache;
pub mod grid;
pub mod linear_system;
pub mod packing;
pub mod parse;
pub mod scanline;

//! Advent of Code 2025 solutions
//!
//! Every day under [`year_2025`] registers itself with the solver framework
//! through `AutoRegisterSolver`; linking this crate is enough for a
//! `RegistryBuilder` to find them. The reusable algorithms live in
//! [`utils`].

pub mod utils;
pub mod year_2025;

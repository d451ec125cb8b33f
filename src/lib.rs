//! State-space search over permutation cubes.

pub mod heuristic;
pub mod puzzle;
pub mod scramble;
pub mod solver;

pub use puzzle::{Move, PuzzleDef, State, Variant};
pub use scramble::{scramble, scramble_with_thread_rng};
pub use solver::{compare, SearchConfig, SearchStats, SolveReport, Strategy};

//! Iterative-deepening alpha-beta search: move ordering, quiescence,
//! transposition table and the static evaluator.

pub mod context;
pub mod eval;
pub mod ordering;
pub mod pesto;
pub mod picker;
pub mod search;
pub mod see;
pub mod tt;

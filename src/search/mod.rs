//! Search module for the Network agent
//!
//! Contains:
//! - Scoped apply/retract of moves on a shared board
//! - Fixed-depth negamax with alpha-beta pruning

pub mod alphabeta;
pub mod guard;

pub use alphabeta::{SearchResult, SearchStats, Searcher};
pub use guard::MoveGuard;

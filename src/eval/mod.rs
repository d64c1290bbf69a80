//! Evaluation module for Network positions
//!
//! Scores a board for one color: a completed network is a win or a loss,
//! anything else is judged by the connection-count differential.

pub mod heuristic;
pub mod scores;

pub use heuristic::evaluate;
pub use scores::Score;

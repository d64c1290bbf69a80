//! Heuristic evaluation of Network positions
//!
//! A finished network decides the game outright. Otherwise the only signal is
//! how well connected each color is: more sightlines between own chips means
//! more ways to complete a path and fewer ways for the opponent to cut it.

use crate::board::{Board, Color};

use super::scores::Score;

/// Evaluate the board from the perspective of `color`.
///
/// Returns `Score::WIN` if `color` has a network, `-Score::WIN` if the
/// opponent has one (own network checked first), otherwise the difference in
/// connection counts. Without a network the result is antisymmetric:
/// `evaluate(b, c) == -evaluate(b, c.opponent())`.
#[must_use]
pub fn evaluate(board: &Board, color: Color) -> i32 {
    let opponent = color.opponent();

    if board.success(color) {
        return Score::WIN;
    }
    if board.success(opponent) {
        return -Score::WIN;
    }

    connectivity(board, color) - connectivity(board, opponent)
}

/// Connection count of one color as a score term
#[inline]
fn connectivity(board: &Board, color: Color) -> i32 {
    board.connection_count(color) as i32
}

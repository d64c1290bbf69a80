//! Scoped move application
//!
//! `MoveGuard` applies a move when created and retracts it when dropped, so
//! every `apply_move` in the search is paired with exactly one
//! `retract_move` even on early return or cutoff.

use std::ops::{Deref, DerefMut};

use crate::board::{Board, Color, Move};
use crate::error::PlayResult;

/// A move applied to a borrowed board for the lifetime of the guard
pub struct MoveGuard<'a> {
    board: &'a mut Board,
    mv: Move,
    result: PlayResult,
}

impl<'a> MoveGuard<'a> {
    /// Apply `mv` for `color`. The move is retracted on drop whether or not
    /// it was accepted.
    pub fn new(board: &'a mut Board, mv: Move, color: Color) -> Self {
        let result = board.apply_move(mv, color);
        Self { board, mv, result }
    }

    #[inline]
    pub fn mv(&self) -> Move {
        self.mv
    }

    #[inline]
    pub fn result(&self) -> PlayResult {
        self.result
    }

    /// True if `apply_move` refused the move
    #[inline]
    pub fn is_rejected(&self) -> bool {
        self.result.is_err()
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.retract_move(self.mv);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    #[test]
    fn test_guard_retracts_on_drop() {
        let mut board = Board::new();
        let before = board.clone();
        {
            let guard = MoveGuard::new(&mut board, Move::Add { x: 3, y: 3 }, Color::Black);
            assert!(!guard.is_rejected());
            assert!(!guard.is_empty(Pos::new(3, 3)));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_rejected_guard_still_retracts() {
        let mut board = Board::new();
        let before = board.clone();
        {
            let guard = MoveGuard::new(&mut board, Move::Add { x: 0, y: 0 }, Color::White);
            assert!(guard.is_rejected());
            assert_eq!(guard.pending_moves(), 1);
        }
        assert_eq!(board, before);
        assert_eq!(board.pending_moves(), 0);
    }

    #[test]
    fn test_nested_guards() {
        let mut board = Board::new();
        let before = board.clone();
        {
            let mut outer = MoveGuard::new(&mut board, Move::Add { x: 2, y: 2 }, Color::Black);
            {
                let inner = MoveGuard::new(&mut outer, Move::Add { x: 2, y: 5 }, Color::Black);
                assert_eq!(inner.connection_count(Color::Black), 2);
            }
            assert_eq!(outer.chip_count(Color::Black), 1);
        }
        assert_eq!(board, before);
    }
}

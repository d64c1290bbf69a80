//! Move legality checks
//!
//! A chip may never be placed on a dead corner or in the opponent's goal
//! strips. Adds are limited to `MAX_CHIPS` per color. The two-neighbor rule is
//! not checked here; it needs the connectivity graph and is enforced when the
//! move is applied.

use crate::board::{Board, Cell, Color, GoalArea, Move, Pos, MAX_CHIPS};

/// Whether `color` may put a chip on `pos`: empty and outside the opponent's goal
#[inline]
pub fn is_legal_target(board: &Board, pos: Pos, color: Color) -> bool {
    board.is_empty(pos) && pos.goal_area(color.opponent()) == GoalArea::None
}

/// Check whether `mv` is legal for `color` on `board`
pub fn is_valid_move(board: &Board, color: Color, mv: Move) -> bool {
    let target_ok = || mv.target().is_some_and(|to| is_legal_target(board, to, color));
    match mv {
        Move::Quit => true,
        Move::Add { .. } => board.chip_count(color) < MAX_CHIPS && target_ok(),
        Move::Step { .. } => {
            mv.source()
                .is_some_and(|from| board.cell(from) == Cell::Occupied(color))
                && target_ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_on_empty_cell() {
        let board = Board::new();
        assert!(is_valid_move(&board, Color::Black, Move::Add { x: 3, y: 3 }));
        assert!(is_valid_move(&board, Color::White, Move::Add { x: 3, y: 3 }));
    }

    #[test]
    fn test_dead_corner_rejected() {
        let board = Board::new();
        assert!(!is_valid_move(&board, Color::Black, Move::Add { x: 0, y: 0 }));
        assert!(!is_valid_move(&board, Color::White, Move::Add { x: 7, y: 7 }));
    }

    #[test]
    fn test_opponent_goal_rejected() {
        let board = Board::new();
        // White's goal columns are off limits for black
        assert!(!is_valid_move(&board, Color::Black, Move::Add { x: 0, y: 3 }));
        assert!(!is_valid_move(&board, Color::Black, Move::Add { x: 7, y: 4 }));
        // Black's own goal rows are fine for black, not for white
        assert!(is_valid_move(&board, Color::Black, Move::Add { x: 3, y: 0 }));
        assert!(!is_valid_move(&board, Color::White, Move::Add { x: 3, y: 0 }));
        assert!(!is_valid_move(&board, Color::White, Move::Add { x: 4, y: 7 }));
        assert!(is_valid_move(&board, Color::White, Move::Add { x: 0, y: 4 }));
    }

    #[test]
    fn test_off_board_rejected() {
        let board = Board::new();
        assert!(!is_valid_move(&board, Color::Black, Move::Add { x: 8, y: 3 }));
        assert!(!is_valid_move(
            &board,
            Color::Black,
            Move::Step { x: 3, y: 3, from_x: 3, from_y: 9 }
        ));
    }

    #[test]
    fn test_occupied_rejected() {
        let mut board = Board::new();
        board.apply_move(Move::Add { x: 3, y: 3 }, Color::White).unwrap();
        board.commit();
        assert!(!is_valid_move(&board, Color::Black, Move::Add { x: 3, y: 3 }));
        assert!(!is_valid_move(&board, Color::White, Move::Add { x: 3, y: 3 }));
    }

    #[test]
    fn test_step_requires_own_source() {
        let mut board = Board::new();
        board.apply_move(Move::Add { x: 3, y: 3 }, Color::White).unwrap();
        board.commit();
        let step = Move::step(Pos::new(5, 5), Pos::new(3, 3));
        assert!(is_valid_move(&board, Color::White, step));
        assert!(!is_valid_move(&board, Color::Black, step));
        // Source is empty
        let step = Move::step(Pos::new(5, 5), Pos::new(2, 2));
        assert!(!is_valid_move(&board, Color::White, step));
        // Stepping onto itself is not a move
        let step = Move::step(Pos::new(3, 3), Pos::new(3, 3));
        assert!(!is_valid_move(&board, Color::White, step));
    }

    #[test]
    fn test_add_limited_to_ten_chips() {
        let mut board = Board::new();
        let cells = [(1, 1), (3, 1), (5, 1), (1, 3), (3, 3), (5, 3), (1, 5), (3, 5), (5, 5), (6, 6)];
        for (x, y) in cells {
            board.apply_move(Move::Add { x, y }, Color::Black).unwrap();
        }
        board.commit();
        assert_eq!(board.chip_count(Color::Black), MAX_CHIPS);
        assert!(!is_valid_move(&board, Color::Black, Move::Add { x: 2, y: 6 }));
        assert!(is_valid_move(
            &board,
            Color::Black,
            Move::step(Pos::new(2, 6), Pos::new(1, 1))
        ));
    }

    #[test]
    fn test_quit_always_valid() {
        assert!(is_valid_move(&Board::new(), Color::Black, Move::Quit));
    }
}

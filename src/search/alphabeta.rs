//! Alpha-beta search over a single mutable board
//!
//! Negamax with alpha-beta pruning to a fixed depth. Every candidate is
//! applied to the board through a [`MoveGuard`] and retracted when the guard
//! goes out of scope; the board is never copied.
//!
//! # Scoring
//!
//! - A move that completes a network scores `Score::WIN + depth` for the
//!   side that owns it, so quicker wins rank higher. The branch is not
//!   searched further.
//! - At the last ply the position is scored with [`evaluate`].
//! - A node where every candidate is rejected is scored with [`evaluate`].
//!
//! # Example
//!
//! ```
//! use network::board::{Board, Color};
//! use network::search::Searcher;
//!
//! let mut board = Board::new();
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&mut board, Color::White, 1);
//! assert!(result.best_move.is_some());
//! assert_eq!(board, Board::new());
//! ```

use log::{debug, trace};

use crate::board::{Board, Color, Move};
use crate::eval::{evaluate, Score};

use super::guard::MoveGuard;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
    /// Cutoffs on the first accepted move of a node
    pub first_move_cutoffs: u64,
    /// Moves refused by `apply_move` (two-neighbor rule)
    pub rejected: u64,
}

impl SearchStats {
    /// First-move cutoff rate in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.cutoffs as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found; `None` if every candidate was rejected
    pub best_move: Option<Move>,
    /// Score of the best move from the searching color's view
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Nodes visited
    pub nodes: u64,
    pub stats: SearchStats,
}

/// Fixed-depth alpha-beta searcher.
///
/// Holds only counters; the board is borrowed for the duration of a search
/// and handed back unchanged.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `depth` plies for the best move of `color`.
    ///
    /// Ties go to the first move in generation order. A depth of 0 is
    /// treated as 1. On return `board` is exactly as it was passed in.
    pub fn search(&mut self, board: &mut Board, color: Color, depth: u8) -> SearchResult {
        let depth = depth.max(1);
        self.nodes = 0;
        self.stats = SearchStats::default();
        let pending = board.pending_moves();

        let (best_move, score) = self.search_root(board, color, depth);
        debug_assert_eq!(board.pending_moves(), pending, "search left moves applied");

        debug!(
            "search {color} depth {depth}: best {} score {score} nodes {} cutoffs {} rejected {}",
            best_move.map_or_else(|| "none".to_string(), |mv| mv.to_string()),
            self.nodes,
            self.stats.cutoffs,
            self.stats.rejected,
        );

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Root node: same as `negamax` but remembers which move was best.
    fn search_root(&mut self, board: &mut Board, color: Color, depth: u8) -> (Option<Move>, i32) {
        self.nodes += 1;
        let mut alpha = -Score::INF;
        let mut best: Option<(Move, i32)> = None;

        for mv in board.generate_moves(color) {
            let Some(score) = self.score_move(board, mv, color, depth, alpha, Score::INF) else {
                continue;
            };
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
                alpha = alpha.max(score);
            }
        }

        match best {
            Some((mv, score)) => (Some(mv), score),
            None => (None, evaluate(board, color)),
        }
    }

    /// Score of the position for `color` to move, `depth` plies left.
    fn negamax(
        &mut self,
        board: &mut Board,
        color: Color,
        depth: u8,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        self.nodes += 1;
        let mut best = -Score::INF;
        let mut accepted = 0u32;

        for mv in board.generate_moves(color) {
            let Some(score) = self.score_move(board, mv, color, depth, alpha, beta) else {
                continue;
            };
            accepted += 1;
            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                self.stats.cutoffs += 1;
                if accepted == 1 {
                    self.stats.first_move_cutoffs += 1;
                }
                break;
            }
        }

        if accepted == 0 {
            return evaluate(board, color);
        }
        best
    }

    /// Apply `mv`, score the resulting position for `color`, retract.
    ///
    /// Returns `None` if the move was rejected.
    fn score_move(
        &mut self,
        board: &mut Board,
        mv: Move,
        color: Color,
        depth: u8,
        alpha: i32,
        beta: i32,
    ) -> Option<i32> {
        let mut guard = MoveGuard::new(board, mv, color);
        if guard.is_rejected() {
            self.stats.rejected += 1;
            trace!("{color} {mv} rejected");
            return None;
        }

        let win = Score::WIN + i32::from(depth);
        let score = if guard.success(color) {
            win
        } else if guard.success(color.opponent()) {
            -win
        } else if depth <= 1 {
            evaluate(&guard, color)
        } else {
            -self.negamax(&mut guard, color.opponent(), depth - 1, -beta, -alpha)
        };
        Some(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    fn board_with(moves: &[(Color, u8, u8)]) -> Board {
        let mut board = Board::new();
        for &(color, x, y) in moves {
            board.apply_move(Move::Add { x, y }, color).unwrap();
        }
        board.commit();
        board
    }

    /// Black is one chip short of (1,0) (1,2) (3,4) (3,6) (5,6) (5,7)
    fn one_move_from_network() -> Board {
        board_with(&[
            (Color::Black, 1, 0),
            (Color::Black, 1, 2),
            (Color::Black, 3, 4),
            (Color::Black, 3, 6),
            (Color::Black, 5, 6),
        ])
    }

    fn wins(board: &Board, mv: Move, color: Color) -> bool {
        let mut board = board.clone();
        board.apply_move(mv, color).is_ok() && board.success(color)
    }

    #[test]
    fn test_depth_one_finds_immediate_win() {
        let mut board = one_move_from_network();
        let result = Searcher::new().search(&mut board, Color::Black, 1);
        let mv = result.best_move.unwrap();
        assert!(wins(&board, mv, Color::Black), "{mv} does not win");
        assert_eq!(result.score, Score::WIN + 1);
    }

    #[test]
    fn test_depth_two_prefers_immediate_win() {
        let mut board = one_move_from_network();
        let result = Searcher::new().search(&mut board, Color::Black, 2);
        let mv = result.best_move.unwrap();
        assert!(wins(&board, mv, Color::Black), "{mv} does not win");
        assert_eq!(result.score, Score::WIN + 2);
    }

    #[test]
    fn test_search_leaves_board_unchanged() {
        let mut board = board_with(&[
            (Color::Black, 2, 2),
            (Color::Black, 2, 5),
            (Color::White, 4, 4),
            (Color::White, 1, 1),
        ]);
        let before = board.clone();
        let result = Searcher::new().search(&mut board, Color::White, 2);
        assert!(result.best_move.is_some());
        assert!(result.nodes > 1);
        assert_eq!(board, before);
        assert!(board.is_consistent());
    }

    #[test]
    fn test_rejected_moves_skipped() {
        // Cells around the (3,3)-(3,4) pair are off limits to black
        let mut board = board_with(&[(Color::Black, 3, 3), (Color::Black, 3, 4)]);
        let result = Searcher::new().search(&mut board, Color::Black, 1);
        assert!(result.stats.rejected >= 10);
        let mv = result.best_move.unwrap();
        let mut after = board.clone();
        assert!(after.apply_move(mv, Color::Black).is_ok());
    }

    #[test]
    fn test_depth_one_maximizes_connections() {
        // Empty board: any add scores zero, so the first generated move wins the tie
        let mut board = Board::new();
        let result = Searcher::new().search(&mut board, Color::White, 1);
        assert_eq!(result.best_move, Some(Move::add(Pos::new(0, 1))));
        assert_eq!(result.score, 0);

        // With one black chip, a second one that sees it scores 2
        let mut board = board_with(&[(Color::Black, 3, 3)]);
        let result = Searcher::new().search(&mut board, Color::Black, 1);
        assert_eq!(result.score, 2);
    }

    #[test]
    fn test_zero_depth_clamped() {
        let mut board = Board::new();
        let result = Searcher::new().search(&mut board, Color::Black, 0);
        assert_eq!(result.depth, 1);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn test_first_move_rate_without_cutoffs() {
        assert_eq!(SearchStats::default().first_move_rate(), 0.0);
    }
}

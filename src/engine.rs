//! The playing agent
//!
//! An [`Agent`] owns one persistent board and plays one color. External
//! callers (a referee, a network harness, the self-play binary) ask it for
//! moves and tell it what the opponent played; the board is only ever
//! mutated through validated, committed moves.
//!
//! # Example
//!
//! ```
//! use network::{Agent, Color, Move};
//!
//! let mut black = Agent::with_depth(Color::Black, 1);
//! assert!(black.record_opponent_move(Move::Add { x: 0, y: 3 }));
//!
//! let mv = black.propose_move().unwrap();
//! assert!(!black.board().is_empty(mv.target().unwrap()));
//! ```

use std::time::Instant;

use log::{debug, info};

use crate::board::{Board, Color, Move};
use crate::error::AgentError;
use crate::eval::Score;
use crate::search::{SearchStats, Searcher};

/// Search depth used when none is given.
///
/// Once chips are stepped a ply has up to 380 candidates and nothing is
/// cached between nodes.
pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

/// Agent settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentConfig {
    /// Plies searched per move; 0 is treated as 1
    pub search_depth: u8,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// The move that was chosen and committed
    pub best_move: Move,
    /// Search score of the move from the agent's view
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    pub stats: SearchStats,
}

/// A Network player with its own copy of the game.
#[derive(Debug)]
pub struct Agent {
    board: Board,
    color: Color,
    searcher: Searcher,
    config: AgentConfig,
}

impl Agent {
    /// Create an agent for `color` with the default search depth.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self::with_config(color, AgentConfig::default())
    }

    #[must_use]
    pub fn with_depth(color: Color, search_depth: u8) -> Self {
        Self::with_config(color, AgentConfig { search_depth })
    }

    #[must_use]
    pub fn with_config(color: Color, config: AgentConfig) -> Self {
        let mut agent = Self {
            board: Board::new(),
            color,
            searcher: Searcher::new(),
            config,
        };
        agent.set_search_depth(config.search_depth);
        agent
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn search_depth(&self) -> u8 {
        self.config.search_depth
    }

    pub fn set_search_depth(&mut self, depth: u8) {
        self.config.search_depth = depth.max(1);
    }

    /// Choose a move, play it on the agent's board and return it.
    pub fn propose_move(&mut self) -> Result<Move, AgentError> {
        self.propose_move_with_stats().map(|result| result.best_move)
    }

    /// Like [`Agent::propose_move`], also returning search statistics.
    ///
    /// Fails with `AgentError::NoLegalMove` when every candidate is
    /// rejected; the board is left unchanged in that case.
    pub fn propose_move_with_stats(&mut self) -> Result<MoveResult, AgentError> {
        let start = Instant::now();
        let color = self.color;
        let result = self
            .searcher
            .search(&mut self.board, color, self.config.search_depth);

        let Some(mv) = result.best_move else {
            debug!("{color} has no legal move");
            return Err(AgentError::NoLegalMove(color));
        };
        if let Err(err) = self.board.apply_move(mv, color) {
            self.board.retract_move(mv);
            return Err(err.into());
        }
        self.board.commit();
        debug_assert!(self.board.is_consistent());

        let time_ms = start.elapsed().as_millis() as u64;
        if Score::is_decisive(result.score) {
            debug!("{color} sees a forced network within {} plies", result.depth);
        }
        info!(
            "{color} plays {mv} (score {}, {} nodes, {time_ms} ms)",
            result.score, result.nodes
        );
        Ok(MoveResult {
            best_move: mv,
            score: result.score,
            depth: result.depth,
            time_ms,
            nodes: result.nodes,
            stats: result.stats,
        })
    }

    /// Play `mv` for the opponent. Returns false, with the board unchanged,
    /// if the move is not legal.
    pub fn record_opponent_move(&mut self, mv: Move) -> bool {
        self.play(mv, self.color.opponent())
    }

    /// Play `mv` for the agent's own color, bypassing the search.
    pub fn force_move(&mut self, mv: Move) -> bool {
        self.play(mv, self.color)
    }

    fn play(&mut self, mv: Move, color: Color) -> bool {
        match self.board.apply_move(mv, color) {
            Ok(()) => {
                self.board.commit();
                debug_assert!(self.board.is_consistent());
                true
            }
            Err(err) => {
                self.board.retract_move(mv);
                debug!("refused {mv} for {color}: {err}");
                false
            }
        }
    }
}

//! Network game engine
//!
//! A playing engine for Network, a connection game on an 8x8 board:
//! - Four dead corners; each color owns two opposite goal strips
//! - Ten chips per color, added one at a time, then stepped around
//! - No chip may have more than one adjacent chip of its own color
//! - A network of six or more chips joining both goal strips wins, as long
//!   as no three consecutive chips lie on one line
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Grid, per-color connectivity graphs, apply/retract
//! - [`rules`]: Move legality and network detection
//! - [`eval`]: Position evaluation
//! - [`search`]: Alpha-beta search over a single mutable board
//! - [`engine`]: The agent that external callers talk to
//!
//! # Quick Start
//!
//! ```
//! use network::{Agent, Color, Move};
//!
//! let mut white = Agent::with_depth(Color::White, 1);
//! let mut black = Agent::with_depth(Color::Black, 1);
//!
//! let mv = white.propose_move().unwrap();
//! assert!(black.record_opponent_move(mv));
//!
//! let reply = black.propose_move().unwrap();
//! assert!(white.record_opponent_move(reply));
//! assert_eq!(white.board(), black.board());
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Chip, Color, Move, MoveKind, Pos, BOARD_SIZE, MAX_CHIPS};
pub use engine::{Agent, AgentConfig, MoveResult, DEFAULT_SEARCH_DEPTH};
pub use error::{AgentError, MoveError, ParseMoveError};

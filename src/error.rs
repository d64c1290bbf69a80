//! Error types for the Network engine
//!
//! Rejections are ordinary values: the search treats them as pruned branches
//! and the agent reports them to its caller as `false`.

use thiserror::Error;

use crate::board::{Color, Move, Pos};

/// Why a move could not be applied
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Pre-validation failed: occupied or dead target, wrong source, or the
    /// opponent's goal area
    #[error("move {mv} is not legal for {color}")]
    Invalid { mv: Move, color: Color },

    /// The placed chip would end up with two immediate neighbors, or would
    /// become the second neighbor of a chip that already has one
    #[error("chip at {pos} would create a second immediate neighbor")]
    TwoNeighbors { pos: Pos },
}

/// Errors surfaced by the agent
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentError {
    /// Every generated move was rejected
    #[error("no legal move for {0}")]
    NoLegalMove(Color),

    /// The searched move was refused when committed
    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Errors from parsing the move text form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("empty move")]
    Empty,

    #[error("unknown move kind `{0}`")]
    UnknownKind(String),

    #[error("`{keyword}` does not take {found} coordinates")]
    WrongArity { keyword: String, found: usize },

    #[error("bad coordinate `{0}`")]
    BadCoordinate(String),
}

/// Result type alias for board operations
pub type PlayResult<T = ()> = Result<T, MoveError>;

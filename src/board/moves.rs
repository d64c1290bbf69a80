//! Moves exchanged between the engine and its callers
//!
//! The text form follows the classic harness notation: `[add x y]`,
//! `[step x1 y1 x2 y2]` (move the chip at `x2 y2` to `x1 y1`) and `[quit]`.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseMoveError;

use super::Pos;

/// Kind of a move, without its coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Add,
    Step,
    Quit,
}

/// A move by one player.
///
/// Coordinates are raw so that malformed moves from a harness can be
/// represented and then rejected by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Place a new chip at `(x, y)`
    Add { x: u8, y: u8 },
    /// Relocate the chip at `(from_x, from_y)` to `(x, y)`
    Step { x: u8, y: u8, from_x: u8, from_y: u8 },
    /// Resign; applying it leaves the board untouched
    Quit,
}

impl Move {
    #[inline]
    pub fn add(pos: Pos) -> Self {
        Move::Add { x: pos.x, y: pos.y }
    }

    #[inline]
    pub fn step(to: Pos, from: Pos) -> Self {
        Move::Step {
            x: to.x,
            y: to.y,
            from_x: from.x,
            from_y: from.y,
        }
    }

    pub fn kind(self) -> MoveKind {
        match self {
            Move::Add { .. } => MoveKind::Add,
            Move::Step { .. } => MoveKind::Step,
            Move::Quit => MoveKind::Quit,
        }
    }

    /// Destination cell, `None` for quit or off-board coordinates
    pub fn target(self) -> Option<Pos> {
        match self {
            Move::Add { x, y } | Move::Step { x, y, .. } => {
                Pos::try_new(i32::from(x), i32::from(y))
            }
            Move::Quit => None,
        }
    }

    /// Source cell of a step, `None` otherwise
    pub fn source(self) -> Option<Pos> {
        match self {
            Move::Step { from_x, from_y, .. } => Pos::try_new(i32::from(from_x), i32::from(from_y)),
            Move::Add { .. } | Move::Quit => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Add { x, y } => write!(f, "[add {x} {y}]"),
            Move::Step { x, y, from_x, from_y } => write!(f, "[step {x} {y} {from_x} {from_y}]"),
            Move::Quit => f.write_str("[quit]"),
        }
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(trimmed);
        let mut words = inner.split_whitespace();
        let keyword = words.next().ok_or(ParseMoveError::Empty)?;
        let coords = words
            .map(|w| w.parse::<u8>().map_err(|_| ParseMoveError::BadCoordinate(w.to_owned())))
            .collect::<Result<Vec<u8>, _>>()?;

        match (keyword.to_ascii_lowercase().as_str(), coords.as_slice()) {
            ("add", &[x, y]) => Ok(Move::Add { x, y }),
            ("step", &[x, y, from_x, from_y]) => Ok(Move::Step { x, y, from_x, from_y }),
            ("quit", &[]) => Ok(Move::Quit),
            ("add" | "step" | "quit", _) => Err(ParseMoveError::WrongArity {
                keyword: keyword.to_owned(),
                found: coords.len(),
            }),
            _ => Err(ParseMoveError::UnknownKind(keyword.to_owned())),
        }
    }
}

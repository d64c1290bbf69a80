//! Board representation for Network
//!
//! The board is an 8x8 grid with four dead corners. Each color keeps its own
//! connectivity graph, and every move is logged so it can be retracted exactly.

pub mod bitboard;
pub mod board;
pub mod effects;
pub mod graph;
pub mod grid;
pub mod move_gen;
pub mod moves;


use std::fmt;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;
pub use effects::{MoveEffect, MoveEffectLog};
pub use graph::{ConnectedChip, ConnectivityGraph};
pub use grid::{Cell, Grid};
pub use moves::{Move, MoveKind};

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// Chips available to each color
pub const MAX_CHIPS: usize = 10;

/// Minimum number of chips in a winning network
pub const MIN_NETWORK_LEN: usize = 6;

/// Chip colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Get opponent color
    #[inline]
    #[must_use]
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::Black => "black",
            Color::White => "white",
        })
    }
}

/// Membership of a cell in a color's goal strips.
///
/// Black's strips are the top row (start) and bottom row (end); white's are the
/// left column (start) and right column (end). Corners belong to neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoalArea {
    Start,
    End,
    None,
}

impl GoalArea {
    /// Numeric form: +1 for start, -1 for end, 0 otherwise
    #[inline]
    pub fn value(self) -> i8 {
        match self {
            GoalArea::Start => 1,
            GoalArea::End => -1,
            GoalArea::None => 0,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!(x < BOARD_SIZE as u8 && y < BOARD_SIZE as u8);
        Self { x, y }
    }

    /// Checked constructor for coordinates coming from outside the engine
    #[inline]
    pub fn try_new(x: i32, y: i32) -> Option<Self> {
        if Pos::is_valid(x, y) {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.y as usize * BOARD_SIZE + self.x as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            x: (idx % BOARD_SIZE) as u8,
            y: (idx / BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_SIZE as i32 && y >= 0 && y < BOARD_SIZE as i32
    }

    /// The four corner cells can never hold a chip
    #[inline]
    pub fn is_dead(self) -> bool {
        let edge = BOARD_SIZE as u8 - 1;
        (self.x == 0 || self.x == edge) && (self.y == 0 || self.y == edge)
    }

    /// Chebyshev distance between two positions
    #[inline]
    pub fn distance(self, other: Pos) -> u8 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Goal membership of this cell for `color`
    #[inline]
    pub fn goal_area(self, color: Color) -> GoalArea {
        if self.is_dead() {
            return GoalArea::None;
        }
        let edge = BOARD_SIZE as u8 - 1;
        let coord = match color {
            Color::Black => self.y,
            Color::White => self.x,
        };
        if coord == 0 {
            GoalArea::Start
        } else if coord == edge {
            GoalArea::End
        } else {
            GoalArea::None
        }
    }

    /// Unit step from `self` toward `other` if they share a row, column or diagonal
    pub fn direction_to(self, other: Pos) -> Option<(i8, i8)> {
        let dx = i16::from(other.x) - i16::from(self.x);
        let dy = i16::from(other.y) - i16::from(self.y);
        if (dx, dy) == (0, 0) || !(dx == 0 || dy == 0 || dx.abs() == dy.abs()) {
            return None;
        }
        Some((dx.signum() as i8, dy.signum() as i8))
    }

    /// True if `self` lies strictly between `a` and `b` on a straight line
    pub fn is_between(self, a: Pos, b: Pos) -> bool {
        match (a.direction_to(self), self.direction_to(b)) {
            (Some(first), Some(second)) => first == second,
            _ => false,
        }
    }

    /// Positions strictly between `self` and `other` when they are aligned
    pub fn cells_between(self, other: Pos) -> Option<Between> {
        let step = self.direction_to(other)?;
        Some(Between {
            next: self,
            end: other,
            step,
        })
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

/// Iterator over the cells strictly between two aligned positions
pub struct Between {
    next: Pos,
    end: Pos,
    step: (i8, i8),
}

impl Iterator for Between {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        let x = self.next.x as i8 + self.step.0;
        let y = self.next.y as i8 + self.step.1;
        let pos = Pos::new(x as u8, y as u8);
        if pos == self.end {
            return None;
        }
        self.next = pos;
        Some(pos)
    }
}

/// A chip on the board. Two chips are the same chip when they share a position.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Chip {
    pub pos: Pos,
    pub color: Color,
}

impl Chip {
    #[inline]
    pub fn new(x: u8, y: u8, color: Color) -> Self {
        Self {
            pos: Pos::new(x, y),
            color,
        }
    }

    #[inline]
    pub fn at(pos: Pos, color: Color) -> Self {
        Self { pos, color }
    }

    #[inline]
    pub fn goal_area(self) -> GoalArea {
        self.pos.goal_area(self.color)
    }
}

impl PartialEq for Chip {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl std::hash::Hash for Chip {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

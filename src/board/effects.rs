//! Side-effect log for move retraction
//!
//! Placing a chip can cut sightlines between other chips, and vacating a cell
//! in a step can open new ones. Those changes do not involve the moved chip,
//! so they are recorded here and replayed backwards on retraction.

use super::{Chip, Color, Move};

/// A connection between two chips that a move created or destroyed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEffect {
    pub a: Chip,
    pub b: Chip,
    pub created: bool,
}

impl MoveEffect {
    #[inline]
    pub fn created(a: Chip, b: Chip) -> Self {
        Self { a, b, created: true }
    }

    #[inline]
    pub fn destroyed(a: Chip, b: Chip) -> Self {
        Self {
            a,
            b,
            created: false,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.a.color
    }
}

/// Everything needed to undo one `apply_move`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub mv: Move,
    pub color: Color,
    /// Whether the chip landed on the target cell (false when rejected)
    pub placed: bool,
    /// Chip-list index the step source occupied before it was lifted
    pub source_index: Option<usize>,
    pub effects: Vec<MoveEffect>,
}

/// LIFO stack of frames, one per applied move
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveEffectLog {
    frames: Vec<Frame>,
}

impl MoveEffectLog {
    pub fn new() -> Self {
        Self {
            frames: Vec::with_capacity(16),
        }
    }

    #[inline]
    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Forget every frame; moves applied so far can no longer be retracted
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

//! Board state with incremental connectivity and exact move retraction

use std::fmt;

use crate::error::{MoveError, PlayResult};
use crate::rules;

use super::effects::Frame;
use super::{
    Bitboard, Cell, Chip, Color, ConnectivityGraph, Grid, Move, MoveEffect, MoveEffectLog, Pos,
};

/// Game board: occupancy grid plus one connectivity graph per color.
///
/// Every `apply_move` pushes a frame on the effect log, whether or not the
/// move was accepted, and must be matched by exactly one `retract_move` in
/// LIFO order. Search relies on this to explore moves on a single board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    black: ConnectivityGraph,
    white: ConnectivityGraph,
    log: MoveEffectLog,
}

impl Board {
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            black: ConnectivityGraph::new(Color::Black),
            white: ConnectivityGraph::new(Color::White),
            log: MoveEffectLog::new(),
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get cell state at position
    #[inline]
    pub fn cell(&self, pos: Pos) -> Cell {
        self.grid[pos]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.grid.is_empty(pos)
    }

    #[inline]
    pub fn graph(&self, color: Color) -> &ConnectivityGraph {
        match color {
            Color::Black => &self.black,
            Color::White => &self.white,
        }
    }

    #[inline]
    fn graph_mut(&mut self, color: Color) -> &mut ConnectivityGraph {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        }
    }

    /// Grid and one graph borrowed together
    #[inline]
    fn parts(&mut self, color: Color) -> (&Grid, &mut ConnectivityGraph) {
        let graph = match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        };
        (&self.grid, graph)
    }

    /// Chips of `color` currently on the board
    #[inline]
    pub fn chip_count(&self, color: Color) -> usize {
        self.graph(color).len()
    }

    /// Heuristic connectivity of a color (each connection counted twice)
    #[inline]
    pub fn connection_count(&self, color: Color) -> u32 {
        self.graph(color).connection_count()
    }

    /// Connections of the chip at `pos`, if any chip is there
    pub fn connections(&self, pos: Pos) -> Option<Bitboard> {
        let color = self.grid[pos].color()?;
        self.graph(color).get(pos).map(|c| c.connections())
    }

    /// Immediate neighbor of the chip at `pos`
    pub fn neighbor(&self, pos: Pos) -> Option<Pos> {
        let color = self.grid[pos].color()?;
        self.graph(color).get(pos).and_then(|c| c.neighbor())
    }

    /// Number of applied moves that have not been retracted or committed
    #[inline]
    pub fn pending_moves(&self) -> usize {
        self.log.len()
    }

    /// Check whether `mv` is legal for `color` before applying it
    #[inline]
    pub fn is_valid_move(&self, color: Color, mv: Move) -> bool {
        rules::is_valid_move(self, color, mv)
    }

    /// Apply a move for `color`.
    ///
    /// A frame is always pushed on the effect log, so `retract_move` must be
    /// called afterwards even if this returns an error. Moves failing
    /// `is_valid_move` leave the board untouched. On
    /// `MoveError::TwoNeighbors` the target cell is left empty; for a step
    /// the source chip stays lifted until the retraction puts it back.
    pub fn apply_move(&mut self, mv: Move, color: Color) -> PlayResult {
        let mut frame = Frame {
            mv,
            color,
            placed: false,
            source_index: None,
            effects: Vec::new(),
        };

        if !self.is_valid_move(color, mv) {
            self.log.push(frame);
            return Err(MoveError::Invalid { mv, color });
        }
        let Some(to) = mv.target() else {
            // Quit never touches the board
            self.log.push(frame);
            return Ok(());
        };
        let source = mv.source();

        // Lift the stepping chip; its own connections are rebuilt when it lands
        if let Some(from) = source {
            self.grid[from] = Cell::Empty;
            frame.source_index = self.graph_mut(color).remove_chip(from);
        }

        self.grid[to] = Cell::Occupied(color);
        let (grid, graph) = self.parts(color);
        if let Err(err) = graph.add_chip(Chip::at(to, color), grid) {
            self.grid[to] = Cell::Empty;
            self.log.push(frame);
            return Err(err);
        }
        frame.placed = true;

        self.cut_sightlines(to, &mut frame.effects);
        if let Some(from) = source {
            self.open_sightlines(from, &mut frame.effects);
        }
        self.log.push(frame);
        Ok(())
    }

    /// Drop every connection, of either color, that runs through `at`
    fn cut_sightlines(&mut self, at: Pos, effects: &mut Vec<MoveEffect>) {
        for color in [Color::Black, Color::White] {
            let blocked: Vec<(Pos, Pos)> = self
                .graph(color)
                .pairs()
                .filter(|&(a, b)| at.is_between(a, b))
                .collect();
            let graph = self.graph_mut(color);
            for (a, b) in blocked {
                graph.disconnect(a, b);
                effects.push(MoveEffect::destroyed(Chip::at(a, color), Chip::at(b, color)));
            }
        }
    }

    /// Connect chip pairs whose sightline ran through the vacated cell `from`
    fn open_sightlines(&mut self, from: Pos, effects: &mut Vec<MoveEffect>) {
        for color in [Color::Black, Color::White] {
            let graph = self.graph(color);
            let chips = graph.chips();
            let mut opened = Vec::new();
            for (i, a) in chips.iter().enumerate() {
                for b in &chips[i + 1..] {
                    let (a, b) = (a.pos(), b.pos());
                    if from.is_between(a, b)
                        && !graph.get(a).is_some_and(|c| c.is_connected_with(b))
                        && self.grid.sightline_clear(a, b)
                    {
                        opened.push((a, b));
                    }
                }
            }
            let graph = self.graph_mut(color);
            for (a, b) in opened {
                graph.connect(a, b);
                effects.push(MoveEffect::created(Chip::at(a, color), Chip::at(b, color)));
            }
        }
    }

    /// Undo the most recent `apply_move`, which must have been `mv`.
    pub fn retract_move(&mut self, mv: Move) {
        let frame = self.log.pop();
        debug_assert!(frame.is_some(), "retract of {mv} without a matching apply");
        let Some(frame) = frame else {
            return;
        };
        debug_assert_eq!(frame.mv, mv, "retract out of order");

        for effect in frame.effects.iter().rev() {
            let graph = self.graph_mut(effect.color());
            if effect.created {
                graph.disconnect(effect.a.pos, effect.b.pos);
            } else {
                graph.connect(effect.a.pos, effect.b.pos);
            }
        }

        let color = frame.color;
        if frame.placed {
            if let Some(to) = frame.mv.target() {
                self.grid[to] = Cell::Empty;
                self.graph_mut(color).remove_chip(to);
            }
        }

        if let (Some(index), Some(from)) = (frame.source_index, frame.mv.source()) {
            self.grid[from] = Cell::Occupied(color);
            let (grid, graph) = self.parts(color);
            graph.restore_chip(index, Chip::at(from, color), grid);
        }
    }

    /// Make every applied move permanent by dropping the effect log
    pub fn commit(&mut self) {
        self.log.clear();
    }

    /// Whether `color` has completed a network
    #[inline]
    pub fn success(&self, color: Color) -> bool {
        rules::has_network(self, color)
    }

    /// Winner after a move by `last_mover`; the mover's own network counts first
    pub fn winner(&self, last_mover: Color) -> Option<Color> {
        if self.success(last_mover) {
            Some(last_mover)
        } else if self.success(last_mover.opponent()) {
            Some(last_mover.opponent())
        } else {
            None
        }
    }

    /// Check the grid, both graphs and all sightlines agree.
    ///
    /// Intended for tests and debug assertions; it recomputes every sightline.
    pub fn is_consistent(&self) -> bool {
        for pos in Grid::positions() {
            let cell = self.grid[pos];
            if pos.is_dead() != (cell == Cell::Dead) {
                return false;
            }
            for color in [Color::Black, Color::White] {
                if (cell == Cell::Occupied(color)) != self.graph(color).contains(pos) {
                    return false;
                }
            }
        }

        for color in [Color::Black, Color::White] {
            let graph = self.graph(color);
            for chip in graph.chips() {
                let pos = chip.pos();
                let expected: Bitboard = graph
                    .chips()
                    .iter()
                    .map(|other| other.pos())
                    .filter(|&other| self.grid.sightline_clear(pos, other))
                    .collect();
                if chip.connections() != expected {
                    return false;
                }
                let mut adjacent = expected.iter_ones().filter(|&other| pos.distance(other) <= 1);
                if chip.neighbor() != adjacent.next() || adjacent.next().is_some() {
                    return false;
                }
            }
        }
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Diagnostic dump: `X` black, `O` white, `.` empty, `#` dead; y grows downward
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..super::BOARD_SIZE as u8 {
            for x in 0..super::BOARD_SIZE as u8 {
                let ch = match self.grid[Pos::new(x, y)] {
                    Cell::Occupied(Color::Black) => 'X',
                    Cell::Occupied(Color::White) => 'O',
                    Cell::Empty => '.',
                    Cell::Dead => '#',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

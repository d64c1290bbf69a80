//! Per-color connectivity graph
//!
//! Chips live in an arena (`Vec`) and refer to each other by position, never
//! by reference. Each chip records the same-color chips it has a clear
//! sightline to, plus at most one immediate neighbor (a connection at
//! Chebyshev distance 1).
//!
//! Goal-area chips are kept at the front of the list so network detection
//! meets them first.

use crate::error::{MoveError, PlayResult};

use super::{Bitboard, Chip, Color, GoalArea, Grid, Pos};

/// A chip together with its connectivity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedChip {
    pub chip: Chip,
    connections: Bitboard,
    neighbor: Option<Pos>,
}

impl ConnectedChip {
    #[inline]
    pub fn pos(&self) -> Pos {
        self.chip.pos
    }

    /// Positions of every chip this one can see
    #[inline]
    pub fn connections(&self) -> Bitboard {
        self.connections
    }

    #[inline]
    pub fn neighbor(&self) -> Option<Pos> {
        self.neighbor
    }

    #[inline]
    pub fn is_connected_with(&self, pos: Pos) -> bool {
        self.connections.get(pos)
    }

    #[inline]
    pub fn connection_count(&self) -> u32 {
        self.connections.count()
    }
}

/// Chips of one color and their connections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectivityGraph {
    color: Color,
    chips: Vec<ConnectedChip>,
}

impl ConnectivityGraph {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            chips: Vec::with_capacity(super::MAX_CHIPS),
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chips.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    /// Chips in list order (goal-area chips first)
    #[inline]
    pub fn chips(&self) -> &[ConnectedChip] {
        &self.chips
    }

    pub fn get(&self, pos: Pos) -> Option<&ConnectedChip> {
        self.chips.iter().find(|c| c.chip.pos == pos)
    }

    fn get_mut(&mut self, pos: Pos) -> Option<&mut ConnectedChip> {
        self.chips.iter_mut().find(|c| c.chip.pos == pos)
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.get(pos).is_some()
    }

    /// Whether two chips of this color could see each other on `grid`
    #[inline]
    pub fn sightline_clear(&self, grid: &Grid, a: Pos, b: Pos) -> bool {
        grid.sightline_clear(a, b)
    }

    /// Sum of per-chip connection counts (each connection counted at both ends)
    pub fn connection_count(&self) -> u32 {
        self.chips.iter().map(ConnectedChip::connection_count).sum()
    }

    /// Connections and adjacent chips a chip at `pos` would get on `grid`
    fn links(&self, pos: Pos, grid: &Grid) -> (Bitboard, Bitboard) {
        let mut connections = Bitboard::new();
        let mut adjacent = Bitboard::new();
        for other in &self.chips {
            let other_pos = other.chip.pos;
            if self.sightline_clear(grid, pos, other_pos) {
                connections.set(other_pos);
                if pos.distance(other_pos) <= 1 {
                    adjacent.set(other_pos);
                }
            }
        }
        (connections, adjacent)
    }

    /// Add a chip, connecting it to every chip it can see.
    ///
    /// All-or-nothing: if the chip would get two immediate neighbors, or would
    /// become a second neighbor of an existing chip, nothing is changed and
    /// `MoveError::TwoNeighbors` is returned.
    pub fn add_chip(&mut self, chip: Chip, grid: &Grid) -> PlayResult {
        debug_assert_eq!(chip.color, self.color);
        debug_assert!(!self.contains(chip.pos));

        let (connections, adjacent) = self.links(chip.pos, grid);
        if adjacent.count() > 1
            || adjacent
                .iter_ones()
                .any(|pos| self.get(pos).is_some_and(|c| c.neighbor.is_some()))
        {
            return Err(MoveError::TwoNeighbors { pos: chip.pos });
        }

        let index = if chip.goal_area() == GoalArea::None {
            self.chips.len()
        } else {
            0
        };
        self.link(index, chip, connections, adjacent.iter_ones().next());
        Ok(())
    }

    /// Put back a chip removed by `remove_chip` at its old list index.
    ///
    /// Connections are recomputed from `grid`; the caller guarantees the
    /// chip was legal there before.
    pub fn restore_chip(&mut self, index: usize, chip: Chip, grid: &Grid) {
        let (connections, adjacent) = self.links(chip.pos, grid);
        debug_assert!(adjacent.count() <= 1, "restored chip {} has two neighbors", chip.pos);
        self.link(index.min(self.chips.len()), chip, connections, adjacent.iter_ones().next());
    }

    fn link(&mut self, index: usize, chip: Chip, connections: Bitboard, neighbor: Option<Pos>) {
        let pos = chip.pos;
        for other in &mut self.chips {
            if connections.get(other.chip.pos) {
                other.connections.set(pos);
                if neighbor == Some(other.chip.pos) {
                    other.neighbor = Some(pos);
                }
            }
        }
        self.chips.insert(
            index,
            ConnectedChip {
                chip,
                connections,
                neighbor,
            },
        );
    }

    /// Remove the chip at `pos` and every connection that refers to it.
    ///
    /// Returns the list index it occupied so it can be restored in place.
    pub fn remove_chip(&mut self, pos: Pos) -> Option<usize> {
        let index = self.chips.iter().position(|c| c.chip.pos == pos)?;
        self.chips.remove(index);
        for other in &mut self.chips {
            other.connections.clear(pos);
            if other.neighbor == Some(pos) {
                other.neighbor = None;
            }
        }
        Some(index)
    }

    /// Add a mutual connection between two existing chips
    pub fn connect(&mut self, a: Pos, b: Pos) {
        let immediate = a.distance(b) <= 1;
        for (from, to) in [(a, b), (b, a)] {
            if let Some(chip) = self.get_mut(from) {
                chip.connections.set(to);
                if immediate {
                    debug_assert!(chip.neighbor.is_none());
                    chip.neighbor = Some(to);
                }
            }
        }
    }

    /// Drop the mutual connection between two chips
    pub fn disconnect(&mut self, a: Pos, b: Pos) {
        for (from, to) in [(a, b), (b, a)] {
            if let Some(chip) = self.get_mut(from) {
                chip.connections.clear(to);
                if chip.neighbor == Some(to) {
                    chip.neighbor = None;
                }
            }
        }
    }

    /// Every connected pair `(a, b)` with `a < b`
    pub fn pairs(&self) -> impl Iterator<Item = (Pos, Pos)> + '_ {
        self.chips.iter().flat_map(|c| {
            let a = c.chip.pos;
            c.connections.iter_ones().filter(move |&b| a < b).map(move |b| (a, b))
        })
    }
}

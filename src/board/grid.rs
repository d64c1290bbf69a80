//! Occupancy grid and sightline checks

use std::ops::{Index, IndexMut};

use super::{Color, Pos, BOARD_SIZE};

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Dead,
    Occupied(Color),
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Occupied(color) => Some(color),
            Cell::Empty | Cell::Dead => None,
        }
    }
}

/// 8x8 cell matrix, corners permanently dead
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Grid {
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        let edge = BOARD_SIZE - 1;
        for (x, y) in [(0, 0), (0, edge), (edge, 0), (edge, edge)] {
            cells[y][x] = Cell::Dead;
        }
        Self { cells }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self[pos].is_empty()
    }

    /// True iff `a` and `b` share a row, column or diagonal and every cell
    /// strictly between them is empty.
    pub fn sightline_clear(&self, a: Pos, b: Pos) -> bool {
        match a.cells_between(b) {
            Some(mut between) => between.all(|pos| self.is_empty(pos)),
            None => false,
        }
    }

    /// Iterate every cell in column-major order (x outer, y inner)
    pub fn positions() -> impl Iterator<Item = Pos> {
        (0..BOARD_SIZE as u8).flat_map(|x| (0..BOARD_SIZE as u8).map(move |y| Pos::new(x, y)))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Pos> for Grid {
    type Output = Cell;

    fn index(&self, pos: Pos) -> &Self::Output {
        &self.cells[pos.y as usize][pos.x as usize]
    }
}

impl IndexMut<Pos> for Grid {
    fn index_mut(&mut self, pos: Pos) -> &mut Self::Output {
        &mut self.cells[pos.y as usize][pos.x as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_dead() {
        let grid = Grid::new();
        assert_eq!(grid[Pos::new(0, 0)], Cell::Dead);
        assert_eq!(grid[Pos::new(7, 0)], Cell::Dead);
        assert_eq!(grid[Pos::new(0, 7)], Cell::Dead);
        assert_eq!(grid[Pos::new(7, 7)], Cell::Dead);
        assert_eq!(grid[Pos::new(1, 0)], Cell::Empty);
    }

    #[test]
    fn test_sightline_directions() {
        let grid = Grid::new();
        assert!(grid.sightline_clear(Pos::new(1, 1), Pos::new(1, 6)));
        assert!(grid.sightline_clear(Pos::new(1, 3), Pos::new(6, 3)));
        assert!(grid.sightline_clear(Pos::new(1, 1), Pos::new(5, 5)));
        assert!(grid.sightline_clear(Pos::new(6, 1), Pos::new(1, 6)));
        // Knight's move is not a line
        assert!(!grid.sightline_clear(Pos::new(1, 1), Pos::new(2, 3)));
    }

    #[test]
    fn test_sightline_blocked_by_either_color() {
        let mut grid = Grid::new();
        grid[Pos::new(3, 3)] = Cell::Occupied(Color::White);
        assert!(!grid.sightline_clear(Pos::new(1, 1), Pos::new(5, 5)));
        assert!(!grid.sightline_clear(Pos::new(3, 1), Pos::new(3, 5)));
        // Endpoints themselves are not checked
        assert!(grid.sightline_clear(Pos::new(3, 3), Pos::new(3, 6)));
    }

    #[test]
    fn test_adjacent_always_clear() {
        let grid = Grid::new();
        assert!(grid.sightline_clear(Pos::new(2, 2), Pos::new(3, 3)));
        assert!(grid.sightline_clear(Pos::new(2, 2), Pos::new(2, 3)));
    }

    #[test]
    fn test_positions_column_major() {
        let first: Vec<Pos> = Grid::positions().take(3).collect();
        assert_eq!(first, vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)]);
        assert_eq!(Grid::positions().count(), 64);
    }
}

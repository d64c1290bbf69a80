//! Win condition: a network
//!
//! A network is a path of at least six same-color chips that starts in the
//! color's start goal strip, ends in the opposite strip, hops between chips
//! along connections, never visits a chip twice and never passes through a
//! goal strip in between. No three consecutive chips may lie on one line.

use crate::board::{Board, Color, ConnectivityGraph, GoalArea, Pos, MAX_CHIPS, MIN_NETWORK_LEN};

/// Orientation of a segment between two aligned chips.
///
/// Vertical stands in for the infinite slope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slope {
    Horizontal,
    Vertical,
    Diagonal,
    AntiDiagonal,
}

impl Slope {
    /// Orientation of the segment from `a` to `b`
    pub fn between(a: Pos, b: Pos) -> Slope {
        let dx = i16::from(b.x) - i16::from(a.x);
        let dy = i16::from(b.y) - i16::from(a.y);
        if dx == 0 {
            Slope::Vertical
        } else if dy == 0 {
            Slope::Horizontal
        } else if (dx > 0) == (dy > 0) {
            Slope::Diagonal
        } else {
            Slope::AntiDiagonal
        }
    }
}

/// Check whether `color` has a network on `board`.
///
/// Depth-first search from every start-goal chip. Returns as soon as one
/// valid path is found.
pub fn has_network(board: &Board, color: Color) -> bool {
    let graph = board.graph(color);
    if graph.len() < MIN_NETWORK_LEN {
        return false;
    }

    let mut path = Vec::with_capacity(MAX_CHIPS);
    graph
        .chips()
        .iter()
        .filter(|c| c.chip.goal_area() == GoalArea::Start)
        .any(|start| {
            path.clear();
            path.push(start.pos());
            form_network(graph, &mut path)
        })
}

/// Extend `path` from its last chip; true once a valid network is found.
///
/// An end-goal chip closes the path and is checked immediately; if the
/// closed path is invalid the search backtracks and keeps trying. Goal
/// chips are never entered mid-path.
fn form_network(graph: &ConnectivityGraph, path: &mut Vec<Pos>) -> bool {
    let Some(current) = path.last().and_then(|&pos| graph.get(pos)) else {
        return false;
    };
    let color = graph.color();

    for next in current.connections().iter_ones() {
        match next.goal_area(color) {
            GoalArea::End => {
                path.push(next);
                if is_valid_network(path) {
                    return true;
                }
                path.pop();
            }
            GoalArea::None if !path.contains(&next) => {
                path.push(next);
                if form_network(graph, path) {
                    return true;
                }
                path.pop();
            }
            _ => {}
        }
    }
    false
}

/// Length and straight-triple check for a complete start-to-end path
pub fn is_valid_network(path: &[Pos]) -> bool {
    path.len() >= MIN_NETWORK_LEN
        && path
            .windows(3)
            .all(|w| Slope::between(w[0], w[1]) != Slope::between(w[1], w[2]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    fn board_with(color: Color, cells: &[(u8, u8)]) -> Board {
        let mut board = Board::new();
        for &(x, y) in cells {
            board
                .apply_move(Move::Add { x, y }, color)
                .expect("setup move rejected");
        }
        board.commit();
        board
    }

    /// Start (1,0), bends every hop, ends at (5,7)
    const BENT_PATH: [(u8, u8); 6] = [(1, 0), (1, 2), (3, 4), (3, 6), (5, 6), (5, 7)];

    fn positions(cells: &[(u8, u8)]) -> Vec<Pos> {
        cells.iter().map(|&(x, y)| Pos::new(x, y)).collect()
    }

    #[test]
    fn test_slope_categories() {
        let c = Pos::new(3, 3);
        assert_eq!(Slope::between(c, Pos::new(3, 6)), Slope::Vertical);
        assert_eq!(Slope::between(c, Pos::new(3, 1)), Slope::Vertical);
        assert_eq!(Slope::between(c, Pos::new(6, 3)), Slope::Horizontal);
        assert_eq!(Slope::between(c, Pos::new(5, 5)), Slope::Diagonal);
        assert_eq!(Slope::between(c, Pos::new(1, 1)), Slope::Diagonal);
        assert_eq!(Slope::between(c, Pos::new(5, 1)), Slope::AntiDiagonal);
    }

    #[test]
    fn test_valid_network_path() {
        assert!(is_valid_network(&positions(&BENT_PATH)));
    }

    #[test]
    fn test_short_path_invalid() {
        assert!(!is_valid_network(&positions(&BENT_PATH[1..])));
    }

    #[test]
    fn test_straight_triple_invalid() {
        // (1,2) -> (3,4) -> (4,5) is one diagonal
        let path = positions(&[(1, 0), (1, 2), (3, 4), (4, 5), (4, 6), (2, 7)]);
        assert!(!is_valid_network(&path));
    }

    #[test]
    fn test_black_network_detected() {
        let board = board_with(Color::Black, &BENT_PATH);
        assert!(has_network(&board, Color::Black));
        assert!(!has_network(&board, Color::White));
    }

    #[test]
    fn test_white_network_detected() {
        // Same shape mirrored across the diagonal
        let cells: Vec<(u8, u8)> = BENT_PATH.iter().map(|&(x, y)| (y, x)).collect();
        let board = board_with(Color::White, &cells);
        assert!(has_network(&board, Color::White));
    }

    #[test]
    fn test_five_chip_straight_line_not_network() {
        let board = board_with(Color::Black, &[(2, 0), (2, 2), (2, 4), (2, 6), (2, 7)]);
        assert!(!has_network(&board, Color::Black));
    }

    #[test]
    fn test_collinear_only_route_not_network() {
        // Chain (3,0) (3,2) (3,4) (5,4) (5,6) (4,7); white chips cut the
        // diagonal shortcuts, so the only route starts three in a column.
        let mut board = board_with(
            Color::Black,
            &[(3, 0), (3, 2), (3, 4), (5, 4), (5, 6), (4, 7)],
        );
        board.apply_move(Move::Add { x: 4, y: 3 }, Color::White).unwrap();
        board.apply_move(Move::Add { x: 4, y: 5 }, Color::White).unwrap();
        assert!(!has_network(&board, Color::Black));
    }

    #[test]
    fn test_blocked_connection_breaks_network() {
        let mut board = board_with(Color::Black, &BENT_PATH);
        assert!(has_network(&board, Color::Black));
        // White chip between (1,2) and (3,4)
        board.apply_move(Move::Add { x: 2, y: 3 }, Color::White).unwrap();
        assert!(!has_network(&board, Color::Black));
    }

    #[test]
    fn test_goal_chip_not_reentered_mid_path() {
        // (2,0) -> (4,0) -> (4,2) -> (6,4) -> (6,6) -> (5,7) bends at every
        // hop, but (4,0) is a start-goal chip and may only open a path.
        // Every path that avoids it has five chips.
        let board = board_with(
            Color::Black,
            &[(2, 0), (4, 0), (4, 2), (6, 4), (6, 6), (5, 7)],
        );
        assert!(!has_network(&board, Color::Black));
        assert!(is_valid_network(&positions(&[
            (2, 0),
            (4, 0),
            (4, 2),
            (6, 4),
            (6, 6),
            (5, 7)
        ])));
    }
}

//! Move generation
//!
//! Cells are scanned column-major (x outer, y inner). This order decides
//! which of several equally scored moves the search keeps.

use crate::rules::is_legal_target;

use super::{Board, Color, Grid, Move, MAX_CHIPS};

impl Board {
    /// Generate every candidate move for `color`.
    ///
    /// With fewer than `MAX_CHIPS` chips on the board this is one add per
    /// legal target. Otherwise it is one step per (legal target, own chip)
    /// pair, chips taken in list order. Two-neighbor violations are not
    /// filtered here; `apply_move` rejects them.
    #[must_use]
    pub fn generate_moves(&self, color: Color) -> Vec<Move> {
        let targets = Grid::positions().filter(|&pos| is_legal_target(self, pos, color));

        let chips = self.graph(color).chips();
        if chips.len() < MAX_CHIPS {
            return targets.map(Move::add).collect();
        }

        let mut moves = Vec::with_capacity(chips.len() * 48);
        for to in targets {
            moves.extend(chips.iter().map(|chip| Move::step(to, chip.pos())));
        }
        moves
    }
}

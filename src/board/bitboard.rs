//! Bitboard over the 64 cells of the board
//!
//! Used for connection sets: one bit per position, so set equality does not
//! depend on the order connections were made in.

use super::Pos;

/// One bit per cell, indexed by `Pos::to_index`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= 1u64 << pos.to_index();
    }

    /// Clear a bit at position
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.bits &= !(1u64 << pos.to_index());
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate over set bit positions in index order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u64,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;
        Some(Pos::from_index(idx))
    }
}

impl FromIterator<Pos> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Pos>>(iter: I) -> Self {
        let mut board = Bitboard::new();
        for pos in iter {
            board.set(pos);
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_clear_get() {
        let mut bb = Bitboard::new();
        bb.set(Pos::new(3, 4));
        bb.set(Pos::new(7, 6));
        assert!(bb.get(Pos::new(3, 4)));
        assert!(!bb.get(Pos::new(4, 3)));
        assert_eq!(bb.count(), 2);

        bb.clear(Pos::new(3, 4));
        assert!(!bb.get(Pos::new(3, 4)));
        assert_eq!(bb.count(), 1);
    }

    #[test]
    fn test_iter_ones_in_index_order() {
        let bb: Bitboard = [Pos::new(5, 5), Pos::new(1, 0), Pos::new(0, 1)]
            .into_iter()
            .collect();
        let positions: Vec<Pos> = bb.iter_ones().collect();
        assert_eq!(
            positions,
            vec![Pos::new(1, 0), Pos::new(0, 1), Pos::new(5, 5)]
        );
    }

    #[test]
    fn test_last_cell() {
        let mut bb = Bitboard::new();
        bb.set(Pos::new(7, 7));
        assert_eq!(bb.iter_ones().next(), Some(Pos::new(7, 7)));
        assert!(!bb.is_empty());
    }
}

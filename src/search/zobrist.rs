//! Zobrist hashing for position identification
//!
//! Zobrist hashing gives O(1) incremental fingerprint updates when placing
//! or removing stones, which is what makes the transposition table cheap to
//! key during search.
//!
//! The fingerprint covers occupied cells only; it does not encode the side
//! to move. Under strict turn alternation the occupancy count determines
//! the side to move, so every search context reading a given fingerprint
//! agrees on whose turn it is.
//!
//! # Example
//!
//! ```
//! use omok::board::{Board, Pos, Stone, FULL_BOARD_SIZE};
//! use omok::search::ZobristTable;
//!
//! let mut board = Board::new(FULL_BOARD_SIZE);
//! let zt = ZobristTable::new(board.cell_count());
//!
//! let empty = zt.hash(&board);
//! let pos = Pos::new(7, 7);
//! let idx = board.index(pos);
//!
//! board.place_stone(pos, Stone::Black);
//! assert_eq!(zt.toggle(empty, idx, Stone::Black), zt.hash(&board));
//!
//! // Toggling twice restores the original fingerprint
//! let placed = zt.toggle(empty, idx, Stone::Black);
//! assert_eq!(zt.toggle(placed, idx, Stone::Black), empty);
//! ```

use rand::Rng;

use crate::board::{Board, Stone};

/// Zobrist hash table: one random constant per (cell, color) pair.
///
/// Constants are drawn once at engine start and held for the engine's
/// lifetime; reproducibility across runs is neither required nor
/// guaranteed. Tests needing determinism use [`ZobristTable::from_rng`]
/// with a seeded generator.
pub struct ZobristTable {
    black: Vec<u64>,
    white: Vec<u64>,
}

impl ZobristTable {
    /// Create a table for `cells` cells with fresh random constants.
    #[must_use]
    pub fn new(cells: usize) -> Self {
        Self::from_rng(cells, &mut rand::thread_rng())
    }

    /// Create a table drawing its constants from the given generator.
    #[must_use]
    pub fn from_rng<R: Rng + ?Sized>(cells: usize, rng: &mut R) -> Self {
        Self {
            black: (0..cells).map(|_| rng.gen()).collect(),
            white: (0..cells).map(|_| rng.gen()).collect(),
        }
    }

    /// Compute the full fingerprint of a board position, O(cells).
    ///
    /// Used once per top-level decision; the search itself updates the
    /// fingerprint incrementally via [`ZobristTable::toggle`].
    #[must_use]
    pub fn hash(&self, board: &Board) -> u64 {
        debug_assert_eq!(board.cell_count(), self.black.len());

        let mut h = 0u64;
        if let Some(stones) = board.stones(Stone::Black) {
            for idx in stones.iter_ones() {
                h ^= self.black[idx];
            }
        }
        if let Some(stones) = board.stones(Stone::White) {
            for idx in stones.iter_ones() {
                h ^= self.white[idx];
            }
        }
        h
    }

    /// Toggle the constant for one (cell, color) pair into a fingerprint.
    ///
    /// XOR is its own inverse: applying the same toggle twice restores the
    /// input, so a place followed by an undo at the same cell is a no-op
    /// on the fingerprint.
    #[inline]
    #[must_use]
    pub fn toggle(&self, hash: u64, idx: usize, stone: Stone) -> u64 {
        debug_assert!(stone != Stone::Empty);
        match stone {
            Stone::Black => hash ^ self.black[idx],
            Stone::White => hash ^ self.white[idx],
            Stone::Empty => hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Pos, FULL_BOARD_SIZE};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded_table(board: &Board, seed: u64) -> ZobristTable {
        ZobristTable::from_rng(board.cell_count(), &mut ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn empty_board_hashes_to_zero() {
        let board = Board::new(FULL_BOARD_SIZE);
        let zt = seeded_table(&board, 7);
        assert_eq!(zt.hash(&board), 0);
    }

    #[test]
    fn toggle_is_self_inverse() {
        let board = Board::new(FULL_BOARD_SIZE);
        let zt = seeded_table(&board, 7);
        let idx = board.index(Pos::new(3, 11));

        let h = 0xDEAD_BEEF_u64;
        let toggled = zt.toggle(h, idx, Stone::White);
        assert_ne!(toggled, h);
        assert_eq!(zt.toggle(toggled, idx, Stone::White), h);
    }

    #[test]
    fn incremental_matches_full_recompute() {
        let mut board = Board::new(FULL_BOARD_SIZE);
        let zt = seeded_table(&board, 42);

        let mut h = zt.hash(&board);
        let moves = [
            (Pos::new(7, 7), Stone::Black),
            (Pos::new(7, 8), Stone::White),
            (Pos::new(8, 8), Stone::Black),
        ];
        for (pos, stone) in moves {
            board.place_stone(pos, stone);
            h = zt.toggle(h, board.index(pos), stone);
            assert_eq!(h, zt.hash(&board));
        }
    }

    #[test]
    fn hash_is_path_independent() {
        let mut board1 = Board::new(FULL_BOARD_SIZE);
        let mut board2 = Board::new(FULL_BOARD_SIZE);
        let zt = seeded_table(&board1, 99);

        board1.place_stone(Pos::new(9, 9), Stone::Black);
        board1.place_stone(Pos::new(10, 10), Stone::White);

        board2.place_stone(Pos::new(10, 10), Stone::White);
        board2.place_stone(Pos::new(9, 9), Stone::Black);

        assert_eq!(zt.hash(&board1), zt.hash(&board2));
    }

    #[test]
    fn same_cell_different_color_differs() {
        let mut board = Board::new(FULL_BOARD_SIZE);
        let zt = seeded_table(&board, 5);

        board.place_stone(Pos::new(4, 4), Stone::Black);
        let black_hash = zt.hash(&board);
        board.remove_stone(Pos::new(4, 4));
        board.place_stone(Pos::new(4, 4), Stone::White);
        assert_ne!(black_hash, zt.hash(&board));
    }

    #[test]
    fn seeded_tables_are_reproducible() {
        let mut board = Board::new(FULL_BOARD_SIZE);
        board.place_stone(Pos::new(2, 3), Stone::Black);

        let a = seeded_table(&board, 1234);
        let b = seeded_table(&board, 1234);
        assert_eq!(a.hash(&board), b.hash(&board));

        let c = seeded_table(&board, 4321);
        assert_ne!(a.hash(&board), c.hash(&board));
    }
}

//! Forced-move detection
//!
//! Before any tree search runs, the position is scanned for moves that
//! cannot wait: a cell that completes our own five, a cell the opponent
//! would win on next turn, or a cell that would hand the opponent an open
//! four. These override or reorder the heuristic candidate list.

use log::trace;

use crate::board::{Board, Pos, Stone};
use crate::eval::heuristic::line_window;
use crate::eval::patterns::{contains, OPEN_FOUR};
use crate::rules::{has_five_through, DIRECTIONS};

/// Severity of a forced move, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ThreatKind {
    /// Opponent would gain an open four here, block soon.
    BlockOpenFour,
    /// Opponent completes five here next turn, block now.
    BlockFive,
    /// Completes our own five; winning supersedes blocking.
    WinNow,
}

/// A move the position forces, with its severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForcedMove {
    pub pos: Pos,
    pub kind: ThreatKind,
}

/// Scan every empty cell for forced moves from `side`'s point of view.
///
/// An own winning completion aborts the scan and is returned as the single
/// entry; there is never a reason to look further. Otherwise the result
/// is the must-block cells, sorted by severity (stable, so scan order is
/// preserved within a severity). Every simulated placement is undone
/// before the function returns.
pub fn find_forced_moves(board: &mut Board, side: Stone) -> Vec<ForcedMove> {
    debug_assert!(side != Stone::Empty);

    let opponent = side.opponent();
    let mut forced = Vec::new();
    let size = board.size() as u8;

    for row in 0..size {
        for col in 0..size {
            let pos = Pos::new(row, col);
            if !board.is_empty_at(pos) {
                continue;
            }

            {
                let placed = board.place_scoped(pos, side);
                if has_five_through(&placed, pos, side) {
                    drop(placed);
                    trace!("winning completion at {pos}");
                    return vec![ForcedMove {
                        pos,
                        kind: ThreatKind::WinNow,
                    }];
                }
            }

            let placed = board.place_scoped(pos, opponent);
            if has_five_through(&placed, pos, opponent) {
                forced.push(ForcedMove {
                    pos,
                    kind: ThreatKind::BlockFive,
                });
            } else if creates_open_four(&placed, pos, opponent) {
                forced.push(ForcedMove {
                    pos,
                    kind: ThreatKind::BlockOpenFour,
                });
            }
        }
    }

    forced.sort_by(|a, b| b.kind.cmp(&a.kind));
    if !forced.is_empty() {
        trace!("{} must-block cells, top {}", forced.len(), forced[0].pos);
    }
    forced
}

/// Would a stone just placed at `pos` give `side` an open four?
fn creates_open_four(board: &Board, pos: Pos, side: Stone) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| contains(&line_window(board, pos, dr, dc, side), OPEN_FOUR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::FULL_BOARD_SIZE;

    #[test]
    fn own_win_returned_alone() {
        let mut board = Board::new(FULL_BOARD_SIZE);
        for col in 3..7u8 {
            board.place_stone(Pos::new(7, col), Stone::Black);
        }
        // White threats elsewhere must be ignored once a win exists
        for col in 9..13u8 {
            board.place_stone(Pos::new(9, col), Stone::White);
        }

        let forced = find_forced_moves(&mut board, Stone::Black);
        assert_eq!(forced.len(), 1);
        assert_eq!(forced[0].kind, ThreatKind::WinNow);
        assert!(forced[0].pos == Pos::new(7, 2) || forced[0].pos == Pos::new(7, 7));
    }

    #[test]
    fn open_four_must_be_blocked_on_both_ends() {
        let mut board = Board::new(FULL_BOARD_SIZE);
        for col in 3..7u8 {
            board.place_stone(Pos::new(7, col), Stone::Black);
        }

        let forced = find_forced_moves(&mut board, Stone::White);
        let cells: Vec<Pos> = forced
            .iter()
            .filter(|f| f.kind == ThreatKind::BlockFive)
            .map(|f| f.pos)
            .collect();
        assert_eq!(cells, vec![Pos::new(7, 2), Pos::new(7, 7)]);
    }

    #[test]
    fn open_three_extension_flagged() {
        let mut board = Board::new(FULL_BOARD_SIZE);
        for col in 4..7u8 {
            board.place_stone(Pos::new(7, col), Stone::Black);
        }

        let forced = find_forced_moves(&mut board, Stone::White);
        let open_four_blocks: Vec<Pos> = forced
            .iter()
            .filter(|f| f.kind == ThreatKind::BlockOpenFour)
            .map(|f| f.pos)
            .collect();
        assert!(open_four_blocks.contains(&Pos::new(7, 3)));
        assert!(open_four_blocks.contains(&Pos::new(7, 7)));
        assert!(forced.iter().all(|f| f.kind != ThreatKind::BlockFive));
    }

    #[test]
    fn five_blocks_sort_ahead_of_open_four_blocks() {
        let mut board = Board::new(FULL_BOARD_SIZE);
        // Open three high on the board, four-in-a-row lower down
        for col in 4..7u8 {
            board.place_stone(Pos::new(2, col), Stone::Black);
        }
        for col in 3..7u8 {
            board.place_stone(Pos::new(11, col), Stone::Black);
        }

        let forced = find_forced_moves(&mut board, Stone::White);
        assert!(!forced.is_empty());
        assert_eq!(forced[0].kind, ThreatKind::BlockFive);
        assert!(forced.iter().any(|f| f.kind == ThreatKind::BlockOpenFour));
        let first_open_four = forced
            .iter()
            .position(|f| f.kind == ThreatKind::BlockOpenFour)
            .unwrap();
        let last_five = forced
            .iter()
            .rposition(|f| f.kind == ThreatKind::BlockFive)
            .unwrap();
        assert!(last_five < first_open_four);
    }

    #[test]
    fn quiet_position_yields_nothing() {
        let mut board = Board::new(FULL_BOARD_SIZE);
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(8, 8), Stone::White);
        assert!(find_forced_moves(&mut board, Stone::Black).is_empty());
    }

    #[test]
    fn scan_leaves_board_untouched() {
        let mut board = Board::new(FULL_BOARD_SIZE);
        for col in 3..7u8 {
            board.place_stone(Pos::new(7, col), Stone::Black);
        }
        let before = board.clone();
        let _ = find_forced_moves(&mut board, Stone::White);
        assert_eq!(board, before);
    }
}

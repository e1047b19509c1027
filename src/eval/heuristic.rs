//! Point evaluation over line windows
//!
//! This is the heuristic the search leans on everywhere: candidate ranking,
//! leaf evaluation, and threat confirmation all reduce to scoring the four
//! lines through a single cell.

use crate::board::{Board, Pos, Stone};
use crate::rules::DIRECTIONS;

use super::patterns::{score_window, LineCell};

/// Cells per extracted line window (4 to each side of the query cell).
pub const WINDOW_LEN: usize = 9;

/// Half-width of the window.
const WINDOW_HALF: i32 = 4;

/// Weight per Manhattan step toward the board center.
const POSITION_WEIGHT: i64 = 10;

/// Extract the line window through `pos` along `(dr, dc)`, tagged relative
/// to `side`. Out-of-bounds cells become [`LineCell::Edge`].
pub fn line_window(
    board: &Board,
    pos: Pos,
    dr: i32,
    dc: i32,
    side: Stone,
) -> [LineCell; WINDOW_LEN] {
    debug_assert!(side != Stone::Empty);

    let mut window = [LineCell::Edge; WINDOW_LEN];
    for (slot, offset) in (-WINDOW_HALF..=WINDOW_HALF).enumerate() {
        let r = i32::from(pos.row) + offset * dr;
        let c = i32::from(pos.col) + offset * dc;
        if board.in_bounds(r, c) {
            window[slot] = match board.get(Pos::new(r as u8, c as u8)) {
                Stone::Empty => LineCell::Empty,
                s if s == side => LineCell::Own,
                _ => LineCell::Foe,
            };
        }
    }
    window
}

/// Swap the `Own`/`Foe` tags of a window, giving the opposing perspective
/// without re-reading the board.
fn flipped(window: &[LineCell; WINDOW_LEN]) -> [LineCell; WINDOW_LEN] {
    let mut out = *window;
    for cell in &mut out {
        *cell = match *cell {
            LineCell::Own => LineCell::Foe,
            LineCell::Foe => LineCell::Own,
            other => other,
        };
    }
    out
}

/// Score a single cell for `side`.
///
/// Sums shape classifications over the four lines through the cell for both
/// sides, weighting the opponent's shapes by `defense_percent / 100` so the
/// engine favors cells that block as well as build. A center-proximity
/// bonus breaks ties between otherwise quiet cells. Pure function of the
/// board snapshot; works on empty cells (prospective moves) and occupied
/// cells (leaf evaluation) alike.
pub fn evaluate_point(board: &Board, pos: Pos, side: Stone, defense_percent: i64) -> i64 {
    let mut score = center_bonus(board, pos);

    for &(dr, dc) in &DIRECTIONS {
        let own_view = line_window(board, pos, dr, dc, side);
        score += score_window(&own_view);
        score += score_window(&flipped(&own_view)) * defense_percent / 100;
    }

    score
}

/// Bonus for proximity to the board center, where stones reach the most
/// lines.
fn center_bonus(board: &Board, pos: Pos) -> i64 {
    let center = (board.size() / 2) as i32;
    let dist = (i32::from(pos.row) - center).abs() + (i32::from(pos.col) - center).abs();
    (board.size() as i64 - 1 - i64::from(dist)) * POSITION_WEIGHT
}

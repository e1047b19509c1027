//! Shape weights and line-pattern matching
//!
//! A line through a cell is reduced to a window of [`LineCell`] tags and
//! classified against fixed shape patterns by direct element comparison.
//! Patterns are expressed from the perspective of the evaluated side
//! (`Own`/`Empty` only): an opponent stone or the board edge never equals
//! either tag, so blocked and out-of-bounds cells fail pattern positions
//! exactly like a blocking stone would.

/// One cell of an extracted line window, relative to the evaluated side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCell {
    /// Playable empty cell
    Empty,
    /// Stone of the evaluated side
    Own,
    /// Stone of the opposing side
    Foe,
    /// Out-of-bounds sentinel, distinct from every other tag
    Edge,
}

use LineCell::{Empty as E, Own as O};

/// Shape scores for evaluation
///
/// The absolute values come from the tuned table of the original engine;
/// what matters for move choice is the ordering between tiers.
pub struct ShapeScore;

impl ShapeScore {
    /// Five in a row - immediate win
    pub const FIVE: i64 = 100_000_000;
    /// Open four: `_OOOO_` (unstoppable next move)
    pub const OPEN_FOUR: i64 = 10_000_000;
    /// Rush four: completable to five from one end or via one gap
    pub const RUSH_FOUR: i64 = 5_000_000;
    /// Open three: both extension ends open
    pub const OPEN_THREE: i64 = 500_000;
    /// Closed three: one side blocked
    pub const CLOSED_THREE: i64 = 50_000;
    /// Open two
    pub const OPEN_TWO: i64 = 10_000;
    /// Closed two
    pub const CLOSED_TWO: i64 = 1_000;
    /// Overline penalty: six or more in a row is not a stronger win
    pub const OVERLINE: i64 = -100_000;
}

/// Five in a row.
pub const FIVE: &[LineCell] = &[O, O, O, O, O];

/// Six in a row (overline).
pub const OVERLINE: &[LineCell] = &[O, O, O, O, O, O];

/// Open four: both ends playable.
pub const OPEN_FOUR: &[LineCell] = &[E, O, O, O, O, E];

/// Rush fours: four stones completable from exactly one end, or through a
/// single internal gap.
pub const RUSH_FOURS: [&[LineCell]; 5] = [
    &[O, O, O, O, E],
    &[E, O, O, O, O],
    &[O, O, E, O, O],
    &[O, E, O, O, O],
    &[O, O, O, E, O],
];

/// Open threes, contiguous or with one internal gap.
pub const OPEN_THREES: [&[LineCell]; 3] = [
    &[E, O, O, O, E],
    &[E, O, E, O, O, E],
    &[E, O, O, E, O, E],
];

/// Closed threes: three stones with a single growth direction left.
pub const CLOSED_THREES: [&[LineCell]; 4] = [
    &[O, O, O, E],
    &[E, O, O, O],
    &[O, E, O, O],
    &[O, O, E, O],
];

/// Open twos.
pub const OPEN_TWOS: [&[LineCell]; 3] = [
    &[E, E, O, O, E],
    &[E, O, O, E, E],
    &[E, O, E, O, E],
];

/// Closed twos.
pub const CLOSED_TWOS: [&[LineCell]; 6] = [
    &[O, O, E, E, E],
    &[E, E, E, O, O],
    &[O, E, O, E, E],
    &[E, E, O, E, O],
    &[O, E, E, O, E],
    &[E, O, E, E, O],
];

/// Check whether `window` contains `pattern` as a contiguous sub-slice.
#[inline]
pub fn contains(window: &[LineCell], pattern: &[LineCell]) -> bool {
    window.len() >= pattern.len() && window.windows(pattern.len()).any(|w| w == pattern)
}

/// Classify a line window and return its accumulated shape score.
///
/// An overline short-circuits at its penalty, a five at
/// [`ShapeScore::FIVE`]; below those, every shape variant present adds its
/// class weight once. Scores are never clamped.
pub fn score_window(window: &[LineCell]) -> i64 {
    // Overline first: a six-run contains a five-run, so checking five first
    // would count the overline as a win and the penalty would never apply.
    if contains(window, OVERLINE) {
        return ShapeScore::OVERLINE;
    }
    if contains(window, FIVE) {
        return ShapeScore::FIVE;
    }

    let mut score = 0i64;

    if contains(window, OPEN_FOUR) {
        score += ShapeScore::OPEN_FOUR;
    }
    for pattern in RUSH_FOURS {
        if contains(window, pattern) {
            score += ShapeScore::RUSH_FOUR;
        }
    }
    for pattern in OPEN_THREES {
        if contains(window, pattern) {
            score += ShapeScore::OPEN_THREE;
        }
    }
    for pattern in CLOSED_THREES {
        if contains(window, pattern) {
            score += ShapeScore::CLOSED_THREE;
        }
    }
    for pattern in OPEN_TWOS {
        if contains(window, pattern) {
            score += ShapeScore::OPEN_TWO;
        }
    }
    for pattern in CLOSED_TWOS {
        if contains(window, pattern) {
            score += ShapeScore::CLOSED_TWO;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use LineCell::{Edge, Foe as F};

    #[test]
    fn score_hierarchy() {
        assert!(ShapeScore::FIVE > ShapeScore::OPEN_FOUR);
        assert!(ShapeScore::OPEN_FOUR > ShapeScore::RUSH_FOUR);
        assert!(ShapeScore::RUSH_FOUR > ShapeScore::OPEN_THREE);
        assert!(ShapeScore::OPEN_THREE > ShapeScore::CLOSED_THREE);
        assert!(ShapeScore::CLOSED_THREE > ShapeScore::OPEN_TWO);
        assert!(ShapeScore::OPEN_TWO > ShapeScore::CLOSED_TWO);
        assert!(ShapeScore::OVERLINE < 0);
    }

    #[test]
    fn five_short_circuits() {
        let window = [E, O, O, O, O, O, E, E, E];
        assert_eq!(score_window(&window), ShapeScore::FIVE);
    }

    #[test]
    fn open_four_detected() {
        let window = [F, E, E, O, O, O, O, E, F];
        let score = score_window(&window);
        assert!(score >= ShapeScore::OPEN_FOUR);
        assert!(score < ShapeScore::FIVE);
    }

    #[test]
    fn gap_rush_four_detected() {
        // OO_OO: filling the middle gap completes five
        let window = [F, F, O, O, E, O, O, F, F];
        let score = score_window(&window);
        assert!(score >= ShapeScore::RUSH_FOUR);
        assert!(score < ShapeScore::OPEN_FOUR);
    }

    #[test]
    fn edge_blocks_like_a_stone() {
        // Edge-OOOO-Empty is a rush four, not an open four
        let window = [Edge, Edge, Edge, Edge, O, O, O, O, E];
        let score = score_window(&window);
        assert!(score >= ShapeScore::RUSH_FOUR);
        assert!(score < ShapeScore::OPEN_FOUR);
    }

    #[test]
    fn open_three_outranks_closed_three() {
        let open = [F, F, E, O, O, O, E, F, F];
        let closed = [F, F, F, O, O, O, E, F, F];
        assert!(score_window(&open) > score_window(&closed));
        assert!(score_window(&closed) >= ShapeScore::CLOSED_THREE);
    }

    #[test]
    fn overline_is_not_a_five() {
        let overline = [E, O, O, O, O, O, O, E, E];
        assert_eq!(score_window(&overline), ShapeScore::OVERLINE);

        let exact_five = [F, O, O, O, O, O, F, E, E];
        assert_eq!(score_window(&exact_five), ShapeScore::FIVE);
    }

    #[test]
    fn empty_window_scores_zero() {
        let window = [E; 9];
        assert_eq!(score_window(&window), 0);
    }

    #[test]
    fn contains_respects_order() {
        let window = [O, E, O, E, E];
        assert!(contains(&window, &[O, E, O]));
        assert!(!contains(&window, &[O, O]));
    }
}

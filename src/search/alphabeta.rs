//! Minimax search with alpha-beta pruning and transposition table
//!
//! The search is a synchronous, single-threaded recursion over the board:
//! one call to [`Searcher::best_move`] runs to completion at its configured
//! depth. The board is mutated in place through scoped placement guards and
//! is fully restored on every exit path, so the caller's position is intact
//! when the decision returns.
//!
//! # Example
//!
//! ```
//! use omok::board::{Board, Pos, Stone, FULL_BOARD_SIZE};
//! use omok::config::EngineConfig;
//! use omok::search::{Searcher, TranspositionTable, ZobristTable};
//!
//! let config = EngineConfig::default();
//! let mut board = Board::new(FULL_BOARD_SIZE);
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let zobrist = ZobristTable::new(board.cell_count());
//! let mut tt = TranspositionTable::new();
//! let mut searcher = Searcher::new(&zobrist, &mut tt, &config, Stone::White);
//!
//! let (pos, _score) = searcher.best_move(&mut board, 1).unwrap();
//! assert!(board.is_empty_at(pos));
//! ```

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::eval::{evaluate_point, ShapeScore};
use crate::rules::has_five_through;

use super::candidates::candidates;
use super::threat::{find_forced_moves, ForcedMove, ThreatKind};
use super::tt::TranspositionTable;
use super::zobrist::ZobristTable;

/// Alpha-beta window bound. Leaf evaluations sum per-cell scores and can
/// exceed the FIVE weight, so the sentinel sits far above any reachable
/// score rather than at `FIVE + 1`.
pub const INFINITY: i64 = i64::MAX / 2;

/// One search, bound to an engine side and borrowing the engine's shared
/// tables for its duration.
pub struct Searcher<'a> {
    zobrist: &'a ZobristTable,
    tt: &'a mut TranspositionTable,
    config: &'a EngineConfig,
    engine_side: Stone,
    nodes: u64,
}

impl<'a> Searcher<'a> {
    pub fn new(
        zobrist: &'a ZobristTable,
        tt: &'a mut TranspositionTable,
        config: &'a EngineConfig,
        engine_side: Stone,
    ) -> Self {
        debug_assert!(engine_side != Stone::Empty);
        Self {
            zobrist,
            tt,
            config,
            engine_side,
            nodes: 0,
        }
    }

    /// Nodes visited by this searcher so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Top-level decision: pick the best move for the engine side.
    ///
    /// Forced wins short-circuit the search entirely; an opponent five
    /// threat restricts the root to the blocking cells. Otherwise every
    /// root candidate is simulated and scored one recursion level in, and
    /// the first-seen maximum wins ties. Returns `None` only when there is
    /// no legal candidate at all (full board).
    pub fn best_move(&mut self, board: &mut Board, depth: u8) -> Option<(Pos, i64)> {
        let depth = depth.max(1);
        let side = self.engine_side;

        let forced = find_forced_moves(board, side);
        if let Some(win) = forced.first().filter(|f| f.kind == ThreatKind::WinNow) {
            return Some((win.pos, ShapeScore::FIVE));
        }

        let moves = self.root_moves(board, depth, &forced);
        if moves.is_empty() {
            return None;
        }

        let hash = self.zobrist.hash(board);
        let mut best: Option<(Pos, i64)> = None;
        let mut best_score = -INFINITY;

        for pos in moves.iter().copied() {
            let idx = board.index(pos);
            let mut placed = board.place_scoped(pos, side);

            // Winning moves are never searched deeper than necessary
            if has_five_through(&placed, pos, side) {
                return Some((pos, ShapeScore::FIVE));
            }

            let child_hash = self.zobrist.toggle(hash, idx, side);
            let score = self.minimax(&mut placed, depth - 1, -INFINITY, INFINITY, false, child_hash);
            drop(placed);

            if score > best_score {
                best_score = score;
                best = Some((pos, score));
            }
        }

        // Even an all-losing position still requires a legal move
        best.or_else(|| moves.first().map(|&pos| (pos, best_score)))
    }

    /// Recursive minimax with alpha-beta pruning.
    ///
    /// The transposition check precedes terminal expansion; a cached score
    /// is trusted only at sufficient depth (and only under the accepted
    /// assumption that fingerprints do not collide across distinct
    /// reachable positions).
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
        hash: u64,
    ) -> i64 {
        self.nodes += 1;

        if self.config.use_transposition {
            if let Some(score) = self.tt.probe(hash, depth) {
                return score;
            }
        }

        if depth == 0 {
            return self.evaluate_leaf(board);
        }

        let mover = if maximizing {
            self.engine_side
        } else {
            self.engine_side.opponent()
        };

        let moves = self.ordered_moves(board, mover, depth);
        if moves.is_empty() {
            return 0; // no frontier left: drawn node
        }

        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for pos in moves {
            let idx = board.index(pos);
            let mut placed = board.place_scoped(pos, mover);

            if has_five_through(&placed, pos, mover) {
                let score = if maximizing {
                    ShapeScore::FIVE
                } else {
                    -ShapeScore::FIVE
                };
                drop(placed);
                if self.config.use_transposition {
                    self.tt.store(hash, score, depth);
                }
                return score;
            }

            let child_hash = self.zobrist.toggle(hash, idx, mover);
            let score = self.minimax(&mut placed, depth - 1, alpha, beta, !maximizing, child_hash);
            drop(placed);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }

        if self.config.use_transposition {
            self.tt.store(hash, best, depth);
        }
        best
    }

    /// Terminal evaluation: signed sum of point scores over occupied cells,
    /// short-circuiting to the win weight if any cell completes a five
    /// (a depth cutoff must not obscure a decided position).
    fn evaluate_leaf(&self, board: &Board) -> i64 {
        let mut score = 0i64;
        for side in [Stone::Black, Stone::White] {
            let sign = if side == self.engine_side { 1 } else { -1 };
            for pos in board.occupied(side) {
                if has_five_through(board, pos, side) {
                    return sign * ShapeScore::FIVE;
                }
                score += sign * evaluate_point(board, pos, side, self.config.defense_percent);
            }
        }
        score
    }

    /// Root move set: an opponent five threat restricts the root to its
    /// blocking cells; other forced moves merge ahead of the candidates.
    fn root_moves(&self, board: &Board, depth: u8, forced: &[ForcedMove]) -> Vec<Pos> {
        let blocks: Vec<Pos> = forced
            .iter()
            .filter(|f| f.kind == ThreatKind::BlockFive)
            .map(|f| f.pos)
            .collect();
        if !blocks.is_empty() {
            return blocks;
        }
        self.merged_moves(board, self.engine_side, depth, forced)
    }

    /// Move set for an interior node: the mover's forced moves, then the
    /// ranked candidates. An own winning completion collapses the set to
    /// that single cell.
    fn ordered_moves(&self, board: &mut Board, mover: Stone, depth: u8) -> Vec<Pos> {
        let forced = find_forced_moves(board, mover);
        if let Some(win) = forced.first().filter(|f| f.kind == ThreatKind::WinNow) {
            return vec![win.pos];
        }
        self.merged_moves(board, mover, depth, &forced)
    }

    /// Prepend forced moves to the ranked candidate list, deduplicated and
    /// capped when threats are present.
    fn merged_moves(
        &self,
        board: &Board,
        mover: Stone,
        depth: u8,
        forced: &[ForcedMove],
    ) -> Vec<Pos> {
        let ranked = candidates(board, mover, depth, self.config);
        if forced.is_empty() {
            return ranked.into_iter().map(|c| c.pos).collect();
        }

        let mut moves: Vec<Pos> = forced.iter().map(|f| f.pos).collect();
        for candidate in ranked {
            if !moves.contains(&candidate.pos) {
                moves.push(candidate.pos);
            }
        }
        moves.truncate(self.config.forced_merge_cap);
        moves
    }
}

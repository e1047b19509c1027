//! Engine configuration
//!
//! Tuning knobs for the search, serializable so an embedding application
//! can ship overrides as JSON. Every field falls back to the tuned default
//! when absent from the input.

use serde::{Deserialize, Serialize};

use crate::board::FULL_BOARD_SIZE;

/// Candidate-generation budget for one tier of remaining depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateBudget {
    /// Neighborhood radius around occupied cells considered playable.
    pub radius: i32,
    /// Maximum candidates kept after ranking.
    pub top_k: usize,
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Board side length.
    pub board_size: usize,
    /// Default search depth for [`crate::Engine::choose_move`].
    pub search_depth: u8,
    /// Opponent-shape weight inside point evaluation, in percent.
    pub defense_percent: i64,
    /// Opponent-shape weight during candidate ranking, in percent.
    pub candidate_defense_percent: i64,
    /// Remaining depth at or below which the wide budget applies.
    ///
    /// Near the root, per-node cost is amortized over few nodes, so the
    /// net is cast wider; deep in the tree the branching factor is capped
    /// harder.
    pub wide_net_depth: u8,
    /// Budget used at shallow remaining depth.
    pub wide_budget: CandidateBudget,
    /// Budget used at deep remaining depth.
    pub narrow_budget: CandidateBudget,
    /// List cap after forced moves are merged ahead of candidates.
    pub forced_merge_cap: usize,
    /// Transposition-table switch. Disabling must never change the chosen
    /// move, only the time to compute it.
    pub use_transposition: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: FULL_BOARD_SIZE,
            search_depth: 4,
            defense_percent: 120,
            candidate_defense_percent: 110,
            wide_net_depth: 2,
            wide_budget: CandidateBudget {
                radius: 2,
                top_k: 15,
            },
            narrow_budget: CandidateBudget {
                radius: 1,
                top_k: 8,
            },
            forced_merge_cap: 10,
            use_transposition: true,
        }
    }
}

impl EngineConfig {
    /// Candidate budget for a given remaining search depth.
    #[inline]
    pub fn candidate_budget(&self, depth: u8) -> CandidateBudget {
        if depth <= self.wide_net_depth {
            self.wide_budget
        } else {
            self.narrow_budget
        }
    }

    /// Load a configuration from JSON, defaulting absent fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

//! Search algorithms: minimax with alpha-beta pruning, candidate
//! generation, forced-move detection, and position caching

pub mod alphabeta;
pub mod candidates;
pub mod threat;
pub mod tt;
pub mod zobrist;

// Re-exports
pub use alphabeta::{Searcher, INFINITY};
pub use candidates::{candidates, Candidate};
pub use threat::{find_forced_moves, ForcedMove, ThreatKind};
pub use tt::{TranspositionTable, TtEntry};
pub use zobrist::ZobristTable;

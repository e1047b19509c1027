//! Position evaluation: shape weights and point heuristics

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate_point, line_window};
pub use patterns::{LineCell, ShapeScore};

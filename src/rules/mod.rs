//! Game rules: win detection

pub mod win;

pub use win::has_five_through;

/// Direction vectors for line checking (4 directions)
///
/// Each line is scanned both ways from the query cell, so the four
/// forward directions cover all eight rays.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

//! Constants for board geometry, search and evaluation.
//!
//! The rules are fixed to standard Teeko: a 5x5 board, four pieces per side,
//! and wins by four in a row or a 2x2 square.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 5;

/// Pieces each side places before the sliding phase starts.
pub const PIECES_PER_SIDE: usize = 4;

/// Total pieces on the board once the placement phase is over.
pub const TOTAL_PIECES: usize = PIECES_PER_SIDE * 2;

/// Length of a winning line.
pub const LINE_LEN: usize = 4;

/// Column labels used in coordinate strings ("A0" .. "E4").
pub const COLUMN_LABELS: [char; N] = ['A', 'B', 'C', 'D', 'E'];

// =============================================================================
// Neighbor Offsets
// =============================================================================

/// Offsets (row, col) to the 8 neighbors of a cell.
/// Order: up, down, left, right, down-left, up-right, up-left, down-right.
///
/// Successor generation and move reconstruction both walk this order, and
/// the search keeps the first of equally scored successors, so the order is
/// part of the agent's observable behaviour.
pub const DELTA: [(isize, isize); 8] = [
    (-1, 0),  // up
    (1, 0),   // down
    (0, -1),  // left
    (0, 1),   // right
    (1, -1),  // down-left
    (-1, 1),  // up-right
    (-1, -1), // up-left
    (1, 1),   // down-right
];

// =============================================================================
// Search Parameters
// =============================================================================

/// Default minimax horizon in plies.
pub const SEARCH_DEPTH: u32 = 3;

// =============================================================================
// Heuristic Weights
// =============================================================================

/// Multiplier applied to the piece count of a 2x2 square one piece short.
pub const SQUARE_WEIGHT: i32 = 5;

/// Largest magnitude the raw heuristic can reach (28 lines x 4 + 16 squares x 15).
pub const HEURISTIC_NORMALIZER: f64 = 352.0;

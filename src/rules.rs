//! Teeko rules: phase detection, successor generation and win detection.
//!
//! The phase is never stored. It is recomputed from the number of pieces on
//! the board, so it cannot drift out of sync with the position.

use lazy_static::lazy_static;

use crate::board::{Board, Coord, Piece};
use crate::constants::{LINE_LEN, N, TOTAL_PIECES};

/// A four-cell window, leading cell first.
pub type Window = [Coord; LINE_LEN];

lazy_static! {
    /// Every straight four-in-a-row window: horizontal, vertical, `\` and `/`.
    pub static ref LINES: Vec<Window> = {
        let mut lines = Vec::new();
        let starts = N - LINE_LEN + 1;
        for r in 0..N {
            for c in 0..starts {
                lines.push(std::array::from_fn(|i| (r, c + i)));
            }
        }
        for c in 0..N {
            for r in 0..starts {
                lines.push(std::array::from_fn(|i| (r + i, c)));
            }
        }
        for r in 0..starts {
            for c in 0..starts {
                lines.push(std::array::from_fn(|i| (r + i, c + i)));
            }
        }
        for r in 0..starts {
            for c in (LINE_LEN - 1)..N {
                lines.push(std::array::from_fn(|i| (r + i, c - i)));
            }
        }
        lines
    };

    /// Every 2x2 square window, ordered top-left, bottom-left, top-right, bottom-right.
    pub static ref SQUARES: Vec<Window> = {
        let mut squares = Vec::new();
        for r in 0..N - 1 {
            for c in 0..N - 1 {
                squares.push([(r, c), (r + 1, c), (r, c + 1), (r + 1, c + 1)]);
            }
        }
        squares
    };
}

/// Game phase, derived from the piece count.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Fewer than eight pieces are down; moves drop a new piece.
    Placement,
    /// All eight pieces are down; moves slide a piece one step.
    Sliding,
}

/// Outcome of a position from one side's point of view.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameValue {
    AgentWins,
    OpponentWins,
    Undecided,
}

impl GameValue {
    pub fn is_decided(self) -> bool {
        self != GameValue::Undecided
    }

    /// +1, -1 or 0.
    pub fn score(self) -> f64 {
        match self {
            GameValue::AgentWins => 1.0,
            GameValue::OpponentWins => -1.0,
            GameValue::Undecided => 0.0,
        }
    }

    pub fn negate(self) -> GameValue {
        match self {
            GameValue::AgentWins => GameValue::OpponentWins,
            GameValue::OpponentWins => GameValue::AgentWins,
            GameValue::Undecided => GameValue::Undecided,
        }
    }
}

pub fn phase(board: &Board) -> Phase {
    if board.piece_count() < TOTAL_PIECES {
        Phase::Placement
    } else {
        Phase::Sliding
    }
}

/// Generate every board reachable by one move of `piece`.
///
/// Placement phase: one successor per empty cell, row-major.
/// Sliding phase: for each cell holding `piece` (row-major), one successor
/// per empty neighbor in `DELTA` order.
pub fn successors(board: &Board, piece: Piece) -> Vec<Board> {
    match phase(board) {
        Phase::Placement => board
            .empty_cells()
            .map(|pt| {
                let mut next = *board;
                next.set(pt, Some(piece));
                next
            })
            .collect(),
        Phase::Sliding => board
            .pieces(piece)
            .flat_map(move |from| {
                Board::neighbors(from)
                    .filter(move |&to| board.get(to).is_none())
                    .map(move |to| {
                        let mut next = *board;
                        next.set(from, None);
                        next.set(to, Some(piece));
                        next
                    })
            })
            .collect(),
    }
}

/// The piece filling every cell of `window`, if any.
pub fn window_owner(board: &Board, window: &Window) -> Option<Piece> {
    let first = board.get(window[0])?;
    window[1..]
        .iter()
        .all(|&pt| board.get(pt) == Some(first))
        .then_some(first)
}

/// The winning piece, if any window is filled by a single piece.
/// Lines are scanned before squares.
pub fn winner(board: &Board) -> Option<Piece> {
    LINES
        .iter()
        .chain(SQUARES.iter())
        .find_map(|window| window_owner(board, window))
}

/// Win/loss/undecided from the point of view of `own`.
pub fn game_value(board: &Board, own: Piece) -> GameValue {
    match winner(board) {
        Some(p) if p == own => GameValue::AgentWins,
        Some(_) => GameValue::OpponentWins,
        None => GameValue::Undecided,
    }
}

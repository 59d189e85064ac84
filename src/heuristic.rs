//! Positional evaluation for undecided boards.
//!
//! The score only counts a line window when its leading cell is occupied,
//! and then only for the side that holds the leading cell. A window such as
//! `. b b b` is worth nothing. Move selection depends on this, so it is kept
//! as is.

use crate::board::{Board, Piece};
use crate::constants::{HEURISTIC_NORMALIZER, SQUARE_WEIGHT};
use crate::rules::{LINES, SQUARES, Window, game_value};

/// Score `board` for `own` in `[-1, 1]`.
///
/// Decided boards score exactly +1 or -1. Otherwise the raw sum of
/// [`line_score`] and [`square_score`] over all windows is divided by
/// [`HEURISTIC_NORMALIZER`] and clamped.
pub fn evaluate(board: &Board, own: Piece) -> f64 {
    let value = game_value(board, own);
    if value.is_decided() {
        return value.score();
    }
    let raw: i32 = LINES.iter().map(|w| line_score(board, w, own)).sum::<i32>()
        + SQUARES.iter().map(|w| square_score(board, w, own)).sum::<i32>();
    (f64::from(raw) / HEURISTIC_NORMALIZER).clamp(-1.0, 1.0)
}

fn count_in(board: &Board, window: &Window, piece: Piece) -> i32 {
    window.iter().filter(|&&pt| board.get(pt) == Some(piece)).count() as i32
}

/// Pieces of the side holding the window's leading cell, signed for `own`.
pub fn line_score(board: &Board, window: &Window, own: Piece) -> i32 {
    match board.get(window[0]) {
        Some(p) if p == own => count_in(board, window, own),
        Some(p) => -count_in(board, window, p),
        None => 0,
    }
}

/// A square one piece short with no enemy piece in it.
pub fn square_score(board: &Board, window: &Window, own: Piece) -> i32 {
    let mine = count_in(board, window, own);
    let theirs = count_in(board, window, own.opponent());
    match (mine, theirs) {
        (3, 0) => mine * SQUARE_WEIGHT,
        (0, 3) => -theirs * SQUARE_WEIGHT,
        _ => 0,
    }
}

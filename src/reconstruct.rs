//! Recover the move that turns one board into another.

use crate::agent::AgentError;
use crate::board::{Board, Coord, Move, Piece, str_coord};
use crate::rules::{Phase, phase};

/// Diff `before` against `after` and return the move `piece` made.
///
/// During placement exactly one cell may change, from empty to `piece`.
/// During sliding the destination is the cell that went from empty to
/// `piece`; the source is the first of its neighbors (in `DELTA` order)
/// that was occupied before and is empty after.
pub fn diff_move(before: &Board, after: &Board, piece: Piece) -> Result<Move, AgentError> {
    let changed: Vec<Coord> = Board::coords()
        .filter(|&pt| before.get(pt) != after.get(pt))
        .collect();

    match phase(before) {
        Phase::Placement => match changed.as_slice() {
            &[pt] if before.get(pt).is_none() && after.get(pt) == Some(piece) => {
                Ok(Move::Place(pt))
            }
            _ => Err(AgentError::InvalidState(format!(
                "expected one new {piece} piece, found {} changed cells",
                changed.len()
            ))),
        },
        Phase::Sliding => {
            if changed.len() != 2 {
                return Err(AgentError::InvalidState(format!(
                    "expected a slide to change two cells, found {}",
                    changed.len()
                )));
            }
            let to = changed
                .iter()
                .copied()
                .find(|&pt| before.get(pt).is_none() && after.get(pt) == Some(piece))
                .ok_or_else(|| {
                    AgentError::InvalidState(format!("no cell became {piece} in the slide"))
                })?;
            let from = Board::neighbors(to)
                .find(|&pt| before.get(pt).is_some() && after.get(pt).is_none())
                .ok_or_else(|| {
                    AgentError::InvalidState(format!("no vacated cell next to {}", str_coord(to)))
                })?;
            Ok(Move::Slide { from, to })
        }
    }
}

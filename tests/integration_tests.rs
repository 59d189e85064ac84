//! Integration tests for teeko-agent
//!
//! These drive the public API the way the match loop does: generate
//! positions, ask the agent for moves, and check the rules hold.

use teeko_agent::agent::{Agent, AgentError, IllegalMove};
use teeko_agent::board::{Board, Move, Piece};
use teeko_agent::constants::{N, TOTAL_PIECES};
use teeko_agent::heuristic::evaluate;
use teeko_agent::rules::{GameValue, Phase, game_value, phase, successors, winner};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

fn board(rows: [&str; N]) -> Board {
    Board::from_rows(rows).expect("valid test board")
}

/// Play random legal moves from the empty board, black first, and collect
/// every undecided position reached along the way.
fn random_positions(seed: u64, plies: usize) -> Vec<(Board, Piece)> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut positions = Vec::new();
    let mut board = Board::new();
    let mut to_move = Piece::Black;
    for _ in 0..plies {
        if winner(&board).is_some() {
            break;
        }
        positions.push((board, to_move));
        let succ = successors(&board, to_move);
        if succ.is_empty() {
            break;
        }
        board = succ[rng.usize(..succ.len())];
        to_move = to_move.opponent();
    }
    positions
}

fn all_random_positions() -> Vec<(Board, Piece)> {
    (0..20).flat_map(|seed| random_positions(seed, 40)).collect()
}

fn changed_cells(a: &Board, b: &Board) -> Vec<(usize, usize)> {
    Board::coords().filter(|&pt| a.get(pt) != b.get(pt)).collect()
}

// =============================================================================
// Rules engine properties
// =============================================================================

#[test]
fn test_placement_successor_count() {
    for (b, to_move) in all_random_positions() {
        if phase(&b) != Phase::Placement {
            continue;
        }
        let succ = successors(&b, to_move);
        assert_eq!(succ.len(), N * N - b.piece_count());
        for next in &succ {
            let diff = changed_cells(&b, next);
            assert_eq!(diff.len(), 1);
            assert_eq!(b.get(diff[0]), None);
            assert_eq!(next.get(diff[0]), Some(to_move));
        }
    }
}

#[test]
fn test_sliding_successors_are_single_steps() {
    let mut checked = 0;
    for (b, to_move) in all_random_positions() {
        if phase(&b) != Phase::Sliding {
            continue;
        }
        checked += 1;
        assert_eq!(b.piece_count(), TOTAL_PIECES);
        for next in successors(&b, to_move) {
            assert_eq!(next.piece_count(), TOTAL_PIECES);
            let diff = changed_cells(&b, &next);
            assert_eq!(diff.len(), 2);
            let from = diff
                .iter()
                .copied()
                .find(|&pt| b.get(pt) == Some(to_move))
                .expect("a vacated source");
            let to = diff
                .iter()
                .copied()
                .find(|&pt| next.get(pt) == Some(to_move))
                .expect("a filled destination");
            assert_eq!(next.get(from), None);
            assert_eq!(b.get(to), None);
            assert!(Board::adjacent(from, to));
        }
    }
    assert!(checked > 0, "random games never reached the sliding phase");
}

#[test]
fn test_game_value_symmetry() {
    for (b, _) in all_random_positions() {
        for own in Piece::ALL {
            let value = game_value(&b, own);
            assert_eq!(game_value(&b.swapped(), own.opponent()), value);
            assert_eq!(game_value(&b.swapped(), own), value.negate());
        }
    }
}

#[test]
fn test_horizontal_line_anywhere_wins() {
    for r in 0..N {
        for c in 0..2 {
            let mut b = Board::new();
            for i in 0..4 {
                b.set((r, c + i), Some(Piece::Red));
            }
            assert_eq!(game_value(&b, Piece::Red), GameValue::AgentWins);
            assert_eq!(game_value(&b, Piece::Black), GameValue::OpponentWins);
        }
    }
}

// =============================================================================
// Heuristic properties
// =============================================================================

#[test]
fn test_evaluate_range_and_terminal_values() {
    let won = board([".....", "b....", ".b...", "..b..", "...b."]);
    assert_eq!(evaluate(&won, Piece::Black), 1.0);
    assert_eq!(evaluate(&won, Piece::Red), -1.0);

    for (b, _) in all_random_positions() {
        for own in Piece::ALL {
            let v = evaluate(&b, own);
            assert!((-1.0..=1.0).contains(&v));
            if game_value(&b, own).is_decided() {
                assert_eq!(v.abs(), 1.0);
            }
        }
    }
}

// =============================================================================
// Agent scenarios
// =============================================================================

#[test]
fn test_empty_board_decide() {
    let agent = Agent::with_piece(Piece::Black);
    let b = Board::new();
    match agent.decide(&b) {
        Ok(Move::Place(pt)) => assert_eq!(b.get(pt), None),
        other => panic!("expected a placement, got {other:?}"),
    }
}

#[test]
fn test_slides_into_square_corner() {
    // three black corners around the empty (1,1); (0,1) can slide down into it
    let b = board([".b...", "..b..", ".bb..", "....r", "r.r.r"]);
    assert_eq!(phase(&b), Phase::Sliding);
    assert_eq!(game_value(&b, Piece::Black), GameValue::Undecided);
    let agent = Agent::with_piece(Piece::Black);
    let mv = agent.decide(&b).expect("a move");
    assert_eq!(mv, Move::Slide { from: (0, 1), to: (1, 1) });
    let next = Agent::place(&b, mv, Piece::Black);
    assert_eq!(game_value(&next, Piece::Black), GameValue::AgentWins);
}

#[test]
fn test_drops_into_square_corner() {
    // no earlier drop sets up a slide red cannot answer, so (4,4) is the
    // only move worth a certain win
    let b = board(["r...r", ".....", "r....", "...bb", "...b."]);
    assert_eq!(phase(&b), Phase::Placement);
    let agent = Agent::with_piece(Piece::Black);
    assert_eq!(agent.decide(&b), Ok(Move::Place((4, 4))));
}

#[test]
fn test_opponent_cannot_move_agent_piece() {
    let b = board([".b...", "..b..", ".bb..", "....r", "r.r.r"]);
    let agent = Agent::with_piece(Piece::Black);
    let result = agent.apply_opponent_move(&b, Move::Slide { from: (0, 1), to: (1, 1) });
    assert_eq!(result, Err(AgentError::IllegalMove(IllegalMove::NoPieceAtSource)));
}

#[test]
fn test_decide_round_trip() {
    for seed in 0..4 {
        for (b, to_move) in random_positions(seed, 14).into_iter().step_by(3) {
            let agent = Agent::with_piece(to_move);
            let chosen = agent.search(&b).board;
            let mv = agent.decide(&b).expect("a move");
            assert_eq!(Agent::place(&b, mv, to_move), chosen);
        }
    }
}

#[test]
fn test_agent_moves_are_legal_for_opponent_view() {
    // a move the agent makes must pass the opponent-side checks
    for seed in 0..4 {
        for (b, to_move) in random_positions(seed, 14).into_iter().step_by(4) {
            let mover = Agent::with_piece(to_move);
            let watcher = Agent::with_piece(to_move.opponent());
            let mv = mover.decide(&b).expect("a move");
            let expected = Agent::place(&b, mv, to_move);
            assert_eq!(watcher.apply_opponent_move(&b, mv), Ok(expected));
        }
    }
}

//! The Teeko agent: identity, move choice and move validation.
//!
//! ## Example
//!
//! ```
//! use teeko_agent::agent::Agent;
//! use teeko_agent::board::{Board, Move, Piece};
//!
//! let agent = Agent::with_piece(Piece::Red);
//! let board = Board::new();
//!
//! // The opponent drops a piece, then the agent answers.
//! let board = agent.apply_opponent_move(&board, Move::Place((2, 2))).unwrap();
//! let reply = agent.decide(&board).unwrap();
//! let board = Agent::place(&board, reply, agent.own_piece());
//! assert_eq!(board.piece_count(), 2);
//! ```

use std::fmt;

use crate::board::{Board, Move, Piece};
use crate::constants::SEARCH_DEPTH;
use crate::reconstruct::diff_move;
use crate::rules::{GameValue, Phase, game_value, phase};
use crate::search::{SearchResult, Searcher};

/// Why an opponent move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// A coordinate is outside the board
    OffBoard,
    /// The source cell does not hold one of the mover's pieces
    NoPieceAtSource,
    /// The destination is not next to the source
    NotAdjacent,
    /// The destination already holds a piece
    DestinationOccupied,
    /// All eight pieces are down, so new pieces cannot be dropped
    PlacementOver,
    /// Pieces cannot slide until all eight are down
    StillPlacing,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::OffBoard => write!(f, "Illegal move: off the board"),
            IllegalMove::NoPieceAtSource => write!(f, "Illegal move: you don't have a piece there"),
            IllegalMove::NotAdjacent => {
                write!(f, "Illegal move: can only move to an adjacent space")
            }
            IllegalMove::DestinationOccupied => write!(f, "Illegal move: space is occupied"),
            IllegalMove::PlacementOver => {
                write!(f, "Illegal move: all pieces are placed, move one instead")
            }
            IllegalMove::StillPlacing => {
                write!(f, "Illegal move: pieces cannot move until all are placed")
            }
        }
    }
}

/// Errors raised by the agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    /// The opponent's move breaks the rules
    IllegalMove(IllegalMove),
    /// An internal invariant does not hold (no move found, bad board diff)
    InvalidState(String),
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentError::IllegalMove(reason) => write!(f, "{reason}"),
            AgentError::InvalidState(msg) => write!(f, "Invalid state: {msg}"),
        }
    }
}

impl std::error::Error for AgentError {}

impl From<IllegalMove> for AgentError {
    fn from(reason: IllegalMove) -> Self {
        AgentError::IllegalMove(reason)
    }
}

/// A Teeko player. Its piece is fixed for its whole life.
#[derive(Debug, Clone)]
pub struct Agent {
    own: Piece,
    opponent: Piece,
    depth: u32,
}

impl Default for Agent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent {
    /// Create an agent with a randomly chosen piece.
    pub fn new() -> Self {
        Self::with_piece(if fastrand::bool() { Piece::Black } else { Piece::Red })
    }

    /// Create an agent whose piece is drawn from `rng`.
    pub fn with_rng(rng: &mut fastrand::Rng) -> Self {
        Self::with_piece(if rng.bool() { Piece::Black } else { Piece::Red })
    }

    pub fn with_piece(own: Piece) -> Self {
        Self {
            own,
            opponent: own.opponent(),
            depth: SEARCH_DEPTH,
        }
    }

    /// Use a different search horizon.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn own_piece(&self) -> Piece {
        self.own
    }

    pub fn opponent_piece(&self) -> Piece {
        self.opponent
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Outcome of `board` from this agent's side.
    pub fn game_value(&self, board: &Board) -> GameValue {
        game_value(board, self.own)
    }

    /// Run the minimax search from `board` with this agent to move.
    pub fn search(&self, board: &Board) -> SearchResult {
        Searcher::with_depth(self.own, self.depth).search(board)
    }

    /// Pick this agent's next move.
    ///
    /// Fails with [`AgentError::InvalidState`] when the game is already over,
    /// when the agent has no legal move, or when the chosen successor does
    /// not differ from `board` by a single legal move.
    pub fn decide(&self, board: &Board) -> Result<Move, AgentError> {
        if self.game_value(board).is_decided() {
            return Err(AgentError::InvalidState("the game is already over".into()));
        }
        let result = self.search(board);
        if result.board == *board {
            return Err(AgentError::InvalidState(format!(
                "no legal move for {}",
                self.own
            )));
        }
        diff_move(board, &result.board, self.own)
    }

    /// Check an opponent move and return the board after it.
    pub fn apply_opponent_move(&self, board: &Board, mv: Move) -> Result<Board, AgentError> {
        self.validate(board, mv)?;
        Ok(Self::place(board, mv, self.opponent))
    }

    fn validate(&self, board: &Board, mv: Move) -> Result<(), IllegalMove> {
        let to = mv.destination();
        if !Board::in_bounds(to) {
            return Err(IllegalMove::OffBoard);
        }
        match (mv, phase(board)) {
            (Move::Place(_), Phase::Sliding) => return Err(IllegalMove::PlacementOver),
            (Move::Place(_), Phase::Placement) => {}
            (Move::Slide { .. }, Phase::Placement) => return Err(IllegalMove::StillPlacing),
            (Move::Slide { from, .. }, Phase::Sliding) => {
                if !Board::in_bounds(from) {
                    return Err(IllegalMove::OffBoard);
                }
                if board.get(from) != Some(self.opponent) {
                    return Err(IllegalMove::NoPieceAtSource);
                }
                if !Board::adjacent(from, to) {
                    return Err(IllegalMove::NotAdjacent);
                }
            }
        }
        if board.get(to).is_some() {
            return Err(IllegalMove::DestinationOccupied);
        }
        Ok(())
    }

    /// Apply `mv` for `piece` without any checks.
    pub fn place(board: &Board, mv: Move, piece: Piece) -> Board {
        let mut next = *board;
        if let Some(from) = mv.source() {
            next.set(from, None);
        }
        next.set(mv.destination(), Some(piece));
        next
    }
}

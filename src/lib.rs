//! Teeko-Agent: a minimax player for Teeko.
//!
//! Teeko is played on a 5x5 board. Each side first drops four pieces, then
//! slides them one step at a time (orthogonally or diagonally). Four in a
//! row, in any direction, or a 2x2 square wins.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions, search depth and heuristic weights
//! - [`board`] - Pieces, boards, moves and coordinate strings
//! - [`rules`] - Phase detection, successor generation and win detection
//! - [`heuristic`] - Positional evaluation of undecided boards
//! - [`search`] - Fixed-depth minimax
//! - [`reconstruct`] - Turning a chosen successor back into a move
//! - [`agent`] - The player: identity, move choice and move validation
//! - [`session`] - Human-vs-agent match loop and self-play
//!
//! ## Example
//!
//! ```
//! use teeko_agent::agent::Agent;
//! use teeko_agent::board::{Board, Move, Piece};
//!
//! let agent = Agent::with_piece(Piece::Black);
//! let board = Board::new();
//!
//! let mv = agent.decide(&board).unwrap();
//! assert!(matches!(mv, Move::Place(_)));
//! ```

pub mod agent;
pub mod board;
pub mod constants;
pub mod heuristic;
pub mod reconstruct;
pub mod rules;
pub mod search;
pub mod session;

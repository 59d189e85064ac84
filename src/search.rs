//! Fixed-depth minimax search.
//!
//! The searching side is always the maximizer. Nodes at the horizon, and
//! decided nodes, are scored with [`evaluate`]. There is no pruning and no
//! transposition table; the tree is walked in full down to the horizon.
//!
//! # Example
//!
//! ```
//! use teeko_agent::board::{Board, Piece};
//! use teeko_agent::search::Searcher;
//!
//! let mut searcher = Searcher::new(Piece::Black);
//! let result = searcher.search(&Board::new());
//! assert_eq!(result.board.count(Piece::Black), 1);
//! ```

use log::debug;

use crate::board::{Board, Piece};
use crate::constants::SEARCH_DEPTH;
use crate::heuristic::evaluate;
use crate::rules::{game_value, successors};

/// A scored board. At the root, `board` is the chosen successor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub value: f64,
    pub board: Board,
}

/// Counters for the last search.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Nodes visited, root included
    pub nodes: u64,
    /// Nodes scored by the evaluator (horizon, decided or move-less)
    pub leaves: u64,
}

/// Minimax searcher for one side.
pub struct Searcher {
    own: Piece,
    max_depth: u32,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(own: Piece) -> Self {
        Self::with_depth(own, SEARCH_DEPTH)
    }

    pub fn with_depth(own: Piece, max_depth: u32) -> Self {
        Self {
            own,
            max_depth,
            stats: SearchStats::default(),
        }
    }

    pub fn own_piece(&self) -> Piece {
        self.own
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search from `board` with `own` to move.
    ///
    /// Returns the best successor and its backed-up value. If the root is
    /// already decided or has no successors, the root itself comes back.
    pub fn search(&mut self, board: &Board) -> SearchResult {
        self.stats = SearchStats::default();
        let result = self.minimax(board, 0, true);
        debug!(
            "search {}: depth={} nodes={} leaves={} value={:.4}",
            self.own, self.max_depth, self.stats.nodes, self.stats.leaves, result.value
        );
        result
    }

    fn leaf(&mut self, board: &Board) -> SearchResult {
        self.stats.leaves += 1;
        SearchResult {
            value: evaluate(board, self.own),
            board: *board,
        }
    }

    fn minimax(&mut self, board: &Board, depth: u32, maximizing: bool) -> SearchResult {
        self.stats.nodes += 1;
        if depth >= self.max_depth || game_value(board, self.own).is_decided() {
            return self.leaf(board);
        }

        let to_move = if maximizing { self.own } else { self.own.opponent() };
        let mut best: Option<SearchResult> = None;
        for child in successors(board, to_move) {
            let value = self.minimax(&child, depth + 1, !maximizing).value;
            // strict comparison: the first of equal values is kept
            let improves = match &best {
                None => true,
                Some(b) if maximizing => value > b.value,
                Some(b) => value < b.value,
            };
            if improves {
                best = Some(SearchResult { value, board: child });
            }
        }

        match best {
            Some(result) => result,
            None => self.leaf(board),
        }
    }
}

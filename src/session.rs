//! Interactive match loop between a human and the agent.
//!
//! The session owns the one live board. Only confirmed moves change it; the
//! agent's search works on its own copies.
//!
//! Black always moves first. During placement the human is asked for one
//! coordinate (`B3` = column B, row 3); during sliding for a source and a
//! destination. Bad input is reported and the human is asked again.
//!
//! ## Example
//!
//! ```ignore
//! use teeko_agent::agent::Agent;
//! use teeko_agent::session::Session;
//!
//! let mut session = Session::new(Agent::new());
//! session.run(std::io::stdin().lock(), std::io::stdout())?;
//! ```

use std::io::{BufRead, Lines, Write};

use anyhow::{Context, Result, bail};
use log::{info, warn};

use crate::agent::Agent;
use crate::board::{Board, Coord, Move, Piece, parse_coord, str_coord};
use crate::rules::{GameValue, Phase, phase, winner};

const BAD_COORD: &str = "Please enter a column A-E followed by a row 0-4 (e.g. B3)";

/// A human-vs-agent game.
pub struct Session {
    agent: Agent,
    board: Board,
    to_move: Piece,
}

impl Session {
    /// Start from the empty board with black to move.
    pub fn new(agent: Agent) -> Self {
        Self::with_board(agent, Board::new(), Piece::Black)
    }

    /// Resume from an arbitrary position.
    pub fn with_board(agent: Agent, board: Board, to_move: Piece) -> Self {
        Self {
            agent,
            board,
            to_move,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Piece {
        self.to_move
    }

    /// Play until someone wins. Returns the result from the agent's side.
    ///
    /// Running out of input ends the session with an error.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<GameValue> {
        let mut lines = input.lines();
        info!(
            "new session: agent plays {}, {} to move",
            self.agent.own_piece(),
            self.to_move
        );

        loop {
            let value = self.agent.game_value(&self.board);
            if value.is_decided() {
                write!(output, "{}", self.board)?;
                let message = match value {
                    GameValue::AgentWins => "AI wins! Game over.",
                    _ => "You win! Game over.",
                };
                writeln!(output, "{message}")?;
                info!("game over: {value:?}");
                return Ok(value);
            }

            write!(output, "{}", self.board)?;
            if self.to_move == self.agent.own_piece() {
                self.agent_turn(&mut output)?;
            } else {
                self.human_turn(&mut lines, &mut output)?;
            }
            self.to_move = self.to_move.opponent();
        }
    }

    fn agent_turn<W: Write>(&mut self, output: &mut W) -> Result<()> {
        let own = self.agent.own_piece();
        let mv = self
            .agent
            .decide(&self.board)
            .context("agent failed to choose a move")?;
        self.board = Agent::place(&self.board, mv, own);
        writeln!(output, "{}", announce(own, mv))?;
        info!("agent played {mv}");
        Ok(())
    }

    fn human_turn<R: BufRead, W: Write>(
        &mut self,
        lines: &mut Lines<R>,
        output: &mut W,
    ) -> Result<()> {
        writeln!(output, "{}'s turn", self.agent.opponent_piece())?;
        loop {
            let mv = match phase(&self.board) {
                Phase::Placement => prompt(lines, output, "Move (e.g. B3): ")?.map(Move::Place),
                Phase::Sliding => {
                    let from = prompt(lines, output, "Move from (e.g. B3): ")?;
                    let to = prompt(lines, output, "Move to (e.g. B3): ")?;
                    from.zip(to).map(|(from, to)| Move::Slide { from, to })
                }
            };
            let Some(mv) = mv else {
                writeln!(output, "{BAD_COORD}")?;
                continue;
            };

            match self.agent.apply_opponent_move(&self.board, mv) {
                Ok(next) => {
                    self.board = next;
                    info!("opponent played {mv}");
                    return Ok(());
                }
                Err(e) => {
                    warn!("rejected opponent move {mv}: {e}");
                    writeln!(output, "{e}")?;
                }
            }
        }
    }
}

/// Ask for one coordinate. `Ok(None)` means the line did not parse.
fn prompt<R: BufRead, W: Write>(
    lines: &mut Lines<R>,
    output: &mut W,
    text: &str,
) -> Result<Option<Coord>> {
    write!(output, "{text}")?;
    output.flush()?;
    let line = lines.next().context("input closed before the game ended")??;
    Ok(parse_coord(&line))
}

/// Human-readable description of a move, e.g. "b moved from C2 to D3".
pub fn announce(piece: Piece, mv: Move) -> String {
    match mv {
        Move::Place(to) => format!("{piece} moved at {}", str_coord(to)),
        Move::Slide { from, to } => {
            format!("{piece} moved from {} to {}", str_coord(from), str_coord(to))
        }
    }
}

/// Let two agents play each other from the empty board, black first.
///
/// Stops after `max_turns` moves. Returns the final board and the winner,
/// or `None` if the cap was reached first.
pub fn self_play<W: Write>(
    black: &Agent,
    red: &Agent,
    max_turns: usize,
    mut output: W,
) -> Result<(Board, Option<Piece>)> {
    if black.own_piece() != Piece::Black || red.own_piece() != Piece::Red {
        bail!("self-play needs one black and one red agent");
    }

    let mut board = Board::new();
    for turn in 0..max_turns {
        if let Some(piece) = winner(&board) {
            writeln!(output, "{board}{piece} wins after {turn} moves")?;
            info!("self-play: {piece} wins after {turn} moves");
            return Ok((board, Some(piece)));
        }
        let agent = if turn % 2 == 0 { black } else { red };
        let mv = agent
            .decide(&board)
            .with_context(|| format!("{} failed to move on turn {turn}", agent.own_piece()))?;
        board = Agent::place(&board, mv, agent.own_piece());
        writeln!(output, "{}", announce(agent.own_piece(), mv))?;
    }

    let result = winner(&board);
    match result {
        Some(piece) => writeln!(output, "{board}{piece} wins after {max_turns} moves")?,
        None => writeln!(output, "{board}no winner after {max_turns} moves")?,
    }
    Ok((board, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(session: &mut Session, input: &str) -> (Result<GameValue>, String) {
        let mut out = Vec::new();
        let result = session.run(Cursor::new(input.to_string()), &mut out);
        (result, String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn test_announce() {
        assert_eq!(announce(Piece::Black, Move::Place((2, 2))), "b moved at C2");
        assert_eq!(
            announce(Piece::Red, Move::Slide { from: (2, 2), to: (3, 3) }),
            "r moved from C2 to D3"
        );
    }

    #[test]
    fn test_bad_coordinate_reprompts() {
        let mut session = Session::new(Agent::with_piece(Piece::Red));
        let (result, out) = run_session(&mut session, "Z9\nA0\n");
        // input runs out on the human's second turn
        assert!(result.is_err());
        assert!(out.contains(BAD_COORD));
        assert!(out.contains("r moved at"));
        assert_eq!(session.board().get((0, 0)), Some(Piece::Black));
        assert_eq!(session.board().piece_count(), 2);
    }

    #[test]
    fn test_illegal_move_reprompts() {
        let mut session = Session::new(Agent::with_piece(Piece::Red));
        let (result, out) = run_session(&mut session, "A0\nA0\n");
        assert!(result.is_err());
        assert!(out.contains("Illegal move: space is occupied"));
        assert_eq!(session.board().piece_count(), 2);
    }

    #[test]
    fn test_agent_moves_first_as_black() {
        let mut session = Session::new(Agent::with_piece(Piece::Black));
        let (result, out) = run_session(&mut session, "");
        assert!(result.is_err());
        assert!(out.contains("b moved at"));
        assert!(out.contains("r's turn"));
        assert_eq!(session.board().count(Piece::Black), 1);
        assert_eq!(session.to_move(), Piece::Red);
    }

    #[test]
    fn test_finished_game_reports_winner() {
        let won = Board::from_rows([".....", ".....", ".bbbb", "rr...", "r...r"]).expect("valid board");
        let mut session = Session::with_board(Agent::with_piece(Piece::Black), won, Piece::Red);
        let (result, out) = run_session(&mut session, "");
        assert_eq!(result.ok(), Some(GameValue::AgentWins));
        assert!(out.contains("AI wins! Game over."));

        let mut session = Session::with_board(Agent::with_piece(Piece::Red), won, Piece::Red);
        let (result, out) = run_session(&mut session, "");
        assert_eq!(result.ok(), Some(GameValue::OpponentWins));
        assert!(out.contains("You win! Game over."));
    }

    #[test]
    fn test_human_completes_square() {
        // black (human) to move into C3 and complete the square
        let start = Board::from_rows(["r....", "r....", ".bb..", ".b...", "r...r"]).expect("valid board");
        let mut session = Session::with_board(Agent::with_piece(Piece::Red), start, Piece::Black);
        let (result, out) = run_session(&mut session, "C3\n");
        assert_eq!(result.ok(), Some(GameValue::OpponentWins));
        assert!(out.contains("You win!"));
    }

    #[test]
    fn test_self_play_respects_turn_cap() {
        let black = Agent::with_piece(Piece::Black).with_depth(1);
        let red = Agent::with_piece(Piece::Red).with_depth(1);
        let mut out = Vec::new();
        let (board, _) = self_play(&black, &red, 12, &mut out).expect("self-play runs");
        assert!(board.piece_count() <= 8);
        assert!(board.count(Piece::Black) <= 4);
        assert!(board.count(Piece::Red) <= 4);
    }

    #[test]
    fn test_self_play_rejects_same_colors() {
        let a = Agent::with_piece(Piece::Black);
        assert!(self_play(&a, &a, 4, Vec::<u8>::new()).is_err());
    }
}

//! Teeko: play against the minimax agent from the terminal.
//!
//! ## Usage
//!
//! - `teeko` - Play a game against the agent (same as `teeko play`)
//! - `teeko play --piece red --depth 3` - Choose the agent's piece and horizon
//! - `teeko selfplay` - Watch two agents play each other

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use teeko_agent::agent::Agent;
use teeko_agent::board::Piece;
use teeko_agent::constants::SEARCH_DEPTH;
use teeko_agent::session::{Session, self_play};

/// Teeko: a minimax agent for the 5x5 placement-and-slide game
#[derive(Parser)]
#[command(name = "teeko")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the agent on the terminal
    Play {
        /// The agent's piece (random when omitted)
        #[arg(long, value_enum)]
        piece: Option<PieceArg>,
        /// Seed for the random piece choice
        #[arg(long)]
        seed: Option<u64>,
        /// Search depth in plies
        #[arg(long, default_value_t = SEARCH_DEPTH)]
        depth: u32,
    },
    /// Let two agents play each other
    Selfplay {
        /// Stop after this many moves
        #[arg(long, default_value_t = 100)]
        max_turns: usize,
        /// Search depth in plies
        #[arg(long, default_value_t = SEARCH_DEPTH)]
        depth: u32,
    },
}

#[derive(Copy, Clone, ValueEnum)]
enum PieceArg {
    Black,
    Red,
}

impl From<PieceArg> for Piece {
    fn from(arg: PieceArg) -> Self {
        match arg {
            PieceArg::Black => Piece::Black,
            PieceArg::Red => Piece::Red,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::Level::Warn,
        1 => log::Level::Info,
        _ => log::Level::Debug,
    };
    simple_logger::init_with_level(level)?;

    match cli.command {
        Some(Commands::Play { piece, seed, depth }) => play(piece, seed, depth),
        Some(Commands::Selfplay { max_turns, depth }) => {
            let black = Agent::with_piece(Piece::Black).with_depth(depth);
            let red = Agent::with_piece(Piece::Red).with_depth(depth);
            self_play(&black, &red, max_turns, io::stdout().lock())?;
            Ok(())
        }
        None => play(None, None, SEARCH_DEPTH),
    }
}

fn play(piece: Option<PieceArg>, seed: Option<u64>, depth: u32) -> Result<()> {
    let agent = match (piece, seed) {
        (Some(p), _) => Agent::with_piece(p.into()),
        (None, Some(seed)) => Agent::with_rng(&mut fastrand::Rng::with_seed(seed)),
        (None, None) => Agent::new(),
    }
    .with_depth(depth);

    println!("Playing the game... the agent is {}", agent.own_piece());
    let mut session = Session::new(agent);
    session.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

//! chess-search CLI
//!
//! Best move, game status, perft and self-play from the command line.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chess_core::{Board, Color, Engine, move_to_coord, perft, status};
use clap::{Parser, Subcommand};
use engine_cli::{parse_position, parse_side, self_play};
use minimax_engine::{MinimaxEngine, SearchConfig};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chess-search", version, about = "Parallel minimax chess search")]
struct Cli {
    /// Log filter, e.g. `debug` or `minimax_engine=trace` (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search a position and print the best move
    BestMove {
        /// FEN placement (side field optional) or `startpos`
        #[arg(long)]
        fen: String,
        #[arg(long, value_parser = parse_side)]
        side: Option<Color>,
        #[arg(long)]
        depth: Option<u8>,
        /// TOML search configuration
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print ongoing, check, checkmate or stalemate for the side to move
    Status {
        #[arg(long)]
        fen: String,
        #[arg(long, value_parser = parse_side)]
        side: Option<Color>,
    },
    /// Count pseudo-legal leaf nodes
    Perft {
        #[arg(long)]
        fen: String,
        #[arg(long, value_parser = parse_side)]
        side: Option<Color>,
        #[arg(long)]
        depth: u8,
    },
    /// Let the engine play itself from the start position
    SelfPlay {
        #[arg(long, default_value_t = 100)]
        plies: u32,
        #[arg(long)]
        depth: Option<u8>,
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct BestMoveReport {
    side: Color,
    best_move: Option<String>,
    score: i32,
    depth: u8,
    nodes: u64,
    stopped: bool,
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>, depth: Option<u8>) -> Result<SearchConfig> {
    let mut config = match path {
        Some(path) => SearchConfig::load(path)?,
        None => SearchConfig::default(),
    };
    if let Some(depth) = depth {
        config.depth = depth;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    match cli.command {
        Command::BestMove {
            fen,
            side,
            depth,
            config,
            json,
        } => {
            let (board, side) = parse_position(&fen, side)?;
            let config = load_config(config.as_ref(), depth)?;
            let limits = config.limits();
            let mut engine = MinimaxEngine::with_config(config)?;
            let result = engine.search(&board, side, limits);

            if json {
                let report = BestMoveReport {
                    side,
                    best_move: result.best_move.map(move_to_coord),
                    score: result.score,
                    depth: result.depth,
                    nodes: result.nodes,
                    stopped: result.stopped,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                match result.best_move {
                    Some(mv) => println!("bestmove {} score {}", move_to_coord(mv), result.score),
                    None => println!("bestmove 0000"),
                }
            }
        }
        Command::Status { fen, side } => {
            let (board, side) = parse_position(&fen, side)?;
            println!("{}", status(&board, side));
        }
        Command::Perft { fen, side, depth } => {
            let (board, side) = parse_position(&fen, side)?;
            println!("{}", perft(&board, side, depth));
        }
        Command::SelfPlay {
            plies,
            depth,
            config,
        } => {
            let config = load_config(config.as_ref(), depth)?;
            let mut engine = MinimaxEngine::with_config(config.clone())?;
            let report = self_play(&mut engine, Board::startpos(), Color::White, plies, &config)
                .context("self-play aborted")?;

            for (i, pair) in report.moves.chunks(2).enumerate() {
                let line: Vec<String> = pair.iter().map(|&mv| move_to_coord(mv)).collect();
                println!("{:>3}. {}", i + 1, line.join(" "));
            }
            println!();
            println!("{}", report.final_board);
            println!();
            println!("{}", report.outcome);
        }
    }

    Ok(())
}

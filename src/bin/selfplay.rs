//! Plays seeded random games through the public engine interface and checks
//! the piece-count invariant after every leg.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use draughts::{Board, Player, RulesConfig};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "selfplay")]
#[command(about = "Play random Russian draughts games and report the results")]
struct Args {
    /// Number of games to play
    #[arg(long, default_value = "1")]
    games: usize,
    /// Seed for the first game; game N uses seed + N
    #[arg(long, default_value = "0")]
    seed: u64,
    /// Stop a game after this many committed legs
    #[arg(long, default_value = "300")]
    max_plies: usize,
    /// JSON rules config (see RulesConfig)
    #[arg(long)]
    rules: Option<PathBuf>,
    /// Print the final board of every game
    #[arg(long)]
    show: bool,
    /// Print a JSON summary instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
enum Ending {
    Win(Player),
    /// Side to move has pieces but nothing legal to do.
    Blocked(Player),
    PlyLimit,
}

#[derive(Serialize, Debug)]
struct GameReport {
    seed: u64,
    plies: usize,
    captures: usize,
    promotions: usize,
    ending: Ending,
    white_left: usize,
    black_left: usize,
}

#[derive(Serialize, Debug, Default)]
struct Summary {
    white_wins: usize,
    black_wins: usize,
    blocked: usize,
    unfinished: usize,
}

fn play_game(
    seed: u64,
    rules: RulesConfig,
    max_plies: usize,
) -> anyhow::Result<(GameReport, Board)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new().with_config(rules);
    let (mut plies, mut captures, mut promotions) = (0, 0, 0);

    let ending = loop {
        if let Some(winner) = board.check_win() {
            break Ending::Win(winner);
        }
        if plies >= max_plies {
            break Ending::PlyLimit;
        }
        let to_move = board.current_player();
        if !board.has_legal_move(to_move) {
            break Ending::Blocked(to_move);
        }
        let moves = board.all_moves(to_move);
        let &mv = moves.choose(&mut rng).context("move list empty for a mobile player")?;

        let before = board.piece_count(Player::White) + board.piece_count(Player::Black);
        let outcome = board.apply(mv).with_context(|| {
            format!("generated move {mv} was refused (seed {seed}, ply {plies})")
        })?;
        let after = board.piece_count(Player::White) + board.piece_count(Player::Black);

        let expected = before - usize::from(outcome.captured.is_some());
        if after != expected {
            bail!("piece count went from {before} to {after} on {mv} (seed {seed})");
        }
        if outcome.continues_chain && board.current_player() != to_move {
            bail!("turn passed in the middle of a chain on {mv} (seed {seed})");
        }

        tracing::debug!(ply = plies, %mv, captured = ?outcome.captured, "leg played");
        plies += 1;
        captures += usize::from(outcome.captured.is_some());
        promotions += usize::from(outcome.promoted);
    };

    let report = GameReport {
        seed,
        plies,
        captures,
        promotions,
        ending,
        white_left: board.piece_count(Player::White),
        black_left: board.piece_count(Player::Black),
    };
    Ok((report, board))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let rules = match &args.rules {
        Some(path) => RulesConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => RulesConfig::new(),
    };

    let mut summary = Summary::default();
    let mut reports = Vec::with_capacity(args.games);
    for game in 0..args.games {
        let seed = args.seed.wrapping_add(game as u64);
        let (report, board) = play_game(seed, rules, args.max_plies)?;
        match report.ending {
            Ending::Win(Player::White) => summary.white_wins += 1,
            Ending::Win(Player::Black) => summary.black_wins += 1,
            Ending::Blocked(_) => summary.blocked += 1,
            Ending::PlyLimit => summary.unfinished += 1,
        }
        tracing::info!(
            seed,
            plies = report.plies,
            ending = ?report.ending,
            "game finished"
        );
        if args.show && !args.json {
            println!("seed {seed}:\n{board}");
        }
        reports.push(report);
    }

    if args.json {
        let out = serde_json::json!({ "games": reports, "summary": summary });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!(
            "{} games: White {} / Black {} / blocked {} / unfinished {}",
            args.games, summary.white_wins, summary.black_wins, summary.blocked, summary.unfinished
        );
    }
    Ok(())
}

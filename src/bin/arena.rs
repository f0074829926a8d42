//! Arena CLI: pits two scripted policies against each other.
//!
//! The player side is driven by an archetype policy too, so this measures
//! archetype matchups rather than human play.
//!
//! Usage:
//!   cargo run --release --features cli --bin arena -- --player wall --opponent mirror --matches 500

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use duel_core::core::{GameRng, RulesConfig, Side};
use duel_core::game::{Duel, Profile};
use duel_core::policy::{Archetype, ArchetypePolicy, OpponentPolicy};

/// Play archetype-vs-archetype duels and report the results
#[derive(Parser, Debug)]
#[command(name = "arena")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Archetype playing the player side (e.g. impulse, wall, custom:3)
    #[arg(short, long, default_value = "impulse")]
    player: Archetype,

    /// Archetype playing the ai side
    #[arg(short, long, default_value = "mirror")]
    opponent: Archetype,

    /// Number of matches to play
    #[arg(short, long, default_value = "100")]
    matches: u32,

    /// Random seed
    #[arg(short, long, default_value = "0")]
    seed: u64,

    /// Turn cap per match; matches that hit it count as unfinished
    #[arg(long, default_value = "1000")]
    max_turns: usize,

    /// Rules configuration as JSON (missing fields take defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log every decision and turn
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Default)]
struct Tally {
    player_wins: u32,
    ai_wins: u32,
    unfinished: u32,
    turns: usize,
}

fn load_config(path: Option<&PathBuf>) -> Result<RulesConfig, String> {
    let Some(path) = path else {
        return Ok(RulesConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    RulesConfig::from_json(&json).map_err(|e| format!("invalid config {}: {e}", path.display()))
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { Level::TRACE } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = match load_config(args.config.as_ref()) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Error: {message}");
            return ExitCode::FAILURE;
        }
    };

    let player = ArchetypePolicy::new(args.player);
    let opponent = ArchetypePolicy::new(args.opponent);
    let mut rng = GameRng::new(args.seed);
    let mut profile = Profile::new();
    let mut tally = Tally::default();

    for _ in 0..args.matches {
        let mut match_rng = rng.fork();
        let mut duel = Duel::new(config.clone()).with_prior_history(profile.move_history.clone());

        while !duel.is_over() && duel.history().len() < args.max_turns {
            let player_move = player.choose_move(&duel.player_context(), &mut match_rng);
            if let Err(e) = duel.play_vs_policy(player_move, &opponent, &mut match_rng) {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        }

        tally.turns += duel.history().len();
        match duel.winner() {
            Some(Side::Player) => tally.player_wins += 1,
            Some(Side::Ai) => tally.ai_wins += 1,
            None => tally.unfinished += 1,
        }

        if let Some(log) = duel.summary(args.opponent) {
            profile.record_match(log, duel.moves(Side::Player));
        }
    }

    let played = args.matches.max(1);
    println!("{} vs {} over {} matches (seed {})", args.player, args.opponent, args.matches, args.seed);
    println!(
        "  {} wins: {} ({:.1}%)",
        args.player,
        tally.player_wins,
        100.0 * f64::from(tally.player_wins) / f64::from(played)
    );
    println!(
        "  {} wins: {} ({:.1}%)",
        args.opponent,
        tally.ai_wins,
        100.0 * f64::from(tally.ai_wins) / f64::from(played)
    );
    if tally.unfinished > 0 {
        println!("  unfinished: {}", tally.unfinished);
    }
    println!("  average turns: {:.1}", tally.turns as f64 / f64::from(played));
    if let Some(last) = profile.last_match() {
        println!("  last match style: {}", last.play_style());
    }
    println!("  player profile: level {}, {} xp", profile.level, profile.xp);

    ExitCode::SUCCESS
}

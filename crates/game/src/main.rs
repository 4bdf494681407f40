//! Chess CLI
//!
//! Watch two engines, play against one, or share the board with a friend.

use std::env;
use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chess_core::Color;
use chess_game::session::play_session;
use chess_game::{GameConfig, GameController, PlayerConfig};
use minimax_engine::Strength;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Chess");
    println!();
    println!("Usage:");
    println!("  chess_game spectate [--white-depth N] [--black-depth N] [--max-plies N] [--record FILE]");
    println!("  chess_game play [--color white|black] [--depth N]");
    println!("  chess_game practice");
    println!("  chess_game --config FILE [--record FILE]");
    println!();
    println!("Depths: weak = {}, strong = {}.", Strength::WEAK_DEPTH, Strength::STRONG_DEPTH);
    println!("Set RUST_LOG=debug to see every search.");
}

/// Flags shared by all commands, parsed by hand like the rest of the CLI.
#[derive(Debug, Default)]
struct Options {
    white_depth: Option<u8>,
    black_depth: Option<u8>,
    depth: Option<u8>,
    color: Option<Color>,
    max_plies: Option<u32>,
    record: Option<PathBuf>,
    config: Option<PathBuf>,
}

fn parse_options(args: &[String]) -> Result<Options> {
    let mut opts = Options::default();
    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = args
            .get(i + 1)
            .with_context(|| format!("{flag} needs a value"));
        match flag {
            "--white-depth" => opts.white_depth = Some(value?.parse().context("--white-depth")?),
            "--black-depth" => opts.black_depth = Some(value?.parse().context("--black-depth")?),
            "--depth" | "-d" => opts.depth = Some(value?.parse().context("--depth")?),
            "--max-plies" => opts.max_plies = Some(value?.parse().context("--max-plies")?),
            "--record" => opts.record = Some(PathBuf::from(value?)),
            "--config" | "-c" => opts.config = Some(PathBuf::from(value?)),
            "--color" => {
                opts.color = Some(match value?.to_lowercase().as_str() {
                    "white" | "w" => Color::White,
                    "black" | "b" => Color::Black,
                    other => bail!("unknown color '{other}'"),
                })
            }
            other => bail!("unknown option '{other}'"),
        }
        i += 2;
    }
    Ok(opts)
}

fn set_depth(config: &mut GameConfig, color: Color, depth: Option<u8>) {
    if let (Some(depth), PlayerConfig::Engine(settings)) = (depth, config.player_mut(color)) {
        settings.strength = Strength::Custom(depth);
    }
}

fn spectate(config: GameConfig, opts: &Options) -> Result<()> {
    let mut game = GameController::new(config);
    let outcome = game.run(config.max_plies)?;

    let record = game.record();
    println!("{}", game.board());
    println!();
    println!("{}", record.movetext());
    println!();
    if outcome.is_over() {
        println!("{outcome} ({})", outcome.result_tag());
    } else {
        println!("Stopped after {} plies without a result.", record.moves.len());
    }

    if let Some(path) = &opts.record {
        let json = record.to_json().context("failed to serialize game record")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Record written to {}", path.display());
    }
    Ok(())
}

fn interactive(config: GameConfig) -> Result<()> {
    let mut game = GameController::new(config);
    println!("Type 'help' for commands.");
    let stdin = io::stdin();
    let outcome = play_session(&mut game, stdin.lock(), &mut io::stdout())?;
    if !outcome.is_over() {
        println!("Game abandoned.");
    }
    Ok(())
}

fn run(config: GameConfig, opts: &Options) -> Result<()> {
    if config.white.is_human() || config.black.is_human() {
        interactive(config)
    } else {
        spectate(config, opts)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(command) = args.get(1) else {
        print_usage();
        return Ok(());
    };

    match command.as_str() {
        "spectate" | "watch" => {
            let opts = parse_options(&args[2..])?;
            let mut config = GameConfig::spectate();
            set_depth(&mut config, Color::White, opts.white_depth);
            set_depth(&mut config, Color::Black, opts.black_depth);
            if let Some(max_plies) = opts.max_plies {
                config.max_plies = max_plies;
            }
            spectate(config, &opts)
        }
        "play" => {
            let opts = parse_options(&args[2..])?;
            let human = opts.color.unwrap_or(Color::White);
            let strength = opts.depth.map_or(Strength::Weak, Strength::Custom);
            run(GameConfig::human_vs_engine(human, strength), &opts)
        }
        "practice" => run(GameConfig::practice(), &Options::default()),
        "--config" | "-c" => {
            let opts = parse_options(&args[1..])?;
            let path = opts.config.as_ref().context("--config needs a file")?;
            let config = GameConfig::load(path)?;
            run(config, &opts)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command '{other}'")
        }
    }
}

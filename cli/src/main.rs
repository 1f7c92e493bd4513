use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::{fs, thread};

use anyhow::{Context, Result};
use clap::Parser;
use floodit_core::{Board, ColorSource, GameConfig, Propagation};

use crate::command::{Command, HELP};
use crate::render::Style;

mod command;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Flood-it in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// TOML file with game settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cells per side, overrides the config file
    #[arg(long)]
    size: Option<u8>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Grow the captured region with a queue instead of full rescans
    #[arg(long)]
    queue: bool,

    /// How cells are drawn
    #[arg(long, value_enum, default_value_t = Style::Color)]
    style: Style,
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Could not read {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("Could not parse {}", path.display()))?
        }
        None => GameConfig::default(),
    };

    if let Some(size) = args.size {
        config.size = size;
    }
    if args.queue {
        config.propagation = Propagation::Queue;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let config = load_config(&args)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut board = Board::with_seed(config, seed)?;
    run(&mut board, args.style, io::stdin().lock(), io::stdout().lock())
}

/// Reads commands from `input` until it ends or a quit command, redrawing after each one.
fn run<S: ColorSource>(
    board: &mut Board<S>,
    style: Style,
    input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    render::draw(&board.scene(), board.size(), style, &mut out)?;

    for line in input.lines() {
        let line = line.context("Could not read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{}", err)?;
                continue;
            }
        };
        log::trace!("command: {:?}", command);

        match command {
            Command::Click(point) => {
                if !board.on_click(point).has_update() {
                    writeln!(out, "No cell at {}, {}", point.x, point.y)?;
                    continue;
                }
            }
            Command::Pick(coords) => {
                if let Err(err) = board.select_at(coords) {
                    writeln!(out, "{}", err)?;
                    continue;
                }
            }
            Command::Tick(frames) => {
                for _ in 0..frames {
                    board.on_tick();
                }
            }
            Command::Play => {
                let interval = board.config().frame_interval();
                for _ in 0..board.config().diagonal_count() {
                    board.on_tick();
                    render::draw(&board.scene(), board.size(), style, &mut out)?;
                    writeln!(out)?;
                    thread::sleep(interval);
                }
                continue;
            }
            Command::Key(key) => {
                if !board.on_key(&key).has_update() {
                    continue;
                }
            }
            Command::Seed(seed) => board.reseed(seed),
            Command::Show => {}
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Command::Quit => break,
        }

        render::draw(&board.scene(), board.size(), style, &mut out)?;
    }

    Ok(())
}

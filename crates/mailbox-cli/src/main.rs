//! Terminal front end: draws the board and reads moves from stdin.

mod command;
mod config;

use anyhow::{bail, Context, Result};
use clap::Parser;
use command::{Command, HELP};
use config::CliConfig;
use mailbox_core::{Board, Color, Piece};
use mailbox_engine::Session;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mailbox")]
#[command(about = "Play two-player chess in the terminal")]
struct Args {
    /// Configuration file (defaults to ./mailbox.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show the board from Black's side
    #[arg(long)]
    flipped: bool,

    /// Draw pieces as letters instead of Unicode glyphs
    #[arg(long)]
    ascii: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = CliConfig::load(args.config.as_deref()).context("loading configuration")?;
    if args.flipped {
        config.flipped = true;
    }
    if args.ascii {
        config.unicode = false;
    }

    tracing_subscriber::fmt()
        .with_max_level(config.log_level()?)
        .with_writer(io::stderr)
        .init();

    let mut session = build_session(&config)?;
    if config.flipped {
        session.flip();
    }
    tracing::info!(flipped = config.flipped, "Starting game");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    draw(&mut stdout, &session, config.unicode)?;

    for line in stdin.lock().lines() {
        let line = line?;
        match Command::parse(&line) {
            Command::Quit => break,
            Command::Help => writeln!(stdout, "{}", HELP)?,
            Command::Redraw => draw(&mut stdout, &session, config.unicode)?,
            Command::Flip => {
                session.flip();
                draw(&mut stdout, &session, config.unicode)?;
            }
            Command::Reset => {
                session.reset();
                draw(&mut stdout, &session, config.unicode)?;
            }
            Command::History => {
                for (i, record) in session.history().iter().enumerate() {
                    writeln!(stdout, "{:>3}. {}", i + 1, record)?;
                }
            }
            Command::Moves(from) => {
                let names: Vec<String> = session
                    .legal_moves(from)
                    .as_slice()
                    .iter()
                    .map(|sq| sq.to_algebraic())
                    .collect();
                if names.is_empty() {
                    writeln!(stdout, "no moves from {}", from)?;
                } else {
                    writeln!(stdout, "{}: {}", from, names.join(" "))?;
                }
            }
            Command::Move { from, to } => match session.play(from, to) {
                Ok(record) => {
                    writeln!(stdout, "{}", record)?;
                    draw(&mut stdout, &session, config.unicode)?;
                }
                Err(e) => writeln!(stdout, "{}", e)?,
            },
            Command::Unknown(text) => {
                writeln!(stdout, "unknown command: {} (type 'help')", text)?
            }
        }
        stdout.flush()?;
    }

    Ok(())
}

fn build_session(config: &CliConfig) -> Result<Session> {
    let Some(placement) = config.start.as_deref() else {
        return Ok(Session::new());
    };
    let board = Board::from_placement(placement)
        .with_context(|| format!("invalid start position: {}", placement))?;
    let Some(to_move) = Color::from_code_str(&config.to_move) else {
        bail!("invalid side to move: {}", config.to_move);
    };
    Ok(Session::from_board(board, to_move))
}

fn draw(out: &mut impl Write, session: &Session, unicode: bool) -> Result<()> {
    let glyph: fn(Piece) -> char = if unicode { Piece::symbol } else { Piece::to_char };
    let mut diagram = String::new();
    session
        .board()
        .write_diagram(&mut diagram, session.is_flipped(), glyph)?;
    writeln!(out, "{}", diagram)?;
    writeln!(out, "{}", session.status_line())?;
    Ok(())
}

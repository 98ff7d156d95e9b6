//! Writes `formatio.2da` for one game to stdout.
//!
//! Run it as `make_formation bg2 > override/bg2/formatio.2da` or similar.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use ie_tables::{Game, write_formation_table};
use log::info;

/// Generate the party formation table (formatio.2da) for a game.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Game to generate for: bg1, iwd, iwd2, how, pst or bg2
    game: String,
}

fn main() -> Result<ExitCode> {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // Usage goes to stdout; nothing else is printed.
            print!("{}", err.render());
            return Ok(ExitCode::FAILURE);
        }
    };

    let game: Game = args.game.parse()?;
    info!("generating formation table for {game}");
    write_formation_table(game, io::stdout().lock())
        .with_context(|| format!("writing formatio.2da for {game}"))?;

    Ok(ExitCode::SUCCESS)
}

//! Export the formation slot offsets of a game as JSON, for editors and viewers
//! that would rather not parse 2DA.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ie_tables::{Game, Offset, SLOT_COUNT};
use log::info;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Game whose formations to export (bg1, iwd, iwd2, how, pst, bg2)
    #[arg(long)]
    game: Game,

    /// Output JSON file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Debug, Serialize)]
struct ExportTable {
    game: Game,
    slot_count: usize,
    formations: Vec<ExportFormation>,
}

#[derive(Debug, Serialize)]
struct ExportFormation {
    name: &'static str,
    slots: Vec<Offset>,
}

impl From<Game> for ExportTable {
    fn from(game: Game) -> Self {
        ExportTable {
            game,
            slot_count: SLOT_COUNT,
            formations: game
                .formations()
                .iter()
                .map(|formation| ExportFormation {
                    name: formation.name,
                    slots: formation.slots().to_vec(),
                })
                .collect(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let export = ExportTable::from(args.game);

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            write_json(BufWriter::new(file), &export, args.pretty)?;
            info!(
                "wrote {} formations for {} to {}",
                export.formations.len(),
                args.game,
                path.display()
            );
        }
        None => write_json(io::stdout().lock(), &export, args.pretty)?,
    }

    Ok(())
}

fn write_json<W: Write>(mut writer: W, export: &ExportTable, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, export)?;
    } else {
        serde_json::to_writer(&mut writer, export)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

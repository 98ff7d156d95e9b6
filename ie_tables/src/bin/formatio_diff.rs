//! Compare existing formatio.2da files against freshly generated tables.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use ie_tables::{
    FormationDiff, Game, TwoDaTable, build_formation_table, diff_formation_tables,
    read_formation_rows,
};
use log::{debug, warn};
use serde::Serialize;
use walkdir::WalkDir;

const TABLE_FILE_NAME: &str = "formatio.2da";

#[derive(Parser, Debug)]
#[command(about = "Check formatio.2da tables against generated formations", version)]
struct Args {
    /// Table to check (requires --game)
    #[arg(long, value_name = "PATH", requires = "game", conflicts_with = "root")]
    table: Option<PathBuf>,

    /// Game the table belongs to
    #[arg(long, requires = "table")]
    game: Option<Game>,

    /// Directory scanned recursively for <game>/formatio.2da files
    #[arg(long, value_name = "DIR", conflicts_with = "table")]
    root: Option<PathBuf>,

    /// Path to write every diff as JSON
    #[arg(long, value_name = "PATH")]
    summary_json: Option<PathBuf>,
}

#[derive(Debug)]
struct Target {
    game: Game,
    path: PathBuf,
}

#[derive(Debug, Serialize)]
struct TableReport {
    game: Game,
    path: String,
    clean: bool,
    diff: FormationDiff,
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    let targets = resolve_targets(&args)?;
    if targets.is_empty() {
        bail!("no {TABLE_FILE_NAME} tables to check");
    }

    let mut reports = Vec::with_capacity(targets.len());
    for target in &targets {
        let report = check_table(target)?;
        print_report(&report);
        reports.push(report);
    }

    if let Some(path) = args.summary_json.as_ref() {
        write_summary(path, &reports)?;
    }

    let differing = reports.iter().filter(|report| !report.clean).count();
    println!(
        "checked {} table(s), {} differ from generated output",
        reports.len(),
        differing
    );

    Ok(if differing == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn resolve_targets(args: &Args) -> Result<Vec<Target>> {
    if let (Some(path), Some(game)) = (args.table.as_ref(), args.game) {
        return Ok(vec![Target {
            game,
            path: path.clone(),
        }]);
    }

    let Some(root) = args.root.as_ref() else {
        bail!("pass --table with --game, or --root");
    };

    let mut targets = Vec::new();
    for entry in WalkDir::new(root).into_iter().filter_map(|res| res.ok()) {
        if !entry.file_type().is_file()
            || !entry
                .file_name()
                .to_str()
                .map(|name| name.eq_ignore_ascii_case(TABLE_FILE_NAME))
                .unwrap_or(false)
        {
            continue;
        }

        let parent = entry
            .path()
            .parent()
            .and_then(|dir| dir.file_name())
            .and_then(|name| name.to_str())
            .map(|name| name.to_ascii_lowercase());
        match parent.as_deref().map(str::parse::<Game>) {
            Some(Ok(game)) => targets.push(Target {
                game,
                path: entry.into_path(),
            }),
            _ => warn!(
                "skipping {}: parent directory does not name a known game",
                entry.path().display()
            ),
        }
    }

    targets.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(targets)
}

fn check_table(target: &Target) -> Result<TableReport> {
    let bytes =
        fs::read(&target.path).with_context(|| format!("reading {}", target.path.display()))?;
    let on_disk = TwoDaTable::parse_bytes(&bytes)
        .with_context(|| format!("parsing {}", target.path.display()))?;
    let actual = read_formation_rows(&on_disk)
        .with_context(|| format!("decoding formations in {}", target.path.display()))?;
    let expected = read_formation_rows(&build_formation_table(target.game))?;

    debug!(
        "{}: {} rows on disk, {} expected for {}",
        target.path.display(),
        actual.len(),
        expected.len(),
        target.game
    );

    let diff = diff_formation_tables(&expected, &actual);
    Ok(TableReport {
        game: target.game,
        path: target.path.display().to_string(),
        clean: diff.is_clean(),
        diff,
    })
}

fn print_report(report: &TableReport) {
    if report.clean {
        println!("[{}] {}: ok", report.game, report.path);
        return;
    }

    println!("[{}] {}: differs", report.game, report.path);
    for name in &report.diff.missing_rows {
        println!("  missing row {name}");
    }
    for name in &report.diff.unexpected_rows {
        println!("  unexpected row {name}");
    }
    for name in &report.diff.duplicate_rows {
        println!("  duplicate row {name}");
    }
    for row in &report.diff.misplaced_rows {
        println!(
            "  row {} at index {} (expected {})",
            row.formation, row.actual_index, row.expected_index
        );
    }
    for mismatch in &report.diff.slot_mismatches {
        println!(
            "  {} slot {}: expected ({}, {}), found ({}, {})",
            mismatch.formation,
            mismatch.slot + 1,
            mismatch.expected.x,
            mismatch.expected.y,
            mismatch.actual.x,
            mismatch.actual.y
        );
    }
}

fn write_summary(path: &Path, reports: &[TableReport]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, reports)
        .with_context(|| format!("writing diff summary to {}", path.display()))?;
    writer.flush()?;
    Ok(())
}

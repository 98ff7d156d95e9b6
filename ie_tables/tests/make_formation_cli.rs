use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use anyhow::{Context, Result};

const GAMES: [&str; 6] = ["bg1", "iwd", "iwd2", "how", "pst", "bg2"];

fn fixture(game: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(format!("{game}.2da"))
}

fn run(args: &[&str]) -> Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_make_formation"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .context("executing make_formation")
}

#[test]
fn output_matches_shipped_tables() -> Result<()> {
    for game in GAMES {
        let output = run(&[game])?;
        assert!(output.status.success(), "{game}: {:?}", output.status);
        let expected = fs::read_to_string(fixture(game))
            .with_context(|| format!("reading fixture for {game}"))?;
        let actual = String::from_utf8(output.stdout)?;
        assert_eq!(actual, expected, "formatio.2da for {game} drifted");
    }
    Ok(())
}

#[test]
fn bg2_table_layout() -> Result<()> {
    let output = run(&["bg2"])?;
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "2DA V1.0");
    assert_eq!(lines[1], "-10");
    assert!(lines[2].starts_with('#'));
    assert!(lines[3].trim_start().starts_with("X1 Y1 X2 Y2"));
    assert!(lines[3].ends_with("X20 Y20"));

    let rows = &lines[4..];
    assert_eq!(rows.len(), 12);
    assert!(rows[0].starts_with("FOLLOW "));
    assert!(rows[11].starts_with("LINE "));
    for row in rows {
        let fields: Vec<&str> = row.split(' ').collect();
        assert_eq!(fields.len(), 41, "{row}");
        assert!(fields[1..].iter().all(|f| f.parse::<i32>().is_ok()));
    }
    Ok(())
}

#[test]
fn row_counts_follow_game_lists() -> Result<()> {
    for (game, rows) in [
        ("bg1", 12),
        ("iwd", 12),
        ("iwd2", 12),
        ("how", 12),
        ("pst", 13),
        ("bg2", 12),
    ] {
        let output = run(&[game])?;
        let text = String::from_utf8(output.stdout)?;
        assert_eq!(text.lines().count(), 4 + rows, "{game}");
    }
    Ok(())
}

#[test]
fn missing_game_prints_usage_and_fails() -> Result<()> {
    let output = run(&[])?;
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Usage"), "{stdout}");
    assert!(!stdout.contains("FOLLOW"));
    Ok(())
}

#[test]
fn extra_arguments_are_rejected() -> Result<()> {
    let output = run(&["bg2", "pst"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(!String::from_utf8(output.stdout)?.contains("FOLLOW"));
    Ok(())
}

#[test]
fn unknown_game_is_an_error() -> Result<()> {
    let output = run(&["bg3"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("unknown game 'bg3'"), "{stderr}");
    Ok(())
}

//! `formatio.2da`: one row of slot offsets per party formation.

use std::io::{BufWriter, Write};

use anyhow::{Context, Result, ensure};
use log::debug;
use serde::Serialize;

use crate::formation::{Formation, SLOT_COUNT};
use crate::game::Game;
use crate::geometry::Offset;
use crate::two_da::{TwoDaRow, TwoDaTable};

/// Value the loader substitutes for missing cells.
pub const DEFAULT_VALUE: &str = "-10";

pub const FORMATION_COMMENT: &str = "# generated by make_formation, do not edit";

/// `X1 Y1 X2 Y2 ... X20 Y20`.
pub fn column_headers() -> Vec<String> {
    (1..=SLOT_COUNT)
        .flat_map(|slot| [format!("X{slot}"), format!("Y{slot}")])
        .collect()
}

pub fn formation_row(formation: &Formation) -> TwoDaRow {
    let values = formation
        .slots()
        .iter()
        .flat_map(|offset| [offset.x.to_string(), offset.y.to_string()])
        .collect();
    TwoDaRow {
        name: formation.name.to_string(),
        values,
    }
}

pub fn build_formation_table(game: Game) -> TwoDaTable {
    let mut table = TwoDaTable::new(DEFAULT_VALUE, column_headers());
    table.comments.push(FORMATION_COMMENT.to_string());
    table.rows = game.formations().iter().map(formation_row).collect();
    debug!("built formation table for {game} with {} rows", table.rows.len());
    table
}

/// Serialises the whole table for `game` in one pass.
pub fn write_formation_table<W: Write>(game: Game, out: W) -> Result<()> {
    let table = build_formation_table(game);
    let mut writer = BufWriter::new(out);
    table
        .write_to(&mut writer)
        .with_context(|| format!("writing formation table for {game}"))?;
    writer.flush().context("flushing formation table")?;
    Ok(())
}

/// A formation row decoded back into slot offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormationRow {
    pub name: String,
    pub slots: Vec<Offset>,
}

pub fn read_formation_rows(table: &TwoDaTable) -> Result<Vec<FormationRow>> {
    table
        .rows
        .iter()
        .map(|row| -> Result<FormationRow> {
            ensure!(
                row.values.len() == SLOT_COUNT * 2,
                "formation {} has {} values, expected {}",
                row.name,
                row.values.len(),
                SLOT_COUNT * 2
            );
            let mut coords = Vec::with_capacity(row.values.len());
            for value in &row.values {
                let parsed = value
                    .parse::<i32>()
                    .with_context(|| format!("formation {}: parsing '{value}'", row.name))?;
                coords.push(parsed);
            }
            let slots = coords
                .chunks_exact(2)
                .map(|pair| Offset::new(pair[0], pair[1]))
                .collect();
            Ok(FormationRow {
                name: row.name.clone(),
                slots,
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotMismatch {
    pub formation: String,
    pub slot: usize,
    pub expected: Offset,
    pub actual: Offset,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MisplacedRow {
    pub formation: String,
    pub expected_index: usize,
    pub actual_index: usize,
}

/// Differences between a reference table and a table found on disk.
///
/// Rows are paired by the longest run of names common to both tables in the
/// same relative order, so one missing row does not mark every later row as
/// misplaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormationDiff {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub missing_rows: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub unexpected_rows: Vec<String>,
    /// Extra rows repeating a formation that is already paired.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub duplicate_rows: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub misplaced_rows: Vec<MisplacedRow>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub slot_mismatches: Vec<SlotMismatch>,
}

impl FormationDiff {
    pub fn is_clean(&self) -> bool {
        self.missing_rows.is_empty()
            && self.unexpected_rows.is_empty()
            && self.duplicate_rows.is_empty()
            && self.misplaced_rows.is_empty()
            && self.slot_mismatches.is_empty()
    }
}

fn same_name(a: &FormationRow, b: &FormationRow) -> bool {
    a.name.eq_ignore_ascii_case(&b.name)
}

/// Index pairs of the longest common subsequence of row names.
fn ordered_pairs(expected: &[FormationRow], actual: &[FormationRow]) -> Vec<(usize, usize)> {
    let (n, m) = (expected.len(), actual.len());
    let mut lengths = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lengths[i][j] = if same_name(&expected[i], &actual[j]) {
                lengths[i + 1][j + 1] + 1
            } else {
                lengths[i + 1][j].max(lengths[i][j + 1])
            };
        }
    }

    let mut pairs = Vec::with_capacity(lengths[0][0]);
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if same_name(&expected[i], &actual[j]) {
            pairs.push((i, j));
            i += 1;
            j += 1;
        } else if lengths[i + 1][j] >= lengths[i][j + 1] {
            i += 1;
        } else {
            j += 1;
        }
    }
    pairs
}

pub fn diff_formation_tables(expected: &[FormationRow], actual: &[FormationRow]) -> FormationDiff {
    let mut diff = FormationDiff::default();
    let mut paired: Vec<Option<usize>> = vec![None; expected.len()];
    let mut claimed = vec![false; actual.len()];

    for (expected_index, actual_index) in ordered_pairs(expected, actual) {
        paired[expected_index] = Some(actual_index);
        claimed[actual_index] = true;
    }

    // Rows present on both sides but outside the common order.
    for (expected_index, want) in expected.iter().enumerate() {
        if paired[expected_index].is_some() {
            continue;
        }
        let moved =
            (0..actual.len()).find(|&index| !claimed[index] && same_name(want, &actual[index]));
        match moved {
            Some(actual_index) => {
                paired[expected_index] = Some(actual_index);
                claimed[actual_index] = true;
                diff.misplaced_rows.push(MisplacedRow {
                    formation: want.name.clone(),
                    expected_index,
                    actual_index,
                });
            }
            None => diff.missing_rows.push(want.name.clone()),
        }
    }

    for (want, actual_index) in expected.iter().zip(&paired) {
        let Some(actual_index) = actual_index else {
            continue;
        };
        let got = &actual[*actual_index];
        for (slot, (want_slot, got_slot)) in want.slots.iter().zip(&got.slots).enumerate() {
            if want_slot != got_slot {
                diff.slot_mismatches.push(SlotMismatch {
                    formation: want.name.clone(),
                    slot,
                    expected: *want_slot,
                    actual: *got_slot,
                });
            }
        }
    }

    for (row, _) in actual.iter().zip(&claimed).filter(|(_, taken)| !**taken) {
        if expected.iter().any(|want| same_name(want, row)) {
            diff.duplicate_rows.push(row.name.clone());
        } else {
            diff.unexpected_rows.push(row.name.clone());
        }
    }

    diff
}

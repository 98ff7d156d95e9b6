//! Plain-text 2DA tables.
//!
//! Layout as read by the engine's table loader:
//!
//! ```text
//! 2DA V1.0
//! <default value>
//! # optional comment lines
//!  COL1 COL2 ...
//! ROWNAME v1 v2 ...
//! ```
//!
//! The column header line is indented by one space, which stands in for the
//! row-name column.

use std::io::{self, Write};

use anyhow::{Context, Result, ensure};

pub const SIGNATURE: &str = "2DA V1.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoDaRow {
    pub name: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoDaTable {
    pub signature: String,
    pub default_value: String,
    pub comments: Vec<String>,
    pub columns: Vec<String>,
    pub rows: Vec<TwoDaRow>,
}

impl TwoDaTable {
    pub fn new(default_value: impl Into<String>, columns: Vec<String>) -> Self {
        TwoDaTable {
            signature: SIGNATURE.to_string(),
            default_value: default_value.into(),
            comments: Vec::new(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn row(&self, name: &str) -> Option<&TwoDaRow> {
        self.rows
            .iter()
            .find(|row| row.name.eq_ignore_ascii_case(name))
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.signature)?;
        writeln!(out, "{}", self.default_value)?;
        for comment in &self.comments {
            writeln!(out, "{comment}")?;
        }
        writeln!(out, " {}", self.columns.join(" "))?;
        for row in &self.rows {
            write!(out, "{}", row.name)?;
            for value in &row.values {
                write!(out, " {value}")?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    pub fn to_text(&self) -> String {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer).expect("writing to a Vec cannot fail");
        String::from_utf8_lossy(&buffer).into_owned()
    }

    pub fn parse_bytes(input: &[u8]) -> Result<Self> {
        let text = String::from_utf8(input.to_vec()).context("2DA payload is not UTF-8")?;
        Self::parse_str(&text)
    }

    pub fn parse_str(text: &str) -> Result<Self> {
        let normalized = text.replace("\r\n", "\n");
        let mut lines = normalized
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty());

        let signature = lines.next().context("2DA table is empty")?;
        ensure!(
            signature.starts_with("2DA"),
            "missing 2DA signature (found '{signature}')"
        );
        let default_value = lines.next().context("2DA table has no default value line")?;

        let mut comments = Vec::new();
        let mut columns = None;
        let mut rows = Vec::new();

        for line in lines {
            if columns.is_none() {
                if line.starts_with('#') {
                    comments.push(line.to_string());
                    continue;
                }
                columns = Some(line.split_whitespace().map(str::to_string).collect());
                continue;
            }

            let mut fields = line.split_whitespace();
            let Some(name) = fields.next() else {
                continue;
            };
            rows.push(TwoDaRow {
                name: name.to_string(),
                values: fields.map(str::to_string).collect(),
            });
        }

        Ok(TwoDaTable {
            signature: signature.to_string(),
            default_value: default_value.to_string(),
            comments,
            columns: columns.unwrap_or_default(),
            rows,
        })
    }
}

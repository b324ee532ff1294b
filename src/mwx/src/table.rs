//! Delimited table reader
//!
//! XAsset tables are comma-delimited dumps with a fixed, known column layout
//! per file. Headers are not self-describing, so every table is read against
//! an explicit column list and an explicit number of leading rows to skip.
//!
//! Empty cells read as absent. Quoted cells (`"a,b"`, `""` escapes) are
//! supported so array cells can carry their own commas.

use crate::error::{Error, Result};
use std::path::Path;

/// A fully materialized table
#[derive(Debug, Clone)]
pub struct Table {
    columns: &'static [&'static str],
    rows: Vec<Vec<String>>,
}

/// A borrowed view of one table row
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    columns: &'static [&'static str],
    cells: &'a [String],
}

impl Table {
    /// Parse table text against a column layout, skipping `skip_rows` leading lines.
    pub fn parse(text: &str, columns: &'static [&'static str], skip_rows: usize) -> Self {
        let rows = text
            .lines()
            .skip(skip_rows)
            .filter(|line| !line.trim().is_empty())
            .map(split_record)
            .collect();

        Self { columns, rows }
    }

    /// Read and parse a table file
    pub fn read<P: AsRef<Path>>(
        path: P,
        columns: &'static [&'static str],
        skip_rows: usize,
    ) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::parse(&text, columns, skip_rows))
    }

    pub fn columns(&self) -> &'static [&'static str] {
        self.columns
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        let columns = self.columns;
        self.rows.iter().map(move |cells| Row { columns, cells })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a> Row<'a> {
    /// Raw cell text for a column; absent for empty cells, short rows and unknown columns.
    pub fn str(&self, column: &str) -> Option<&'a str> {
        let index = self.columns.iter().position(|c| *c == column)?;
        let cell = self.cells.get(index)?.as_str();
        if cell.is_empty() {
            None
        } else {
            Some(cell)
        }
    }

    /// Owned cell text
    pub fn string(&self, column: &str) -> Option<String> {
        self.str(column).map(str::to_owned)
    }

    /// Integer cell; non-numeric text reads as absent
    pub fn int(&self, column: &str) -> Option<i64> {
        let cell = self.str(column)?.trim();
        cell.parse::<i64>().ok().or_else(|| {
            // Some dumps write integral values as "12.0"
            cell.parse::<f64>()
                .ok()
                .filter(|f| f.fract() == 0.0)
                .map(|f| f as i64)
        })
    }

    /// Boolean cell stored as 0/1
    pub fn flag(&self, column: &str) -> bool {
        self.int(column).is_some_and(|v| v != 0)
    }

    /// Array cell holding several integers
    pub fn ints(&self, column: &str) -> Vec<i64> {
        self.str(column).map(parse_int_array).unwrap_or_default()
    }
}

/// Parse an array cell such as `"1,5,10"` or `1 5 10`.
pub fn parse_int_array(cell: &str) -> Vec<i64> {
    cell.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse::<i64>().ok())
        .collect()
}

fn split_record(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut quoted = false;
    let mut chars = line.trim_end_matches('\r').chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted => {
                if chars.peek() == Some(&'"') {
                    cell.push('"');
                    chars.next();
                } else {
                    quoted = false;
                }
            }
            '"' if cell.is_empty() => quoted = true,
            ',' if !quoted => cells.push(std::mem::take(&mut cell)),
            _ => cell.push(c),
        }
    }
    cells.push(cell);

    cells
}

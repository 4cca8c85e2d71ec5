//! Line-oriented text grid format
//!
//! ```text
//! 4 5
//! 1 1 0 0 0
//! 1 1 0 0 0
//! 0 0 1 0 0
//! 0 0 0 1 1
//! ```
//!
//! The first non-blank line holds `<rows> <cols>`, followed by `rows` lines of
//! `cols` whitespace-separated `0`/`1` values. Blank lines are ignored. A grid
//! with zero columns has no data lines.

use crate::error::{Error, Result};
use crate::map::Grid;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Read a grid from a text file
pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let file = File::open(path.as_ref())?;
    read_grid_from_reader(BufReader::new(file))
}

/// Parse a grid held in memory
pub fn parse_grid(input: &str) -> Result<Grid> {
    read_grid_from_reader(input.as_bytes())
}

/// Read a grid from any buffered reader (a file, stdin, a byte slice).
///
/// Shape problems (missing rows, ragged rows, values other than 0/1) surface
/// as [`Error::Shape`]; malformed tokens as [`Error::Parse`].
pub fn read_grid_from_reader<R: BufRead>(reader: R) -> Result<Grid> {
    let mut header: Option<(usize, usize)> = None;
    let mut data: Vec<Vec<i64>> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let Some((rows, cols)) = header else {
            header = Some(parse_header(trimmed, line_no)?);
            continue;
        };

        if cols == 0 || data.len() == rows {
            return Err(Error::Parse {
                line: line_no,
                reason: format!("unexpected data after {} declared rows", rows),
            });
        }

        let values = trimmed
            .split_whitespace()
            .map(|token| {
                token.parse::<i64>().map_err(|e| Error::Parse {
                    line: line_no,
                    reason: format!("invalid cell value '{}': {}", token, e),
                })
            })
            .collect::<Result<Vec<i64>>>()?;
        data.push(values);
    }

    let (rows, cols) = header.ok_or_else(|| Error::Parse {
        line: 1,
        reason: "missing '<rows> <cols>' header".to_string(),
    })?;

    if cols == 0 {
        return Ok(Grid::from_states(rows, 0, Vec::new())?);
    }

    Ok(Grid::new(rows, cols, &data)?)
}

/// Write a grid in the format accepted by [`read_grid_from_reader`]
pub fn write_grid<W: Write>(grid: &Grid, mut writer: W) -> Result<()> {
    writeln!(writer, "{} {}", grid.rows(), grid.cols())?;
    if !grid.is_empty() {
        writeln!(writer, "{}", grid)?;
    }
    writer.flush()?;
    Ok(())
}

fn parse_header(line: &str, line_no: usize) -> Result<(usize, usize)> {
    let bad_header = |reason: String| Error::Parse {
        line: line_no,
        reason,
    };

    let fields: Vec<&str> = line.split_whitespace().collect();
    let [rows, cols] = fields.as_slice() else {
        return Err(bad_header(format!(
            "header must be '<rows> <cols>', got {} fields",
            fields.len()
        )));
    };

    let rows = rows
        .parse::<usize>()
        .map_err(|e| bad_header(format!("invalid row count '{}': {}", rows, e)))?;
    let cols = cols
        .parse::<usize>()
        .map_err(|e| bad_header(format!("invalid column count '{}': {}", cols, e)))?;

    Ok((rows, cols))
}

//! Read delimited text into a table.
//!
//! The first non-blank line names the columns. Every later line is one
//! record, with quoting handled by the `csv` crate. A line made only of `-`
//! marks a divider. A blank line marks a divider too, but only once another
//! row follows it, so blank lines at the end of the input are ignored.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tablerlib::Table;
use tracing::debug;

/// Read the whole input, from stdin when `source` is `-`.
pub fn read_source(source: &str) -> Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }

    let path = Path::new(source);
    std::fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))
}

/// Build a table from delimited text.
pub fn parse_table(text: &str, delimiter: u8) -> Result<Table> {
    let mut lines = text.lines().enumerate().map(|(index, line)| (index + 1, line));

    let (number, header) = lines
        .by_ref()
        .find(|(_, line)| !line.trim().is_empty())
        .context("input has no header line")?;
    let names = read_cells(header, delimiter).with_context(|| format!("line {}", number))?;
    let mut table = Table::from_names(names).context("invalid header line")?;
    debug!(columns = table.schema().len(), "read header");

    let mut pending_divider = false;
    for (number, line) in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            pending_divider = true;
            continue;
        }
        if trimmed.chars().all(|c| c == '-') {
            debug!(line = number, "divider");
            table.hline();
            continue;
        }
        if pending_divider {
            debug!(line = number, "divider");
            table.hline();
            pending_divider = false;
        }

        let cells = read_cells(line, delimiter).with_context(|| format!("line {}", number))?;
        table
            .append_values(cells)
            .with_context(|| format!("line {}", number))?;
    }

    Ok(table)
}

/// Split one line into trimmed, unquoted cells.
fn read_cells(line: &str, delimiter: u8) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(line.as_bytes());

    let mut record = csv::StringRecord::new();
    reader.read_record(&mut record)?;
    Ok(record.iter().map(str::to_owned).collect())
}

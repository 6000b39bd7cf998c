//! Render a table for the terminal, a JSON consumer, or a log file

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use console::Style;
use tablerlib::{FormatOptions, Table};

/// Output format selected with `--output`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned text
    #[default]
    Text,
    /// The table's serde form, pretty printed
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(anyhow::anyhow!("unknown output format '{}'", other)),
        }
    }
}

/// Render the table in the requested format
pub fn render(table: &Table, format: OutputFormat, options: &FormatOptions) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(table.format_with(options)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(table)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Bold the heading line. Styling is dropped when stdout is not a terminal.
pub fn style_heading(rendered: &str) -> String {
    match rendered.split_once('\n') {
        Some((heading, rest)) => format!("{}\n{}", Style::new().bold().apply_to(heading), rest),
        None => rendered.to_string(),
    }
}

/// Write the rendered report to a file
pub fn write_file(path: &Path, rendered: &str) -> Result<()> {
    std::fs::write(path, rendered).with_context(|| format!("failed to write '{}'", path.display()))
}

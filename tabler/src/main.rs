//! # tabler
//!
//! A CLI tool that renders delimited text as an aligned table.
//!
//! ## Overview
//!
//! tabler is built on top of tablerlib. It reads rows of delimited values,
//! builds a schema-checked table from them and prints the table as aligned
//! text, or writes it to a log file.
//!
//! ## Input
//!
//! - The first non-blank line holds the column names
//! - Every following line is a row, split on a single-byte delimiter;
//!   cells may be quoted (`"Smith, J"`) to contain the delimiter
//! - A line of only `-` draws a divider at that point
//! - A blank line draws a divider before the next row; blank lines at the
//!   end of the input are ignored
//!
//! ## Usage
//!
//! ```bash
//! # Render a CSV file
//! tabler loot.csv
//!
//! # Read from stdin, tab separated, without the heading line
//! cat loot.tsv | tabler --delimiter $'\t' --no-headings
//!
//! # Write the report to a file
//! tabler loot.csv --out logs/team-log.txt
//!
//! # Structured output
//! tabler loot.csv --output json
//! ```

mod input;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use tablerlib::{FormatOptions, DEFAULT_SEPARATOR};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::render::OutputFormat;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("tabler")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render delimited text as an aligned table with optional dividers")
        .arg(
            Arg::new("input")
                .help("Input file (reads stdin when omitted or '-')")
                .default_value("-"),
        )
        .arg(
            Arg::new("delimiter")
                .short('d')
                .long("delimiter")
                .default_value(",")
                .value_parser(parse_delimiter)
                .help("Single-byte delimiter between input cells"),
        )
        .arg(
            Arg::new("separator")
                .short('s')
                .long("separator")
                .default_value(DEFAULT_SEPARATOR)
                .help("Separator drawn between output columns"),
        )
        .arg(
            Arg::new("no-headings")
                .long("no-headings")
                .action(ArgAction::SetTrue)
                .help("Do not print the heading line"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Write the report to this file instead of stdout"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v info, -vv debug)"),
        )
}

/// Accept exactly one byte, as the csv reader needs
fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value.as_bytes() {
        [byte] => Ok(*byte),
        _ => Err(format!("delimiter must be a single byte, got '{}'", value)),
    }
}

/// Log to stderr; `RUST_LOG` overrides the verbosity flag
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let source = matches
        .get_one::<String>("input")
        .map(|s| s.as_str())
        .unwrap_or("-");
    let delimiter = matches.get_one::<u8>("delimiter").copied().unwrap_or(b',');
    let separator = matches
        .get_one::<String>("separator")
        .map(|s| s.as_str())
        .unwrap_or(DEFAULT_SEPARATOR);
    let format: OutputFormat = matches
        .get_one::<String>("output")
        .map(|s| s.parse::<OutputFormat>())
        .transpose()?
        .unwrap_or_default();
    let headings = !matches.get_flag("no-headings");

    let text = input::read_source(source)?;
    let mut table = input::parse_table(&text, delimiter)?;
    table.set_separator(separator);
    info!(
        rows = table.len(),
        columns = table.schema().len(),
        dividers = table.dividers().count(),
        "built table"
    );

    let options = FormatOptions::new().with_headings(headings);
    let rendered = render::render(&table, format, &options)?;

    match matches.get_one::<PathBuf>("out") {
        Some(path) => {
            render::write_file(path, &rendered)?;
            info!(path = %path.display(), "wrote report");
        }
        None if format == OutputFormat::Text && headings => {
            print!("{}", render::style_heading(&rendered));
        }
        None => print!("{}", rendered),
    }
    debug!(bytes = rendered.len(), "done");

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

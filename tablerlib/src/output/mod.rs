//! Output formatting: present tables as aligned text.
//!
//! This module holds the rendering engine behind [`Table::format`]:
//!
//! - **FormatOptions**: rendering configuration (headings on or off)
//! - **column_widths**: per-column display width
//! - **render**: justified lines with divider rules
//!
//! Rendering is pure: it reads a table and returns a `String`. Writing the
//! result to a terminal or a file is left to the caller.
//!
//! ## Example
//!
//! ```rust
//! use tablerlib::output::FormatOptions;
//! use tablerlib::Table;
//!
//! let mut table = Table::from_names(["X", "Y"]).unwrap();
//! table.append_values(["ab", "cd"]).unwrap();
//! table.append_values(["abcde", "c"]).unwrap();
//!
//! let text = table.format_with(&FormatOptions::new().without_headings());
//! assert_eq!(text, "ab    : cd\nabcde : c \n");
//! ```
//!
//! [`Table::format`]: crate::Table::format

pub mod text;

pub use text::{column_widths, render, FormatOptions};

//! # tablerlib
//!
//! Schema-validated rows and tables that render themselves as aligned,
//! human-readable text.
//!
//! ## Overview
//!
//! Reports often end in a plain text table: a few named columns, rows of
//! already-aggregated values, and the odd horizontal rule between groups.
//! This library keeps that table honest while it is built:
//!
//! - **Schema**: ordered, unique column names shared by a table and its rows
//! - **Row**: an immutable record addressable by position, range or name
//! - **Table**: rows appended under one schema, with divider markers
//! - **Output**: column-width-aware rendering to text
//!
//! Every mutation is validated against the schema. Building a row with the
//! wrong number of values, or appending a row with a different schema,
//! fails immediately and leaves the table untouched.
//!
//! ## Example
//!
//! ```rust
//! use tablerlib::Schema;
//!
//! let schema = Schema::new(["Player Name", "Item Name"]).unwrap();
//! let mut table = schema.new_table();
//!
//! table.hline();
//! table.add_row(["Alice", "Sword"]).unwrap();
//! table.add_row(["Alice", "Shield"]).unwrap();
//! table.hline();
//! table.add_row(["Bob", "Bow"]).unwrap();
//!
//! let row = &table.body()[1];
//! assert_eq!(row.get_by_name("Item Name").unwrap(), "Shield");
//! assert_eq!(&row[0], "Alice");
//!
//! print!("{}", table);
//! // Player Name : Item Name
//! // -----------------------
//! // Alice       : Sword
//! // Alice       : Shield
//! // -----------------------
//! // Bob         : Bow
//! ```

pub mod error;
pub mod output;
pub mod row;
pub mod schema;
pub mod table;

pub use error::TableError;
pub use output::FormatOptions;
pub use row::{CellIndex, Cells, Row, DEFAULT_SEPARATOR};
pub use schema::Schema;
pub use table::{Column, Divider, Table};

/// Result type for tablerlib operations
pub type Result<T> = std::result::Result<T, TableError>;

//! Tables: ordered rows sharing one schema, plus divider markers.
//!
//! The first logical row of a [`Table`] is its heading row, whose values are
//! the column names. Everything after it is the body. Rows can only be
//! appended, and every appended row must carry a schema equal to the
//! table's.
//!
//! ```rust
//! use tablerlib::Table;
//!
//! let mut table = Table::from_names(["Name"]).unwrap();
//! table.append_values(["Alice"]).unwrap();
//! table.hline();
//! table.append_values(["Bob"]).unwrap();
//!
//! assert_eq!(table.format(true), "Name \nAlice\n-----\nBob  \n");
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::error::TableError;
use crate::output::text::{self, FormatOptions};
use crate::row::Row;
use crate::schema::Schema;
use crate::Result;

/// Render each value with `Display`, for [`Table::add_row`] with cells of
/// mixed types.
///
/// ```rust
/// use tablerlib::row;
///
/// assert_eq!(row!["Bob", 2, 0.5], ["Bob", "2", "0.5"]);
/// ```
#[macro_export]
macro_rules! row {
    ($($value:expr),* $(,)?) => {
        [$(::std::string::ToString::to_string(&$value)),*]
    };
}

/// Position of a horizontal divider line.
///
/// Markers order the way they render: `Top` first, then by body row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Divider {
    /// Before the first body row
    Top,
    /// After the body row with this zero-based index
    After(usize),
}

/// One column of the body, as returned by [`Table::columns`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column<'a> {
    pub name: &'a str,
    pub values: Vec<&'a str>,
}

/// Rows sharing one [`Schema`], rendered as aligned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    schema: Schema,
    /// Heading row at index 0, body after it
    rows: Vec<Row>,
    dividers: BTreeSet<Divider>,
}

impl Table {
    /// Create an empty table (heading row only).
    pub fn new(schema: Schema) -> Self {
        let heading = schema.heading_row();
        Self {
            schema,
            rows: vec![heading],
            dividers: BTreeSet::new(),
        }
    }

    /// Create an empty table from column names.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::new(Schema::new(names)?))
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The heading row (values equal the column names).
    pub fn heading(&self) -> &Row {
        &self.rows[0]
    }

    /// All rows except the heading row, in insertion order.
    pub fn body(&self) -> &[Row] {
        &self.rows[1..]
    }

    /// Number of body rows.
    pub fn len(&self) -> usize {
        self.rows.len() - 1
    }

    /// True if no rows have been appended.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a row.
    ///
    /// Fails with [`TableError::SchemaMismatch`] if the row's schema differs
    /// from the table's; the table is left unchanged.
    pub fn append(&mut self, row: Row) -> Result<&mut Self> {
        let schema = row.schema();
        if schema != self.schema {
            return Err(TableError::SchemaMismatch {
                expected: self.schema.to_string(),
                actual: schema.to_string(),
            });
        }
        self.rows.push(row);
        Ok(self)
    }

    /// Build a row from positional values and append it.
    pub fn append_values<I, S>(&mut self, values: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row = self.schema.build_row(values)?;
        self.append(row)
    }

    /// Append a row from any displayable values.
    ///
    /// Values of mixed types go through [`row!`](crate::row!):
    ///
    /// ```rust
    /// use tablerlib::{row, Table};
    ///
    /// let mut table = Table::from_names(["Player", "Items"]).unwrap();
    /// table.add_row(row!["Alice", 3]).unwrap();
    /// table.add_row([4, 5]).unwrap();
    /// assert_eq!(table.body()[0].values(), ["Alice", "3"]);
    /// ```
    pub fn add_row<I, V>(&mut self, values: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = V>,
        V: fmt::Display,
    {
        self.append_values(values.into_iter().map(|value| value.to_string()))
    }

    /// Mark a divider after the most recently appended row.
    ///
    /// With no rows yet the divider goes before the first body row. Marking
    /// the same position twice has no further effect.
    pub fn hline(&mut self) -> &mut Self {
        let divider = match self.len() {
            0 => Divider::Top,
            len => Divider::After(len - 1),
        };
        self.dividers.insert(divider);
        self
    }

    /// Recorded dividers, in rendering order.
    pub fn dividers(&self) -> impl Iterator<Item = Divider> + '_ {
        self.dividers.iter().copied()
    }

    pub fn has_divider(&self, divider: Divider) -> bool {
        self.dividers.contains(&divider)
    }

    /// Set the separator of every row, heading included.
    pub fn set_separator(&mut self, separator: &str) -> &mut Self {
        for row in &mut self.rows {
            row.set_separator(separator);
        }
        self
    }

    /// Set the separator of one body row.
    pub fn set_row_separator(&mut self, index: usize, separator: &str) -> Result<()> {
        let len = self.len();
        let row = self
            .rows
            .get_mut(index + 1)
            .ok_or(TableError::IndexOutOfBounds { index, len })?;
        row.set_separator(separator);
        Ok(())
    }

    /// Body transposed into columns, in schema order.
    pub fn columns(&self) -> Vec<Column<'_>> {
        self.schema
            .iter()
            .enumerate()
            .map(|(index, name)| Column {
                name,
                values: self.body().iter().map(|row| &row[index]).collect(),
            })
            .collect()
    }

    /// Body values of the column called `name`.
    pub fn column(&self, name: &str) -> Result<Vec<&str>> {
        let index = self
            .schema
            .position(name)
            .ok_or_else(|| TableError::UnknownColumn(name.to_string()))?;
        Ok(self.body().iter().map(|row| &row[index]).collect())
    }

    /// Display width of every column.
    pub fn column_widths(&self, headings: bool) -> Vec<usize> {
        text::column_widths(self, headings)
    }

    /// Render as aligned text, with or without the heading line.
    pub fn format(&self, headings: bool) -> String {
        self.format_with(&FormatOptions::new().with_headings(headings))
    }

    pub fn format_with(&self, options: &FormatOptions) -> String {
        text::render(self, options)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(true))
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.body().iter()
    }
}

impl Serialize for Table {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct TableView<'a> {
            headers: &'a Schema,
            rows: Vec<&'a [String]>,
            dividers: Vec<Divider>,
        }

        TableView {
            headers: &self.schema,
            rows: self.body().iter().map(Row::values).collect(),
            dividers: self.dividers().collect(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        let mut table = Table::from_names(["X", "Y"]).unwrap();
        table
            .append_values(["ab", "cd"])
            .unwrap()
            .append_values(["abcde", "c"])
            .unwrap();
        table
    }

    #[test]
    fn test_new_table_heading() {
        let table = Table::from_names(["Player Name", "Item Name"]).unwrap();

        assert_eq!(table.len(), 0);
        assert!(table.body().is_empty());
        assert_eq!(table.heading(), &["Player Name", "Item Name"]);
        assert_eq!(table.heading().schema(), *table.schema());
    }

    #[test]
    fn test_from_names_duplicate() {
        assert_eq!(
            Table::from_names(["a", "a"]).unwrap_err(),
            TableError::DuplicateColumn("a".to_string())
        );
    }

    #[test]
    fn test_body_round_trip() {
        let schema = Schema::new(["X", "Y"]).unwrap();
        let first = schema.build_row(["1", "2"]).unwrap();
        let second = schema.build_row(["3", "4"]).unwrap();

        let mut table = schema.new_table();
        table
            .append(first.clone())
            .unwrap()
            .append(second.clone())
            .unwrap();

        assert_eq!(table.body(), [first, second]);
    }

    #[test]
    fn test_append_schema_mismatch_leaves_table_unchanged() {
        let row = Schema::new(["A", "B"])
            .unwrap()
            .build_row(["1", "2"])
            .unwrap();
        let mut table = Table::from_names(["A", "C"]).unwrap();

        let err = table.append(row).unwrap_err();

        assert_eq!(
            err,
            TableError::SchemaMismatch {
                expected: "[A, C]".to_string(),
                actual: "[A, B]".to_string(),
            }
        );
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn test_append_values_arity_mismatch() {
        let mut table = sample_table();
        assert!(matches!(
            table.append_values(["only one"]),
            Err(TableError::RowArityMismatch {
                expected: 2,
                actual: 1
            })
        ));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_add_row_renders_values() {
        let mut table = Table::from_names(["Player Name", "Item Count"]).unwrap();
        table.add_row([1, 2]).unwrap();
        table.add_row(["Alice".to_string(), 7.to_string()]).unwrap();

        assert_eq!(table.body()[0], ["1", "2"]);
        assert_eq!(table.body()[1], ["Alice", "7"]);
    }

    #[test]
    fn test_add_row_mixed_types() {
        let schema = Schema::new(["Player Name", "Item Name", "Item Count"]).unwrap();
        let mut table = schema.new_table();
        let player = String::from("Alice");

        table.add_row(crate::row![player, "Sword", 1]).unwrap();
        table.add_row(crate::row!["Bob", 'x', 2.5,]).unwrap();

        assert_eq!(table.body()[0], ["Alice", "Sword", "1"]);
        assert_eq!(table.body()[1], ["Bob", "x", "2.5"]);
        assert!(matches!(
            table.add_row(crate::row!["Carol"]),
            Err(TableError::RowArityMismatch { expected: 3, actual: 1 })
        ));
    }

    #[test]
    fn test_append_row_from_pairs() {
        let mut table = Table::from_names(["a", "b"]).unwrap();
        let row = Row::from_pairs([("a", "1"), ("b", "2")]).unwrap();
        let reordered = Row::from_pairs([("b", "2"), ("a", "1")]).unwrap();

        assert!(table.append(row).is_ok());
        assert!(table.append(reordered).is_err());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_hline_positions() {
        let mut table = Table::from_names(["Name"]).unwrap();
        table.hline();
        table.append_values(["Alice"]).unwrap();
        table.hline();
        table.append_values(["Bob"]).unwrap();

        let dividers: Vec<Divider> = table.dividers().collect();
        assert_eq!(dividers, vec![Divider::Top, Divider::After(0)]);
    }

    #[test]
    fn test_hline_idempotent() {
        let mut table = Table::from_names(["Name"]).unwrap();
        table.append_values(["Alice"]).unwrap();
        table.hline();
        let once = table.format(true);

        table.hline();
        assert_eq!(table.format(true), once);
        assert_eq!(table.dividers().count(), 1);
    }

    #[test]
    fn test_columns_transposed() {
        let table = sample_table();
        let columns = table.columns();

        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].name, "X");
        assert_eq!(columns[0].values, vec!["ab", "abcde"]);
        assert_eq!(columns[1].name, "Y");
        assert_eq!(columns[1].values, vec!["cd", "c"]);
        assert_eq!(table.column("Y").unwrap(), vec!["cd", "c"]);
        assert!(table.column("Z").is_err());
    }

    #[test]
    fn test_format_without_headings() {
        let table = sample_table();
        assert_eq!(table.format(false), "ab    : cd\nabcde : c \n");
    }

    #[test]
    fn test_display_includes_headings() {
        let table = sample_table();
        assert_eq!(
            table.to_string(),
            "X     : Y \nab    : cd\nabcde : c \n"
        );
    }

    #[test]
    fn test_divider_scenario() {
        let mut table = Table::from_names(["Name"]).unwrap();
        table.append_values(["Alice"]).unwrap();
        table.hline();
        table.append_values(["Bob"]).unwrap();

        let output = table.format(true);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec!["Name ", "Alice", "-----", "Bob  "]);
    }

    #[test]
    fn test_row_separator() {
        let mut table = sample_table();
        table.set_row_separator(1, " | ").unwrap();

        assert_eq!(table.format(false), "ab    : cd\nabcde | c \n");
        assert!(table.set_row_separator(2, "|").is_err());

        table.set_separator(",");
        assert_eq!(table.format(true), "X    ,Y \nab   ,cd\nabcde,c \n");
    }

    #[test]
    fn test_iterate_body() {
        let table = sample_table();
        let firsts: Vec<&str> = table.into_iter().map(|row| &row[0]).collect();
        assert_eq!(firsts, vec!["ab", "abcde"]);
    }

    #[test]
    fn test_serialize() {
        let mut table = sample_table();
        table.hline();
        let value = serde_json::to_value(&table).unwrap();

        assert_eq!(value["headers"], serde_json::json!(["X", "Y"]));
        assert_eq!(
            value["rows"],
            serde_json::json!([["ab", "cd"], ["abcde", "c"]])
        );
        assert_eq!(value["dividers"], serde_json::json!([{ "after": 1 }]));
    }
}

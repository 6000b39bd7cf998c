//! Rows: fixed-length, immutable records bound to a schema.
//!
//! A [`Row`] can be addressed three ways:
//!
//! - by position: [`Row::get_by_position`] or `row[0]`
//! - by range: [`Row::get_by_range`], clamped to the row so it never panics
//! - by column name: [`Row::get_by_name`], [`Row::get`] or `row["Name"]`
//!
//! [`Row::cells`] accepts any of the three through [`CellIndex`].
//!
//! Cell values are fixed at construction. The only mutable part of a row is
//! its display separator, which affects rendering and nothing else.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Bound, Index, Range, RangeBounds};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::TableError;
use crate::schema::Schema;
use crate::Result;

/// Separator used to join cells when a row is rendered.
pub const DEFAULT_SEPARATOR: &str = " : ";

/// A fixed-length record of text cells bound to a [`Schema`].
#[derive(Debug, Clone)]
pub struct Row {
    schema: Schema,
    values: Vec<String>,
    separator: String,
}

/// Ways to address the cells of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellIndex<'a> {
    /// A single cell by zero-based position
    Position(usize),
    /// A half-open range of cells
    Range(Range<usize>),
    /// A single cell by column name
    Name(&'a str),
}

impl From<usize> for CellIndex<'_> {
    fn from(index: usize) -> Self {
        CellIndex::Position(index)
    }
}

impl From<Range<usize>> for CellIndex<'_> {
    fn from(range: Range<usize>) -> Self {
        CellIndex::Range(range)
    }
}

impl<'a> From<&'a str> for CellIndex<'a> {
    fn from(name: &'a str) -> Self {
        CellIndex::Name(name)
    }
}

impl<'a> From<&'a String> for CellIndex<'a> {
    fn from(name: &'a String) -> Self {
        CellIndex::Name(name)
    }
}

/// Result of a [`Row::cells`] lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cells<'a> {
    One(&'a str),
    Many(&'a [String]),
}

impl<'a> Cells<'a> {
    /// The single cell, if the lookup addressed one.
    pub fn one(self) -> Option<&'a str> {
        match self {
            Cells::One(value) => Some(value),
            Cells::Many(_) => None,
        }
    }

    /// The cells as a slice. A single cell is not widened into a slice.
    pub fn many(self) -> Option<&'a [String]> {
        match self {
            Cells::One(_) => None,
            Cells::Many(values) => Some(values),
        }
    }
}

impl Row {
    /// Create a row from a schema and positional values.
    ///
    /// Fails with [`TableError::RowArityMismatch`] if the number of values
    /// differs from the schema length.
    pub fn new<I, S>(schema: Schema, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.len() != schema.len() {
            return Err(TableError::RowArityMismatch {
                expected: schema.len(),
                actual: values.len(),
            });
        }
        Ok(Self::from_parts(schema, values))
    }

    /// Create a row from ordered `(name, value)` pairs.
    ///
    /// The order of the pairs becomes the column order. Fails with
    /// [`TableError::DuplicateColumn`] if a name repeats.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let (names, values): (Vec<String>, Vec<String>) = pairs
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .unzip();
        let schema = Schema::new(names)?;
        Ok(Self::from_parts(schema, values))
    }

    /// Caller guarantees `values.len() == schema.len()`.
    pub(crate) fn from_parts(schema: Schema, values: Vec<String>) -> Self {
        debug_assert_eq!(schema.len(), values.len());
        Self {
            schema,
            values,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All cell values in column order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Consume the row, returning its values.
    pub fn into_values(self) -> Vec<String> {
        self.values
    }

    /// Iterate over the cell values.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// The schema this row is bound to.
    pub fn schema(&self) -> Schema {
        self.schema.clone()
    }

    /// `(column name, value)` pairs in column order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &str)> {
        self.schema.iter().zip(self.iter())
    }

    pub fn get_by_position(&self, index: usize) -> Result<&str> {
        self.values
            .get(index)
            .map(String::as_str)
            .ok_or(TableError::IndexOutOfBounds {
                index,
                len: self.values.len(),
            })
    }

    /// Cells within `range`, clamped to the row.
    ///
    /// Out-of-range or inverted bounds yield a shorter or empty slice.
    pub fn get_by_range<R: RangeBounds<usize>>(&self, range: R) -> &[String] {
        let len = self.values.len();
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => len,
        }
        .min(len);

        if start >= end {
            &[]
        } else {
            &self.values[start..end]
        }
    }

    pub fn get_by_name(&self, name: &str) -> Result<&str> {
        self.get(name)
            .ok_or_else(|| TableError::UnknownColumn(name.to_string()))
    }

    /// Value of the column called `name`, or `None` if there is none.
    pub fn get<Q>(&self, name: &Q) -> Option<&str>
    where
        String: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.schema
            .position(name)
            .map(|index| self.values[index].as_str())
    }

    /// Value of the column called `name`, or `default`.
    pub fn get_or<'a, Q>(&'a self, name: &Q, default: &'a str) -> &'a str
    where
        String: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(name).unwrap_or(default)
    }

    /// Look up cells by position, range or name.
    pub fn cells<'a, I>(&self, index: I) -> Result<Cells<'_>>
    where
        I: Into<CellIndex<'a>>,
    {
        match index.into() {
            CellIndex::Position(index) => self.get_by_position(index).map(Cells::One),
            CellIndex::Range(range) => Ok(Cells::Many(self.get_by_range(range))),
            CellIndex::Name(name) => self.get_by_name(name).map(Cells::One),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.separator = separator.into();
    }

    /// Builder: replace the separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.set_separator(separator);
        self
    }
}

impl Index<usize> for Row {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.values[index]
    }
}

impl Index<&str> for Row {
    type Output = str;

    fn index(&self, name: &str) -> &str {
        match self.get(name) {
            Some(value) => value,
            None => panic!("no column named '{}' exists", name),
        }
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.values.join(self.separator.as_str()))
    }
}

// Equality covers schema and values; the separator only affects display.
impl PartialEq for Row {
    fn eq(&self, other: &Self) -> bool {
        self.schema == other.schema && self.values == other.values
    }
}

impl Eq for Row {}

impl Hash for Row {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.schema.hash(state);
        self.values.hash(state);
    }
}

impl<S: AsRef<str>> PartialEq<[S]> for Row {
    fn eq(&self, other: &[S]) -> bool {
        self.values.len() == other.len()
            && self
                .values
                .iter()
                .zip(other)
                .all(|(value, other)| value == other.as_ref())
    }
}

impl<S: AsRef<str>, const N: usize> PartialEq<[S; N]> for Row {
    fn eq(&self, other: &[S; N]) -> bool {
        *self == other[..]
    }
}

impl<S: AsRef<str>> PartialEq<Vec<S>> for Row {
    fn eq(&self, other: &Vec<S>) -> bool {
        *self == other[..]
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.items() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

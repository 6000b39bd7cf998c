//! Column schemas.
//!
//! A [`Schema`] is the ordered list of unique column names that defines the
//! shape of a [`Row`] or a [`Table`]. Schemas are immutable and cheap to
//! clone: a table and every row it holds share the same name storage, but
//! two schemas are always compared by their names, never by identity.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::error::TableError;
use crate::row::Row;
use crate::table::Table;
use crate::Result;

/// Ordered set of unique column names.
#[derive(Debug, Clone)]
pub struct Schema {
    names: Arc<[String]>,
    positions: Arc<HashMap<String, usize>>,
}

impl Schema {
    /// Create a schema from column names, preserving their order.
    ///
    /// Fails with [`TableError::DuplicateColumn`] if any name repeats.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut positions = HashMap::with_capacity(names.len());

        for (index, name) in names.iter().enumerate() {
            if positions.insert(name.clone(), index).is_some() {
                return Err(TableError::DuplicateColumn(name.clone()));
            }
        }

        Ok(Self {
            names: names.into(),
            positions: Arc::new(positions),
        })
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Column names in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Name of the column at `index`, if any.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Position of the column called `name`, if any.
    pub fn position<Q>(&self, name: &Q) -> Option<usize>
    where
        String: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.get(name).copied()
    }

    /// True if a column called `name` exists.
    pub fn contains<Q>(&self, name: &Q) -> bool
    where
        String: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(name)
    }

    /// Iterate over the column names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Build a row bound to this schema.
    ///
    /// The Nth value is stored under the Nth column name. Fails with
    /// [`TableError::RowArityMismatch`] when the value count differs from
    /// the number of columns.
    pub fn build_row<I, S>(&self, values: I) -> Result<Row>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Row::new(self.clone(), values)
    }

    /// The heading row: a row whose values are the column names.
    pub fn heading_row(&self) -> Row {
        Row::from_parts(self.clone(), self.names.to_vec())
    }

    /// Create an empty table (heading row only) bound to this schema.
    pub fn new_table(&self) -> Table {
        Table::new(self.clone())
    }
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names
    }
}

impl Eq for Schema {}

impl Hash for Schema {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.names.hash(state);
    }
}

impl Index<usize> for Schema {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.names[index]
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.names.join(", "))
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.names.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_preserves_order() {
        let schema = Schema::new(["b", "a", "c"]).unwrap();
        assert_eq!(schema.len(), 3);
        assert_eq!(schema.names(), ["b", "a", "c"]);
        assert_eq!(schema.position("a"), Some(1));
        assert_eq!(&schema[2], "c");
    }

    #[test]
    fn test_duplicate_column() {
        let err = Schema::new(["a", "b", "a"]).unwrap_err();
        assert_eq!(err, TableError::DuplicateColumn("a".to_string()));
    }

    #[test]
    fn test_empty_schema() {
        let schema = Schema::new(Vec::<String>::new()).unwrap();
        assert!(schema.is_empty());
        assert_eq!(schema.to_string(), "[]");
    }

    #[test]
    fn test_equality_is_by_names() {
        let a = Schema::new(["x", "y"]).unwrap();
        let b = Schema::new(vec!["x".to_string(), "y".to_string()]).unwrap();
        let reordered = Schema::new(["y", "x"]).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, reordered);
    }

    #[test]
    fn test_build_row() {
        let schema = Schema::new(["X", "Y"]).unwrap();
        let row = schema.build_row(["1", "2"]).unwrap();

        assert_eq!(row.schema(), schema);
        assert_eq!(row.values(), ["1", "2"]);
        assert_eq!(row.get_by_name("Y").unwrap(), "2");
    }

    #[test]
    fn test_build_row_arity_mismatch() {
        let schema = Schema::new(["X", "Y"]).unwrap();

        assert_eq!(
            schema.build_row(["1"]).unwrap_err(),
            TableError::RowArityMismatch {
                expected: 2,
                actual: 1
            }
        );
        assert!(schema.build_row(["1", "2", "3"]).is_err());
    }

    #[test]
    fn test_new_table_has_heading_only() {
        let schema = Schema::new(["Name", "Count"]).unwrap();
        let table = schema.new_table();

        assert!(table.is_empty());
        assert_eq!(table.heading().values(), ["Name", "Count"]);
        assert_eq!(table.schema(), &schema);
    }

    #[test]
    fn test_serialize_as_names() {
        let schema = Schema::new(["a", "b"]).unwrap();
        let json = serde_json::to_string(&schema).unwrap();
        assert_eq!(json, r#"["a","b"]"#);
    }
}

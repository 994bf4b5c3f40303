//! Rectangular record set of raw textual values

use crate::error::{Error, Result};

/// Ordered rows sharing one column set.
///
/// Every row holds exactly `columns().len()` values; constructors reject
/// anything else, so column lookups never go out of bounds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordSet {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RecordSet {
    /// Create a record set, checking that every row matches the header width.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        if let Some(bad) = rows.iter().find(|r| r.len() != columns.len()) {
            return Err(Error::ShapeMismatch {
                expected: columns.len(),
                actual: bad.len(),
            });
        }
        Ok(Self { columns, rows })
    }

    /// Create an empty record set with the given header.
    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(Error::ShapeMismatch {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Position of the first column named `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Values of the column at `index`, top to bottom.
    pub fn column_at(&self, index: usize) -> Vec<&str> {
        self.rows.iter().map(|r| r[index].as_str()).collect()
    }

    /// Values of the column named `name`.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        self.column_index(name).map(|i| self.column_at(i))
    }

    /// Value at (`row`, `name`).
    pub fn value(&self, row: usize, name: &str) -> Option<&str> {
        let idx = self.column_index(name)?;
        self.rows.get(row).map(|r| r[idx].as_str())
    }

    /// Record set holding the last `n` rows.
    pub fn tail(&self, n: usize) -> Self {
        let start = self.rows.len().saturating_sub(n);
        Self {
            columns: self.columns.clone(),
            rows: self.rows[start..].to_vec(),
        }
    }

    /// Keep the named columns that exist, in the order given.
    pub fn project(&self, names: &[&str]) -> Self {
        let indices: Vec<usize> = names.iter().filter_map(|n| self.column_index(n)).collect();
        Self {
            columns: indices.iter().map(|&i| self.columns[i].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|r| indices.iter().map(|&i| r[i].clone()).collect())
                .collect(),
        }
    }

    /// Append a column, filling every row with `fill`.
    pub fn add_column(&mut self, name: impl Into<String>, fill: &str) {
        self.columns.push(name.into());
        for row in &mut self.rows {
            row.push(fill.to_string());
        }
    }

    /// Append a column with one value per row.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<String>) -> Result<()> {
        if values.len() != self.rows.len() {
            return Err(Error::ShapeMismatch {
                expected: self.rows.len(),
                actual: values.len(),
            });
        }
        self.columns.push(name.into());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
        Ok(())
    }

    /// Concatenate `other` below `self`. The result carries the union of both
    /// headers (own columns first); cells a side does not have are blank.
    pub fn concat(&self, other: &Self) -> Self {
        let mut columns = self.columns.clone();
        for c in &other.columns {
            if !columns.contains(c) {
                columns.push(c.clone());
            }
        }

        let realign = |set: &Self| -> Vec<Vec<String>> {
            let mapping: Vec<Option<usize>> =
                columns.iter().map(|c| set.column_index(c)).collect();
            set.rows
                .iter()
                .map(|r| {
                    mapping
                        .iter()
                        .map(|m| m.map(|i| r[i].clone()).unwrap_or_default())
                        .collect()
                })
                .collect()
        };

        let mut rows = realign(self);
        rows.extend(realign(other));
        Self { columns, rows }
    }
}

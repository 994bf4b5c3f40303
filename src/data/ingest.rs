//! Tabular ingestion with single-column self-healing
//!
//! Honeypot exports are sometimes written with each line quoted as one field,
//! which a normal CSV parse turns into a single very wide column. The ingestor
//! detects that shape and splits the rows back out.

use super::record::RecordSet;
use crate::error::{Error, Result};
use csv::ReaderBuilder;
use std::path::Path;

/// CSV reader producing rectangular [`RecordSet`]s.
#[derive(Debug, Clone)]
pub struct CsvIngestor {
    delimiter: u8,
    heal_min_parts: usize,
}

impl Default for CsvIngestor {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvIngestor {
    /// Comma-delimited reader; heals single-column parses whose first value
    /// splits into more than three parts.
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            heal_min_parts: 4,
        }
    }

    /// Use a different field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Read `path` into a record set.
    ///
    /// Short rows are padded with blanks. A missing file, an absent header or a
    /// row wider than the header is an [`Error::Ingest`].
    pub fn read(&self, path: &Path) -> Result<RecordSet> {
        if !path.exists() {
            return Err(Error::ingest(path, "file not found"));
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_path(path)
            .map_err(|e| Error::ingest(path, e.to_string()))?;

        let columns: Vec<String> = reader
            .headers()
            .map_err(|e| Error::ingest(path, e.to_string()))?
            .iter()
            .map(str::to_string)
            .collect();

        if columns.is_empty() || columns.iter().all(String::is_empty) {
            return Err(Error::ingest(path, "no header row"));
        }

        let width = columns.len();
        let mut rows = Vec::new();
        for (n, record) in reader.records().enumerate() {
            let record = record.map_err(|e| Error::ingest(path, e.to_string()))?;
            if record.len() > width {
                return Err(Error::ingest(
                    path,
                    format!(
                        "row {} has {} fields, header has {width}",
                        n + 2,
                        record.len()
                    ),
                ));
            }
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            row.resize(width, String::new());
            rows.push(row);
        }

        let set = RecordSet::new(columns, rows)?;
        Ok(self.heal(set))
    }

    /// Re-split a single-column record set whose first value looks like a
    /// whole delimited line. The first split row becomes the header.
    pub fn heal(&self, set: RecordSet) -> RecordSet {
        if set.width() != 1 {
            return set;
        }
        let delimiter = char::from(self.delimiter);
        let Some(first) = set.rows().first() else {
            return set;
        };
        if first[0].split(delimiter).count() < self.heal_min_parts {
            return set;
        }

        let mut split: Vec<Vec<String>> = set
            .rows()
            .iter()
            .map(|r| r[0].split(delimiter).map(str::to_string).collect())
            .collect();
        let mut header = split.remove(0);

        let width = split
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(header.len()))
            .max()
            .unwrap_or(0);
        for i in header.len()..width {
            header.push(format!("column_{i}"));
        }
        for row in &mut split {
            row.resize(width, String::new());
        }

        RecordSet::new(header, split).unwrap_or(set)
    }
}

/// Read a comma-delimited file with the default ingestor.
pub fn read_records(path: impl AsRef<Path>) -> Result<RecordSet> {
    CsvIngestor::new().read(path.as_ref())
}

//! Raw tabular data: ingestion and numeric coercion

pub mod coerce;
mod ingest;
mod record;

pub use coerce::{coerce_column, coerce_value, fill_missing, is_wholly_missing, length_proxy};
pub use ingest::{read_records, CsvIngestor};
pub use record::RecordSet;

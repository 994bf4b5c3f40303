//! # honeyset
//!
//! Honeypot log pipeline: ingest heterogeneous CSV exports, resolve which
//! columns carry the attack label and the canonical features, normalize every
//! record into a fixed four-feature vector, equalize label frequencies, and
//! align unseen inputs to a trained model's column order.
//!
//! ## Stages
//!
//! - [`data`]: tolerant CSV ingestion and numeric coercion
//! - [`schema`]: label and feature column discovery
//! - [`features`]: canonical feature vectors and session aggregation
//! - [`balance`]: interpolation with a replacement fallback
//! - [`io`]: balanced dataset and artifact persistence
//! - [`model`]: classifier interface, label encoding, model artifact
//! - [`eval`]: train/test split and classification report
//! - [`align`]: inference input selection and column alignment
//!
//! ## Example
//!
//! ```no_run
//! use honeyset::balance::{balance, BalanceConfig};
//! use honeyset::data::read_records;
//! use honeyset::features::labeled_vectors;
//! use honeyset::io::write_balanced_dataset;
//! use honeyset::schema::SchemaResolver;
//!
//! let records = read_records("feature_engineered_data.csv")?;
//! let schema = SchemaResolver::default().resolve(&records)?;
//! let report = balance(labeled_vectors(&records, &schema), &BalanceConfig::default())?;
//! write_balanced_dataset("balanced_data.csv", &report.records)?;
//! # Ok::<(), honeyset::Error>(())
//! ```

pub mod align;
pub mod balance;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod eval;
pub mod features;
pub mod io;
pub mod model;
pub mod schema;

pub use error::{Error, Result};

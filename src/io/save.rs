//! Artifact saving

use super::atomic::write_atomic;
use super::format::{ModelFormat, SaveConfig};
use crate::error::{Error, Result};
use serde::Serialize;
use std::path::Path;

/// Serialize `value` in the configured format and replace `path` with it.
///
/// # Example
///
/// ```no_run
/// use honeyset::io::{save_artifact, ModelFormat, SaveConfig};
/// use honeyset::model::LabelEncoding;
///
/// let encoding = LabelEncoding::fit(["Brute Force", "Other"]);
/// let config = SaveConfig::new(ModelFormat::Json).with_pretty(true);
/// save_artifact(&encoding, "label_encoder.json", &config).unwrap();
/// ```
pub fn save_artifact<T: Serialize>(
    value: &T,
    path: impl AsRef<Path>,
    config: &SaveConfig,
) -> Result<()> {
    let data = match config.format {
        ModelFormat::Json => {
            if config.pretty {
                serde_json::to_string_pretty(value)
                    .map_err(|e| Error::Serialization(format!("JSON serialization failed: {e}")))?
            } else {
                serde_json::to_string(value)
                    .map_err(|e| Error::Serialization(format!("JSON serialization failed: {e}")))?
            }
        }
        ModelFormat::Yaml => serde_yaml::to_string(value)
            .map_err(|e| Error::Serialization(format!("YAML serialization failed: {e}")))?,
    };

    write_atomic(path, data.as_bytes())
}

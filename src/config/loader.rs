//! YAML pipeline spec loading

use super::schema::PipelineSpec;
use super::validate::validate_config;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Load and validate a pipeline spec from a YAML file
///
/// # Example
///
/// ```no_run
/// use honeyset::config::load_config;
///
/// let spec = load_config("pipeline.yaml")?;
/// println!("balancing {}", spec.balance.input.display());
/// # Ok::<(), honeyset::Error>(())
/// ```
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<PipelineSpec> {
    let yaml_content = fs::read_to_string(config_path.as_ref()).map_err(|e| {
        Error::ConfigError(format!(
            "Failed to read config file {}: {}",
            config_path.as_ref().display(),
            e
        ))
    })?;

    parse_config(&yaml_content)
}

/// Parse and validate a pipeline spec from YAML text.
///
/// An empty document yields the default spec.
pub fn parse_config(yaml_content: &str) -> Result<PipelineSpec> {
    let spec: PipelineSpec = if yaml_content.trim().is_empty() {
        PipelineSpec::default()
    } else {
        serde_yaml::from_str(yaml_content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse YAML config: {e}")))?
    };

    validate_config(&spec).map_err(|e| Error::ConfigError(format!("Invalid config: {e}")))?;

    Ok(spec)
}

/// Load `path` when given, otherwise the validated default spec
pub fn load_or_default(config_path: Option<&Path>) -> Result<PipelineSpec> {
    match config_path {
        Some(path) => load_config(path),
        None => parse_config(""),
    }
}

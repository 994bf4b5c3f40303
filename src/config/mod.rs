//! Pipeline configuration
//!
//! - `schema`: YAML pipeline spec with per-stage sections
//! - `loader`: read, parse and validate a spec file
//! - `validate`: range and consistency checks
//! - `cli`: clap argument types and command-line overrides

mod cli;
mod loader;
mod schema;
mod validate;

pub use cli::{
    apply_overrides, parse_args, AggregateArgs, BalanceArgs, Cli, Command, InfoArgs, InspectArgs,
    OutputFormat, PredictArgs, TrainArgs, ValidateArgs,
};
pub use loader::{load_config, load_or_default, parse_config};
pub use schema::{AggregateSpec, BalanceSpec, PipelineSpec, PredictSpec, TrainSection};
pub use validate::{validate_config, ValidationError};

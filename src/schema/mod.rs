//! Column discovery for heterogeneous honeypot exports
//!
//! Maps whatever columns an export carries onto two roles: the label column
//! and the sources of the four canonical features. Discovery runs as ordered
//! strategy chains (exact name first, heuristics after), so the same column
//! names always resolve the same way.

mod config;
mod resolver;
mod strategy;
mod types;

#[cfg(test)]
mod tests;

pub use config::ResolverConfig;
pub use resolver::{FeatureMapping, ResolvedSchema, SchemaResolver};
pub use strategy::{
    content_sniff, exact_name, name_fragments, ResolvedColumn, Strategy, StrategyChain,
};
pub use types::{CanonicalFeature, Discovery, CANONICAL_COLUMNS};

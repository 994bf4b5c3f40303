//! Label and feature column resolution

use super::config::ResolverConfig;
use super::strategy::{content_sniff, exact_name, name_fragments, ResolvedColumn, StrategyChain};
use super::types::{CanonicalFeature, Discovery};
use crate::data::RecordSet;
use crate::error::{Error, Result};

/// Where each canonical feature comes from in a particular input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeatureMapping {
    /// Source columns for the three directly numeric features
    pub columns: Vec<(CanonicalFeature, ResolvedColumn)>,
    /// Field feeding the categorical proxy, if any
    pub categorical: Option<String>,
}

impl FeatureMapping {
    /// Source column for `feature`; `None` means it is synthesized as zeros.
    pub fn get(&self, feature: CanonicalFeature) -> Option<&ResolvedColumn> {
        self.columns
            .iter()
            .find(|(f, _)| *f == feature)
            .map(|(_, c)| c)
    }

    /// Canonical features with no source column.
    pub fn synthesized(&self) -> Vec<CanonicalFeature> {
        CanonicalFeature::ALL
            .into_iter()
            .filter(|f| match f {
                CanonicalFeature::CommonCommandsEnc => self.categorical.is_none(),
                other => self.get(*other).is_none(),
            })
            .collect()
    }
}

/// Fully resolved input schema for the balancing pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSchema {
    pub label: ResolvedColumn,
    pub features: FeatureMapping,
}

/// Maps arbitrary input columns onto the label and canonical feature roles.
#[derive(Debug, Clone, Default)]
pub struct SchemaResolver {
    config: ResolverConfig,
}

impl SchemaResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Exact preferred name, then content sniffing.
    pub fn label_chain(&self) -> StrategyChain<'_> {
        StrategyChain::new()
            .then(
                Discovery::ExactName,
                exact_name(self.config.label_candidates.as_slice()),
            )
            .then(
                Discovery::ContentSniff,
                content_sniff(self.config.label_tokens.as_slice(), self.config.sample_rows),
            )
    }

    /// Exact canonical name, then name fragments.
    pub fn feature_chain(feature: CanonicalFeature) -> StrategyChain<'static> {
        let name = feature.name();
        StrategyChain::new()
            .then(Discovery::ExactName, move |records: &RecordSet| {
                records.has_column(name).then(|| name.to_string())
            })
            .then(
                Discovery::NameFragments,
                name_fragments(feature.name_fragments()),
            )
    }

    /// Locate the label column or report that none exists.
    pub fn resolve_label(&self, records: &RecordSet) -> Result<ResolvedColumn> {
        self.label_chain()
            .resolve(records)
            .ok_or_else(|| Error::NoLabelColumn {
                columns: records.columns().to_vec(),
            })
    }

    /// Locate the source of every canonical feature.
    ///
    /// The categorical proxy is never matched to an existing column; it is
    /// derived from the first configured categorical field present.
    pub fn resolve_features(&self, records: &RecordSet) -> FeatureMapping {
        let columns = CanonicalFeature::ALL
            .into_iter()
            .filter(|f| *f != CanonicalFeature::CommonCommandsEnc)
            .filter_map(|f| Self::feature_chain(f).resolve(records).map(|c| (f, c)))
            .collect();

        let categorical = self
            .config
            .categorical_fields
            .iter()
            .find(|c| records.has_column(c))
            .cloned();

        FeatureMapping {
            columns,
            categorical,
        }
    }

    /// Resolve label and features together.
    pub fn resolve(&self, records: &RecordSet) -> Result<ResolvedSchema> {
        let label = self.resolve_label(records)?;
        Ok(ResolvedSchema {
            label,
            features: self.resolve_features(records),
        })
    }
}

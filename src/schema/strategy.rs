//! Ordered column-discovery strategies
//!
//! Each strategy is a pure function from a record set to an optional column
//! name. A chain evaluates them in order and keeps the first hit.

use super::types::Discovery;
use crate::data::RecordSet;

type FindFn<'a> = Box<dyn Fn(&RecordSet) -> Option<String> + 'a>;

/// A column located by a strategy chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    /// Column name in the input
    pub name: String,
    /// Strategy that found it
    pub discovery: Discovery,
}

/// One named step of a chain
pub struct Strategy<'a> {
    discovery: Discovery,
    find: FindFn<'a>,
}

impl std::fmt::Debug for Strategy<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Strategy")
            .field("discovery", &self.discovery)
            .finish_non_exhaustive()
    }
}

/// Strategies evaluated in insertion order
#[derive(Debug, Default)]
pub struct StrategyChain<'a> {
    strategies: Vec<Strategy<'a>>,
}

impl<'a> StrategyChain<'a> {
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Append a strategy.
    pub fn then<F>(mut self, discovery: Discovery, find: F) -> Self
    where
        F: Fn(&RecordSet) -> Option<String> + 'a,
    {
        self.strategies.push(Strategy {
            discovery,
            find: Box::new(find),
        });
        self
    }

    /// Run the chain; the first strategy returning a column wins.
    pub fn resolve(&self, records: &RecordSet) -> Option<ResolvedColumn> {
        self.strategies.iter().find_map(|s| {
            (s.find)(records).map(|name| ResolvedColumn {
                name,
                discovery: s.discovery,
            })
        })
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

/// First candidate (in preference order) that names an existing column.
pub fn exact_name<'a, S: AsRef<str>>(
    candidates: &'a [S],
) -> impl Fn(&RecordSet) -> Option<String> + 'a {
    move |records| {
        candidates
            .iter()
            .map(AsRef::as_ref)
            .find(|c| records.has_column(c))
            .map(str::to_string)
    }
}

/// First column (in column order) whose leading `sample_rows` values contain
/// one of `tokens` after trimming and lower-casing.
pub fn content_sniff<'a, S: AsRef<str>>(
    tokens: &'a [S],
    sample_rows: usize,
) -> impl Fn(&RecordSet) -> Option<String> + 'a {
    move |records| {
        (0..records.width()).find_map(|i| {
            let hit = records.rows().iter().take(sample_rows).any(|row| {
                let value = row[i].trim().to_lowercase();
                tokens.iter().any(|t| t.as_ref() == value)
            });
            hit.then(|| records.columns()[i].clone())
        })
    }
}

/// First column whose lower-cased name contains every fragment.
pub fn name_fragments<'a>(
    fragments: &'a [&'a str],
) -> impl Fn(&RecordSet) -> Option<String> + 'a {
    move |records| {
        if fragments.is_empty() {
            return None;
        }
        records
            .columns()
            .iter()
            .find(|c| {
                let lower = c.to_lowercase();
                fragments.iter().all(|f| lower.contains(f))
            })
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(columns: &[&str], rows: &[&[&str]]) -> RecordSet {
        RecordSet::new(
            columns.iter().map(|c| c.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|v| v.to_string()).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_chain_takes_first_success() {
        let set = records(&["b", "a"], &[&["1", "2"]]);
        let chain = StrategyChain::new()
            .then(Discovery::ExactName, |_| None)
            .then(Discovery::NameFragments, |r| Some(r.columns()[1].clone()))
            .then(Discovery::ContentSniff, |_| Some("never".to_string()));

        let found = chain.resolve(&set).unwrap();
        assert_eq!(found.name, "a");
        assert_eq!(found.discovery, Discovery::NameFragments);
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn test_exact_name_respects_preference_order() {
        let set = records(&["type", "label"], &[]);
        let candidates = ["attack_type", "label", "type"];
        assert_eq!(exact_name(&candidates)(&set), Some("label".to_string()));
    }

    #[test]
    fn test_content_sniff_only_samples_leading_rows() {
        let leading: &[&str] = &["x", "1"];
        let mut rows = vec![leading; 3];
        rows.push(&["Brute Force", "2"]);
        let set = records(&["tag", "n"], &rows);
        let tokens = ["brute force"];

        assert_eq!(content_sniff(&tokens, 3)(&set), None);
        assert_eq!(content_sniff(&tokens, 4)(&set), Some("tag".to_string()));
    }

    #[test]
    fn test_content_sniff_is_exact_membership() {
        let set = records(&["msg"], &[&["other things happened"]]);
        let tokens = ["other"];
        assert_eq!(content_sniff(&tokens, 20)(&set), None);
    }

    #[test]
    fn test_name_fragments_require_all() {
        let set = records(&["duration", "session_time_duration"], &[]);
        assert_eq!(
            name_fragments(&["duration", "time"])(&set),
            Some("session_time_duration".to_string())
        );
        assert_eq!(name_fragments(&[])(&set), None);
    }
}

//! Canonical feature roles and discovery provenance

use serde::{Deserialize, Serialize};

/// One of the four fixed numeric features every record is normalized into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalFeature {
    /// Session length in seconds
    SessionDuration,
    /// Command-like or login events in the session
    CommandCount,
    /// Failed login attempts
    FailedLogins,
    /// Numeric proxy for the categorical command tag
    CommonCommandsEnc,
}

impl CanonicalFeature {
    /// All features in contract order.
    pub const ALL: [Self; 4] = [
        Self::SessionDuration,
        Self::CommandCount,
        Self::FailedLogins,
        Self::CommonCommandsEnc,
    ];

    /// Column name in the balanced dataset.
    pub fn name(self) -> &'static str {
        match self {
            Self::SessionDuration => "session_duration",
            Self::CommandCount => "command_count",
            Self::FailedLogins => "failed_logins",
            Self::CommonCommandsEnc => "common_commands_enc",
        }
    }

    /// Fragments a column name must all contain (case-insensitive) to be taken
    /// for this feature when no column carries the exact name. The categorical
    /// proxy is derived, never matched this way.
    pub fn name_fragments(self) -> &'static [&'static str] {
        match self {
            Self::SessionDuration => &["duration", "time"],
            Self::CommandCount => &["command", "count"],
            Self::FailedLogins => &["failed", "login"],
            Self::CommonCommandsEnc => &[],
        }
    }
}

impl std::fmt::Display for CanonicalFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Column names of the feature contract, in order.
pub const CANONICAL_COLUMNS: [&str; 4] = [
    "session_duration",
    "command_count",
    "failed_logins",
    "common_commands_enc",
];

/// Which strategy located a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discovery {
    /// Column name equals a preferred name
    ExactName,
    /// Sampled values contain a known label token
    ContentSniff,
    /// Column name contains every domain fragment
    NameFragments,
}

impl std::fmt::Display for Discovery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExactName => write!(f, "exact name"),
            Self::ContentSniff => write!(f, "content sniff"),
            Self::NameFragments => write!(f, "name fragments"),
        }
    }
}

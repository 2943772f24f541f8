//! MySQL full-text match modifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Search modifier appended inside the `AGAINST (...)` clause.
///
/// `Default` emits no modifier text, which MySQL treats as natural language
/// mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    #[default]
    Default,
    NaturalLanguage,
    QueryExpansion,
    Boolean,
}

impl MatchMode {
    /// The SQL modifier text, empty for `Default`.
    pub fn sql_modifier(&self) -> &'static str {
        match self {
            MatchMode::Default => "",
            MatchMode::NaturalLanguage => "IN NATURAL LANGUAGE MODE",
            MatchMode::QueryExpansion => "WITH QUERY EXPANSION",
            MatchMode::Boolean => "IN BOOLEAN MODE",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_modifier())
    }
}

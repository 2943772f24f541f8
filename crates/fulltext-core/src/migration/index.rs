//! Explicit FULLTEXT index descriptors.

use serde::{Deserialize, Serialize};

use crate::error::{FulltextError, Result};
use crate::model::{FullText, ModelDescriptor};
use crate::schema::strip_quotes;

/// Dialect prefix marking an index as FULLTEXT in MySQL.
pub const MYSQL_FULLTEXT_PREFIX: &str = "FULLTEXT";

/// An explicit FULLTEXT index descriptor.
///
/// For codebases that manage schema through external migration tooling
/// instead of automatic DDL at table creation. The index name follows the
/// `idx_<table>_fulltext` convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FulltextIndex {
    /// Index name, `idx_<table>_fulltext`.
    pub name: String,
    /// Table the index is created on.
    pub table: String,
    /// Covered columns, quote-stripped.
    pub columns: Vec<String>,
    /// Dialect-specific prefix marking the index kind.
    pub prefix: String,
}

impl FulltextIndex {
    /// Build the index descriptor for a statically declared model.
    pub fn for_model<M: FullText>() -> Result<Self> {
        Self::for_descriptor(&M::descriptor())
    }

    /// Build the index descriptor from a runtime descriptor.
    ///
    /// Requires both a table name and a non-empty column list.
    pub fn for_descriptor(descriptor: &ModelDescriptor) -> Result<Self> {
        if descriptor.table.is_empty() {
            return Err(FulltextError::MissingTableName {
                model: descriptor.model.clone(),
            });
        }
        descriptor.validate()?;

        Ok(Self {
            name: format!("idx_{}_fulltext", descriptor.table),
            table: descriptor.table.clone(),
            columns: descriptor.columns.iter().map(|c| strip_quotes(c)).collect(),
            prefix: MYSQL_FULLTEXT_PREFIX.to_string(),
        })
    }

    /// SQL creating the index on an existing table.
    pub fn create_sql(&self) -> String {
        format!(
            "CREATE {} INDEX {} ON {} ({})",
            self.prefix,
            self.name,
            self.table,
            self.columns.join(", ")
        )
    }

    /// SQL dropping the index.
    pub fn drop_sql(&self) -> String {
        format!("DROP INDEX {} ON {}", self.name, self.table)
    }
}

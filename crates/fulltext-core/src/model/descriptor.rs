//! Runtime model descriptors.

use serde::{Deserialize, Serialize};

use crate::error::{FulltextError, Result};

/// Runtime description of a full-text capable model.
///
/// Usually obtained from `FullText::descriptor()`, but can be built directly
/// for models only known at runtime (e.g. reflected from an external schema
/// definition).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    /// Model type name, used in error messages.
    pub model: String,
    /// Backing table name.
    pub table: String,
    /// Ordered columns covered by the FULLTEXT index.
    pub columns: Vec<String>,
    /// Whether index DDL is queued automatically at registration.
    pub auto_index: bool,
}

impl ModelDescriptor {
    /// Create a descriptor with automatic index creation enabled.
    pub fn new(model: impl Into<String>, table: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            model: model.into(),
            table: table.into(),
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
            auto_index: true,
        }
    }

    /// Toggle automatic index creation.
    pub fn with_auto_index(mut self, auto_index: bool) -> Self {
        self.auto_index = auto_index;
        self
    }

    /// Check the non-empty column list invariant.
    pub fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(FulltextError::MissingColumns {
                model: self.model.clone(),
            });
        }
        Ok(())
    }

    /// Whether this model can be searched at all.
    pub fn is_searchable(&self) -> bool {
        !self.columns.is_empty()
    }

    /// Resolve each declared column to a fully qualified reference.
    ///
    /// Columns come back as `` `table`.column ``, ready for interpolation
    /// into a MATCH clause.
    pub fn qualified_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|c| format!("`{}`.{}", self.table, c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_columns() {
        let desc = ModelDescriptor::new("Comment", "comments", &[]);
        let err = desc.validate().unwrap_err();
        assert_eq!(err.to_string(), "Model Comment: no full-text columns defined");
    }

    #[test]
    fn test_validate_accepts_declared_columns() {
        let desc = ModelDescriptor::new("Article", "articles", &["title", "body"]);
        assert!(desc.validate().is_ok());
        assert!(desc.is_searchable());
    }

    #[test]
    fn test_qualified_columns() {
        let desc = ModelDescriptor::new("Article", "articles", &["title", "body"]);
        assert_eq!(
            desc.qualified_columns(),
            vec!["`articles`.title", "`articles`.body"]
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let desc = ModelDescriptor::new("Article", "articles", &["title"]).with_auto_index(false);
        let json = serde_json::to_string(&desc).unwrap();
        assert!(json.contains("\"autoIndex\":false"));

        let back: ModelDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, desc);
    }
}

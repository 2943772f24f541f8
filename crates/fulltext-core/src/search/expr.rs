//! The `MATCH ... AGAINST` search predicate and its dialect compiler.

use tracing::debug;

use crate::dialect::Dialect;
use crate::error::{FulltextError, Result};
use crate::model::{FullText, ModelDescriptor};

use super::mode::MatchMode;

/// A compiled SQL fragment with its ordered bind parameters.
///
/// The fragment is a boolean expression, splicable anywhere the host query
/// accepts one (typically a WHERE clause). Parameters use `?` placeholders;
/// the search term always travels as a parameter, never as interpolated
/// text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlFragment {
    /// Rendered SQL text.
    pub sql: String,
    /// Bind parameter values, in placeholder order.
    pub params: Vec<String>,
}

impl SqlFragment {
    /// Split the fragment into SQL text and parameters.
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.sql, self.params)
    }
}

/// A full-text search predicate over a model's declared columns.
///
/// Constructed per query, immutable, and consumed by [`compile`](Self::compile)
/// when the outer query is rendered:
///
/// ```rust,ignore
/// use fulltext_core::{Dialect, FullTextSearch, MatchMode};
///
/// let fragment = FullTextSearch::new::<Article>("spam ham")
///     .mode(MatchMode::Boolean)
///     .compile(Dialect::MySql)?;
///
/// let sql = format!("SELECT * FROM articles WHERE {}", fragment.sql);
/// ```
#[derive(Debug, Clone)]
pub struct FullTextSearch {
    term: String,
    model: ModelDescriptor,
    mode: MatchMode,
}

impl FullTextSearch {
    /// Search a statically declared model with the default mode.
    pub fn new<M: FullText>(term: &str) -> Self {
        Self::against(term, M::descriptor())
    }

    /// Search a runtime-described model with the default mode.
    pub fn against(term: &str, model: ModelDescriptor) -> Self {
        Self {
            term: term.to_string(),
            model,
            mode: MatchMode::default(),
        }
    }

    /// Override the match mode.
    pub fn mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// The search term carried as a bind parameter.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The target model descriptor.
    pub fn model(&self) -> &ModelDescriptor {
        &self.model
    }

    /// Render the dialect-specific SQL fragment.
    ///
    /// Fails with `UnsupportedDialect` for anything but MySQL, and with
    /// `NotFullTextable` when the target model declares no full-text
    /// columns.
    pub fn compile(&self, dialect: Dialect) -> Result<SqlFragment> {
        match dialect {
            Dialect::MySql => self.compile_mysql(),
            other => Err(FulltextError::UnsupportedDialect { dialect: other }),
        }
    }

    fn compile_mysql(&self) -> Result<SqlFragment> {
        if !self.model.is_searchable() {
            return Err(FulltextError::NotFullTextable {
                model: self.model.model.clone(),
            });
        }

        let cols = self.model.qualified_columns().join(", ");
        let modifier = self.mode.sql_modifier();
        let sql = if modifier.is_empty() {
            format!("MATCH ({}) AGAINST (?)", cols)
        } else {
            format!("MATCH ({}) AGAINST (? {})", cols, modifier)
        };

        debug!("Compiled full-text predicate for {}: {}", self.model.model, sql);

        Ok(SqlFragment {
            sql,
            params: vec![self.term.clone()],
        })
    }
}

//! Deferred DDL registry for automatic FULLTEXT index creation.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info};

use crate::error::{FulltextError, Result};
use crate::model::{FullText, ModelDescriptor};

use super::ddl::fulltext_index_ddl;

/// Registry of deferred FULLTEXT index DDL, keyed by table name.
///
/// Applications register each full-text capable model once at schema
/// definition time, then call [`after_create`](Self::after_create) when the
/// backing table has been physically created. The returned statements are
/// handed to the database connection by the caller; each statement is
/// released at most once.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    deferred: Mutex<HashMap<String, Vec<String>>>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a full-text capable model type.
    ///
    /// Fails with `MissingColumns` if the model declares no columns. Models
    /// with automatic index creation disabled are validated but queue no DDL.
    /// Idempotent: re-registering a model queues nothing new.
    pub fn register<M: FullText>(&self) -> Result<()> {
        self.register_descriptor(&M::descriptor())
    }

    /// Register a model from its runtime descriptor.
    pub fn register_descriptor(&self, descriptor: &ModelDescriptor) -> Result<()> {
        descriptor.validate()?;

        if !descriptor.auto_index {
            debug!(
                "Model {} manages its FULLTEXT index via migrations, queueing nothing",
                descriptor.model
            );
            return Ok(());
        }

        let ddl = fulltext_index_ddl(&descriptor.table, &descriptor.columns);
        let mut deferred = self.lock_deferred()?;
        let statements = deferred.entry(descriptor.table.clone()).or_default();
        if statements.contains(&ddl) {
            debug!("Model {} already registered, skipping", descriptor.model);
            return Ok(());
        }

        statements.push(ddl);
        debug!(
            "Queued FULLTEXT index DDL for table {} ({})",
            descriptor.table, descriptor.model
        );
        Ok(())
    }

    /// Release the deferred DDL for a freshly created table.
    ///
    /// Returns the statements to execute, in registration order. A second
    /// call for the same table returns nothing.
    pub fn after_create(&self, table: &str) -> Result<Vec<String>> {
        let statements = self.lock_deferred()?.remove(table).unwrap_or_default();
        if !statements.is_empty() {
            info!(
                "Releasing {} FULLTEXT index statement(s) for table {}",
                statements.len(),
                table
            );
        }
        Ok(statements)
    }

    /// Tables that still have deferred DDL queued, sorted by name.
    pub fn pending_tables(&self) -> Result<Vec<String>> {
        let mut tables: Vec<String> = self.lock_deferred()?.keys().cloned().collect();
        tables.sort();
        Ok(tables)
    }

    /// Whether any DDL is queued for the given table.
    pub fn has_pending(&self, table: &str) -> bool {
        self.lock_deferred()
            .map(|deferred| deferred.contains_key(table))
            .unwrap_or(false)
    }

    fn lock_deferred(&self) -> Result<MutexGuard<'_, HashMap<String, Vec<String>>>> {
        self.deferred.lock().map_err(|_| FulltextError::Registry {
            message: "Failed to acquire registry lock".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Article;

    impl FullText for Article {
        fn table_name() -> &'static str {
            "articles"
        }

        fn columns() -> &'static [&'static str] {
            &["title", "body"]
        }
    }

    struct LedgerEntry;

    impl FullText for LedgerEntry {
        fn table_name() -> &'static str {
            "ledger_entries"
        }

        fn columns() -> &'static [&'static str] {
            &["memo"]
        }

        fn auto_index() -> bool {
            false
        }
    }

    struct Broken;

    impl FullText for Broken {
        fn table_name() -> &'static str {
            "broken"
        }

        fn columns() -> &'static [&'static str] {
            &[]
        }
    }

    #[test]
    fn test_register_queues_ddl() {
        let registry = SchemaRegistry::new();
        registry.register::<Article>().unwrap();

        assert!(registry.has_pending("articles"));
        let statements = registry.after_create("articles").unwrap();
        assert_eq!(
            statements,
            vec!["ALTER TABLE articles ADD FULLTEXT (title, body)"]
        );
    }

    #[test]
    fn test_after_create_fires_at_most_once() {
        let registry = SchemaRegistry::new();
        registry.register::<Article>().unwrap();

        assert_eq!(registry.after_create("articles").unwrap().len(), 1);
        assert!(registry.after_create("articles").unwrap().is_empty());
        assert!(!registry.has_pending("articles"));
    }

    #[test]
    fn test_register_is_idempotent() {
        let registry = SchemaRegistry::new();
        registry.register::<Article>().unwrap();
        registry.register::<Article>().unwrap();

        assert_eq!(registry.after_create("articles").unwrap().len(), 1);
    }

    #[test]
    fn test_migration_managed_model_queues_nothing() {
        let registry = SchemaRegistry::new();
        registry.register::<LedgerEntry>().unwrap();

        assert!(!registry.has_pending("ledger_entries"));
        assert!(registry.after_create("ledger_entries").unwrap().is_empty());
    }

    #[test]
    fn test_register_rejects_missing_columns() {
        let registry = SchemaRegistry::new();
        let err = registry.register::<Broken>().unwrap_err();
        assert_eq!(err.to_string(), "Model Broken: no full-text columns defined");
    }

    #[test]
    fn test_pending_tables_sorted() {
        let registry = SchemaRegistry::new();
        registry.register::<Article>().unwrap();
        registry
            .register_descriptor(&ModelDescriptor::new("Note", "aa_notes", &["memo"]))
            .unwrap();

        assert_eq!(registry.pending_tables().unwrap(), vec!["aa_notes", "articles"]);
    }
}

//! MySQL full-text search support for application model types.
//!
//! This crate provides the pieces needed to declare, create, and query
//! MySQL FULLTEXT indexes without hand-writing the SQL at every call site:
//!
//! - A [`FullText`] capability trait declaring a model's searchable columns
//! - A [`SchemaRegistry`] holding deferred `ALTER TABLE ... ADD FULLTEXT`
//!   DDL, released once per table when the table is created
//! - A [`FullTextSearch`] predicate compiled per SQL dialect into a
//!   `MATCH (...) AGAINST (?)` fragment with the term as a bind parameter
//! - [`FulltextIndex`] descriptors and [`MigrationWriter`] script emission
//!   for schemas managed by external migration tooling
//!
//! # Example
//!
//! ```rust,ignore
//! use fulltext_core::{Dialect, FullText, FullTextSearch, SchemaRegistry};
//!
//! struct Article;
//!
//! impl FullText for Article {
//!     fn table_name() -> &'static str {
//!         "articles"
//!     }
//!
//!     fn columns() -> &'static [&'static str] {
//!         &["title", "body"]
//!     }
//! }
//!
//! fn main() -> fulltext_core::Result<()> {
//!     // Schema setup: queue the index, release it once the table exists.
//!     let registry = SchemaRegistry::new();
//!     registry.register::<Article>()?;
//!     for ddl in registry.after_create("articles")? {
//!         // ALTER TABLE articles ADD FULLTEXT (title, body)
//!         println!("{}", ddl);
//!     }
//!
//!     // Query time: render the predicate for the WHERE clause.
//!     let fragment = FullTextSearch::new::<Article>("spam").compile(Dialect::MySql)?;
//!     // MATCH (`articles`.title, `articles`.body) AGAINST (?)
//!     println!("{}", fragment.sql);
//!     Ok(())
//! }
//! ```

pub mod dialect;
pub mod error;
pub mod migration;
pub mod model;
pub mod schema;
pub mod search;

// Re-export commonly used types
pub use dialect::Dialect;
pub use error::{FulltextError, Result};
pub use migration::{FulltextIndex, MigrationWriter, MYSQL_FULLTEXT_PREFIX};
pub use model::{FullText, ModelDescriptor};
pub use schema::{fulltext_index_ddl, strip_quotes, SchemaRegistry};
pub use search::{build_boolean_query, sanitize_boolean_term, FullTextSearch, MatchMode, SqlFragment};

//! Schema-time FULLTEXT index construction.
//!
//! This module provides:
//! - DDL rendering for `ALTER TABLE ... ADD FULLTEXT (...)`
//! - A registry of deferred DDL released when each table is created

mod ddl;
mod registry;

pub use ddl::{fulltext_index_ddl, strip_quotes};
pub use registry::SchemaRegistry;

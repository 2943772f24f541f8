//! Explicit FULLTEXT index construction for migration-managed schemas.
//!
//! This module provides:
//! - Index descriptors (`idx_<table>_fulltext`) for external migration tooling
//! - Versioned migration script emission

mod index;
mod writer;

pub use index::{FulltextIndex, MYSQL_FULLTEXT_PREFIX};
pub use writer::MigrationWriter;

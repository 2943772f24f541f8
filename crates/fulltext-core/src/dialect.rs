//! Target SQL dialects for full-text compilation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// SQL dialects a search expression can be compiled for.
///
/// Only MySQL has a `MATCH ... AGAINST` compiler; compiling for any other
/// dialect fails with an explicit unsupported-dialect error rather than
/// producing unusable SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    MySql,
    Postgres,
    Sqlite,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::MySql => "mysql",
            Dialect::Postgres => "postgres",
            Dialect::Sqlite => "sqlite",
        }
    }

    /// Whether this dialect has a full-text search compiler.
    pub fn supports_fulltext(&self) -> bool {
        matches!(self, Dialect::MySql)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

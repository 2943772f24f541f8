//! Full-text search expressions and their SQL compilation.
//!
//! This module provides:
//! - The `MATCH ... AGAINST` predicate and its per-dialect compiler
//! - Match mode modifiers (natural language, query expansion, boolean)
//! - Boolean-mode query building from raw user input

mod expr;
mod mode;
mod query;

pub use expr::{FullTextSearch, SqlFragment};
pub use mode::MatchMode;
pub use query::{build_boolean_query, sanitize_boolean_term};

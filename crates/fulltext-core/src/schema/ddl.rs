//! FULLTEXT index DDL rendering.

use regex::Regex;
use std::sync::LazyLock;

/// Quote characters stripped from column names before DDL interpolation.
static QUOTE_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"["']+"#).unwrap());

/// Strip quote characters from an identifier.
///
/// Column names are developer-controlled, so this is a minimal guard against
/// malformed identifiers, not a general SQL-safety mechanism.
pub fn strip_quotes(identifier: &str) -> String {
    QUOTE_CHARS.replace_all(identifier, "").into_owned()
}

/// Render the DDL that adds a FULLTEXT index to an existing table.
///
/// Output shape: `ALTER TABLE {table} ADD FULLTEXT ({c1}, {c2}, ...)` with
/// columns quote-stripped and comma-joined.
pub fn fulltext_index_ddl(table: &str, columns: &[String]) -> String {
    let cols = columns
        .iter()
        .map(|c| strip_quotes(c))
        .collect::<Vec<_>>()
        .join(", ");
    format!("ALTER TABLE {} ADD FULLTEXT ({})", table, cols)
}

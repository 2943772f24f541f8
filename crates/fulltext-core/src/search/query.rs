//! Boolean-mode query building utilities.

use regex::Regex;
use std::sync::LazyLock;

/// Operator characters reserved by MySQL boolean-mode search.
static BOOLEAN_OPERATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[+\-><()~*@"]+"#).unwrap());

/// Strip boolean-mode operator characters from a raw term.
pub fn sanitize_boolean_term(term: &str) -> String {
    BOOLEAN_OPERATORS.replace_all(term, "").into_owned()
}

/// Build a boolean-mode search expression from raw user input.
///
/// Each whitespace-separated term is sanitized and given a trailing
/// wildcard:
/// - "hello world" → `hello* world*`
/// - "c++ tutorial" → `c* tutorial*`
///
/// Returns an empty string when no searchable terms remain; callers should
/// treat that as "no filter". Pair the result with
/// `MatchMode::Boolean`.
pub fn build_boolean_query(input: &str) -> String {
    let input = input.to_lowercase();
    let mut parts = Vec::new();

    for term in input.split_whitespace() {
        let cleaned = sanitize_boolean_term(term);
        if !cleaned.is_empty() {
            parts.push(format!("{}*", cleaned));
        }
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_plain_term() {
        assert_eq!(sanitize_boolean_term("hello"), "hello");
    }

    #[test]
    fn test_sanitize_operators() {
        assert_eq!(sanitize_boolean_term("+hello"), "hello");
        assert_eq!(sanitize_boolean_term("-world"), "world");
        assert_eq!(sanitize_boolean_term("c++"), "c");
        assert_eq!(sanitize_boolean_term("\"quoted\""), "quoted");
        assert_eq!(sanitize_boolean_term("(group)"), "group");
    }

    #[test]
    fn test_build_query_single_term() {
        assert_eq!(build_boolean_query("hello"), "hello*");
    }

    #[test]
    fn test_build_query_multiple_terms() {
        assert_eq!(build_boolean_query("hello world"), "hello* world*");
    }

    #[test]
    fn test_build_query_strips_operators() {
        assert_eq!(build_boolean_query("+hello -world"), "hello* world*");
    }

    #[test]
    fn test_build_query_empty() {
        assert_eq!(build_boolean_query(""), "");
        assert_eq!(build_boolean_query("   "), "");
        assert_eq!(build_boolean_query("+-*"), "");
    }

    #[test]
    fn test_build_query_lowercases() {
        assert_eq!(build_boolean_query("Hello WORLD"), "hello* world*");
    }
}

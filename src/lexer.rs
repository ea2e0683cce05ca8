// ABOUTME: Lexical predicates for identifiers and signed integer literals

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new("^[A-Za-z][A-Za-z0-9_]*$").unwrap();
}

/// True iff `s` is a valid variable or function name.
pub fn is_identifier(s: &str) -> bool {
    IDENTIFIER.is_match(s)
}

/// True iff `s` is a decimal integer literal with at most one leading `-`.
pub fn is_int_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers() {
        assert!(is_identifier("x"));
        assert!(is_identifier("foo"));
        assert!(is_identifier("Foo_9"));
        assert!(is_identifier("a1_b2"));

        assert!(!is_identifier(""));
        assert!(!is_identifier("1x"));
        assert!(!is_identifier("_x"));
        assert!(!is_identifier("foo-bar"));
        assert!(!is_identifier("foo bar"));
        assert!(!is_identifier("="));
    }

    #[test]
    fn test_int_literals() {
        assert!(is_int_literal("0"));
        assert!(is_int_literal("42"));
        assert!(is_int_literal("-42"));
        assert!(is_int_literal("007"));
        assert!(is_int_literal("-0"));

        assert!(!is_int_literal(""));
        assert!(!is_int_literal("-"));
        assert!(!is_int_literal("--5"));
        assert!(!is_int_literal("+5"));
        assert!(!is_int_literal("4.2"));
        assert!(!is_int_literal("x"));
        assert!(!is_int_literal("4x"));
    }
}

//! String literal concatenation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rewrite::traits::*;

static LITERAL_PLUS_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"('(?:[^']|'')*')\s*\+\s*('(?:[^']|'')*')").expect("valid concat pattern")
});

/// `'a' + 'b'` → `'a' || 'b'`.
///
/// Only literal-to-literal concatenation is rewritten. `col + 'x'` is left
/// alone because `+` between a column and a literal may be arithmetic.
pub struct LiteralConcat;

impl RewriteRule for LiteralConcat {
    fn id(&self) -> &'static str {
        "literal_concat"
    }

    fn apply(&self, sql: &str, _ctx: &RewriteContext<'_>) -> String {
        // Matches do not overlap, so `'a' + 'b' + 'c'` needs a second pass
        // for the tail. Every pass removes at least one `+`.
        let mut current = sql.to_string();
        while LITERAL_PLUS_LITERAL.is_match(&current) {
            current = LITERAL_PLUS_LITERAL
                .replace_all(&current, "${1} || ${2}")
                .into_owned();
        }
        current
    }
}
